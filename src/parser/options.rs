//! Parsing options and configuration.

use super::syntax::{Dialect, MarkupSyntax};

/// Default limit on region nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for parsing annotated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Markup syntax (comment token and dialect)
    pub syntax: MarkupSyntax,

    /// How structural markup errors are handled
    pub error_mode: ErrorMode,

    /// Deepest region nesting accepted, `None` for no limit
    ///
    /// Exceeding it fails the parse in either error mode.
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            syntax: MarkupSyntax::default(),
            error_mode: ErrorMode::default(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment-start token the markup is built from.
    pub fn with_comment_start(mut self, token: impl Into<String>) -> Self {
        self.syntax.comment_start = token.into();
        self
    }

    /// Set the markup dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.syntax.dialect = dialect;
        self
    }

    /// Replace the whole markup syntax.
    pub fn with_syntax(mut self, syntax: MarkupSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Set the deepest region nesting accepted.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Accept regions nested to any depth.
    pub fn unlimited_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Fail on unbalanced regions and surplus intro blocks.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Tolerate unbalanced regions (the default).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }
}

/// Error handling mode during parsing.
///
/// More than one title block is an error in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Close unterminated regions at end of input, drop unmatched region
    /// ends, and keep only the first and last intro blocks
    #[default]
    Lenient,
    /// Fail on any of the above
    Strict,
}
