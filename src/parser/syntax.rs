//! Markup syntax: the comment token and the patterns derived from it.
//!
//! Every markup line starts (after optional indentation) with a marker built
//! from the language's single-line comment token. Two dialects exist:
//!
//! | Dialect   | region start   | region end | intro line | title line          |
//! |-----------|----------------|------------|------------|---------------------|
//! | `Doubled` | `## [n] label` | `##.`      | `### text` | `#### Title ####`   |
//! | `Pipe`    | `#\| [n] label` | `#\|.`      | `#\|\| text` | `#\|\| Title \|\|#`  |
//!
//! The title line closes with its opening marker mirrored.

use regex::Regex;

use crate::error::{Error, Result};

use super::classify::LineKind;

/// Default comment token.
pub const DEFAULT_COMMENT_START: &str = "#";

/// How markers are derived from the comment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Region marker is the token twice, intro three times, title four
    #[default]
    Doubled,
    /// Region marker is the token followed by `|`, intro marker by `||`
    Pipe,
}

/// Markup syntax configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSyntax {
    /// Single-line comment token of the annotated language
    pub comment_start: String,

    /// Marker dialect
    pub dialect: Dialect,
}

impl MarkupSyntax {
    /// Create a syntax for the given comment token in the default dialect.
    pub fn new(comment_start: impl Into<String>) -> Self {
        Self {
            comment_start: comment_start.into(),
            dialect: Dialect::default(),
        }
    }

    /// Set the dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Marker opening and closing regions.
    pub fn region_marker(&self) -> String {
        match self.dialect {
            Dialect::Doubled => self.comment_start.repeat(2),
            Dialect::Pipe => format!("{}|", self.comment_start),
        }
    }

    /// Marker of intro/outro lines.
    pub fn intro_marker(&self) -> String {
        match self.dialect {
            Dialect::Doubled => self.comment_start.repeat(3),
            Dialect::Pipe => format!("{}||", self.comment_start),
        }
    }

    /// Marker opening a title line.
    pub fn title_marker(&self) -> String {
        match self.dialect {
            Dialect::Doubled => self.comment_start.repeat(4),
            Dialect::Pipe => self.intro_marker(),
        }
    }

    /// Decoration closing a title line.
    pub fn title_suffix(&self) -> String {
        self.title_marker().chars().rev().collect()
    }

    /// Check that the comment token can build unambiguous markers.
    pub fn validate(&self) -> Result<()> {
        if self.comment_start.is_empty() || self.comment_start.chars().any(char::is_whitespace) {
            return Err(Error::InvalidCommentStart(self.comment_start.clone()));
        }
        Ok(())
    }

    /// Compile the line patterns in priority order.
    ///
    /// Title and intro come first because their longer markers also satisfy
    /// the region-start pattern; region end precedes region start because
    /// the end token would otherwise read as a start with an empty label.
    pub(crate) fn patterns(&self) -> Result<Vec<(LineKind, Regex)>> {
        self.validate()?;

        let region = regex::escape(&self.region_marker());
        let intro = regex::escape(&self.intro_marker());
        let title_marker = regex::escape(&self.title_marker());
        let title_suffix = regex::escape(&self.title_suffix());

        let title = Regex::new(&format!(
            r"^\s*{title_marker}\s+(?P<text>.*?\S)\s+{title_suffix}\s*$"
        ))?;
        let intro = Regex::new(&format!(r"^\s*{intro}(?:\s*| (?P<text>.+?))$"))?;
        let region_end = Regex::new(&format!(r"^\s*{region}\.\s*$"))?;
        let region_start = Regex::new(&format!(
            r"^\s*{region}(?:(?: \[(?P<index>[0-9]+)\]\s*)? (?P<text>.*?))?$"
        ))?;

        Ok(vec![
            (LineKind::Title, title),
            (LineKind::Intro, intro),
            (LineKind::RegionEnd, region_end),
            (LineKind::RegionStart, region_start),
        ])
    }
}

impl Default for MarkupSyntax {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENT_START)
    }
}
