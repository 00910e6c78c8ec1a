//! Error types for the codeguide library.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for codeguide operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of document-level metadata collected while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    /// Document title lines
    Title,
    /// Intro (and outro) prose lines
    Intro,
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataKind::Title => write!(f, "title"),
            MetadataKind::Intro => write!(f, "intro"),
        }
    }
}

/// Error types that can occur while parsing or rendering a guide.
///
/// Line numbers carried by the variants are 1-indexed.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configured comment-start token cannot build the markup patterns.
    #[error("Invalid comment start token: {0:?}")]
    InvalidCommentStart(String),

    /// A markup pattern failed to compile.
    #[error("Invalid markup pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// More metadata runs of one kind than the document allows.
    #[error("Too many {kind} blocks: found {found}, at most {allowed} allowed (line {line})")]
    TooManyMetadataNodes {
        kind: MetadataKind,
        found: usize,
        allowed: usize,
        /// Line of the first surplus run
        line: usize,
    },

    /// A region was still open at end of input.
    #[error("Unterminated region {label:?} opened at line {line}")]
    UnterminatedRegion { line: usize, label: String },

    /// A region end appeared with no region open.
    #[error("Region end at line {line} has no matching region start")]
    UnmatchedRegionEnd { line: usize },

    /// A region opened deeper than the configured nesting limit.
    #[error("Region at line {line} nests deeper than the limit of {limit}")]
    NestingTooDeep { line: usize, limit: usize },

    /// No language profile is registered for a name or file extension.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnmatchedRegionEnd { line: 7 };
        assert_eq!(
            err.to_string(),
            "Region end at line 7 has no matching region start"
        );

        let err = Error::TooManyMetadataNodes {
            kind: MetadataKind::Title,
            found: 2,
            allowed: 1,
            line: 12,
        };
        assert_eq!(
            err.to_string(),
            "Too many title blocks: found 2, at most 1 allowed (line 12)"
        );

        let err = Error::UnterminatedRegion {
            line: 3,
            label: "setup".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unterminated region \"setup\" opened at line 3"
        );

        let err = Error::NestingTooDeep {
            line: 40,
            limit: 32,
        };
        assert_eq!(
            err.to_string(),
            "Region at line 40 nests deeper than the limit of 32"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
