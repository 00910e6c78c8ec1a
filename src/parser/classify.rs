//! Line classification.

use regex::{Captures, Regex};

use crate::error::Result;

use super::syntax::MarkupSyntax;

/// Syntactic kind of a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Ordinary code
    Plain,
    /// Document title text
    Title,
    /// Intro or outro prose
    Intro,
    /// Opens a region (or continues its label)
    RegionStart,
    /// Closes a region
    RegionEnd,
}

impl LineKind {
    /// Check if lines of this kind are markup (removed from the code).
    pub fn is_markup(&self) -> bool {
        !matches!(self, LineKind::Plain)
    }
}

/// A line's kind together with the fields extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Plain,
    Title { text: String },
    Intro { text: String },
    RegionStart { index: Option<u32>, text: String },
    RegionEnd,
}

impl LineClass {
    /// Field-less kind of this class.
    pub fn kind(&self) -> LineKind {
        match self {
            LineClass::Plain => LineKind::Plain,
            LineClass::Title { .. } => LineKind::Title,
            LineClass::Intro { .. } => LineKind::Intro,
            LineClass::RegionStart { .. } => LineKind::RegionStart,
            LineClass::RegionEnd => LineKind::RegionEnd,
        }
    }

    /// Free text carried by title, intro and region-start lines.
    pub fn text(&self) -> Option<&str> {
        match self {
            LineClass::Title { text }
            | LineClass::Intro { text }
            | LineClass::RegionStart { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// One source line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// 0-indexed position in the input
    pub position: usize,

    /// The line as read, newline stripped
    pub source: String,

    /// Kind and extracted fields
    pub class: LineClass,
}

impl ClassifiedLine {
    /// Kind of this line.
    pub fn kind(&self) -> LineKind {
        self.class.kind()
    }

    /// 1-indexed line number, for messages.
    pub fn line_number(&self) -> usize {
        self.position + 1
    }
}

/// Classifies lines against the markup patterns of one syntax.
///
/// Patterns are tried top to bottom and the first match wins; anything
/// unmatched is plain code, so classification never fails.
#[derive(Debug, Clone)]
pub struct Classifier {
    patterns: Vec<(LineKind, Regex)>,
}

impl Classifier {
    /// Compile the patterns for a syntax.
    pub fn new(syntax: &MarkupSyntax) -> Result<Self> {
        Ok(Self {
            patterns: syntax.patterns()?,
        })
    }

    /// Kind of a line, without extracting fields.
    pub fn kind_of(&self, line: &str) -> LineKind {
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(line))
            .map(|(kind, _)| *kind)
            .unwrap_or(LineKind::Plain)
    }

    /// Classify one line.
    pub fn classify(&self, position: usize, line: impl Into<String>) -> ClassifiedLine {
        let source = line.into();
        let class = self.class_of(position, &source);
        ClassifiedLine {
            position,
            source,
            class,
        }
    }

    fn class_of(&self, position: usize, line: &str) -> LineClass {
        for (kind, pattern) in &self.patterns {
            if let Some(caps) = pattern.captures(line) {
                return match kind {
                    LineKind::Title => LineClass::Title {
                        text: captured_text(&caps),
                    },
                    LineKind::Intro => LineClass::Intro {
                        text: captured_text(&caps),
                    },
                    LineKind::RegionEnd => LineClass::RegionEnd,
                    LineKind::RegionStart => LineClass::RegionStart {
                        index: captured_index(&caps, position),
                        text: captured_text(&caps),
                    },
                    LineKind::Plain => LineClass::Plain,
                };
            }
        }
        LineClass::Plain
    }
}

fn captured_text(caps: &Captures<'_>) -> String {
    caps.name("text")
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn captured_index(caps: &Captures<'_>, position: usize) -> Option<u32> {
    let digits = caps.name("index")?.as_str();
    match digits.parse::<u32>() {
        Ok(index) => Some(index),
        Err(e) => {
            log::warn!(
                "Ignoring order index {} on line {}: {}",
                digits,
                position + 1,
                e
            );
            None
        }
    }
}
