//! Grouping of classified lines into runs of equal kind.

use std::iter::Peekable;

use super::classify::{ClassifiedLine, LineKind};

/// A maximal sequence of consecutive lines sharing one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Kind shared by every line of the run
    pub kind: LineKind,

    /// Lines in input order (never empty)
    pub lines: Vec<ClassifiedLine>,
}

impl Run {
    /// Position of the first line.
    pub fn position(&self) -> usize {
        self.lines.first().map(|l| l.position).unwrap_or(0)
    }

    /// 1-indexed line number of the first line.
    pub fn line_number(&self) -> usize {
        self.position() + 1
    }

    /// Number of lines in the run.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false for runs produced by [`group_runs`].
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Extracted texts joined with newlines; blank segments are kept.
    pub fn joined_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.class.text().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lazy iterator over runs; see [`group_runs`].
pub struct Runs<I: Iterator<Item = ClassifiedLine>> {
    lines: Peekable<I>,
}

impl<I: Iterator<Item = ClassifiedLine>> Iterator for Runs<I> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let first = self.lines.next()?;
        let kind = first.kind();
        let mut lines = vec![first];
        while let Some(line) = self.lines.next_if(|l| l.kind() == kind) {
            lines.push(line);
        }
        Some(Run { kind, lines })
    }
}

/// Group classified lines into maximal runs.
///
/// Adjacent lines belong together when their kinds are equal; extracted
/// fields (such as order indices) are not compared.
pub fn group_runs<I>(lines: I) -> Runs<I::IntoIter>
where
    I: IntoIterator<Item = ClassifiedLine>,
{
    Runs {
        lines: lines.into_iter().peekable(),
    }
}
