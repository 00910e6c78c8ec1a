//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use crate::model::{CodeLine, Document, Explanation};

use super::visitor::{walk, DocumentVisitor, VisitorAction};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, text, etc.)
    pub content: String,

    /// Document statistics
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: DocumentStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: DocumentStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics about a parsed guide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Code lines, blank ones included
    pub code_line_count: u32,

    /// Blank code lines
    pub blank_line_count: u32,

    /// Code lines inside at least one explanation
    pub explained_line_count: u32,

    /// Explanations at any depth
    pub explanation_count: u32,

    /// Explanations carrying an explicit order index
    pub ordered_explanation_count: u32,

    /// Deepest region nesting
    pub max_depth: u32,

    /// Whether the document has a title
    pub has_title: bool,

    /// Whether the document has an intro
    pub has_intro: bool,

    /// Whether the document has an outro
    pub has_outro: bool,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a document.
    pub fn collect(doc: &Document) -> Self {
        let mut visitor = StatsVisitor::default();
        walk(doc, &mut visitor);
        visitor.into_stats()
    }

    /// Fraction of code lines covered by at least one explanation.
    pub fn explained_ratio(&self) -> f32 {
        if self.code_line_count == 0 {
            0.0
        } else {
            self.explained_line_count as f32 / self.code_line_count as f32
        }
    }
}

/// Visitor that accumulates [`DocumentStats`].
#[derive(Debug, Clone, Default)]
pub struct StatsVisitor {
    stats: DocumentStats,
}

impl StatsVisitor {
    /// Statistics gathered so far.
    pub fn stats(&self) -> &DocumentStats {
        &self.stats
    }

    /// Consume the visitor and return the statistics.
    pub fn into_stats(self) -> DocumentStats {
        self.stats
    }
}

impl DocumentVisitor for StatsVisitor {
    fn on_document_start(&mut self, doc: &Document) {
        self.stats.has_title = doc.title.is_some();
        self.stats.has_intro = doc.intro.is_some();
        self.stats.has_outro = doc.outro.is_some();
    }

    fn visit_code_line(&mut self, line: &CodeLine, depth: usize) -> VisitorAction {
        self.stats.code_line_count += 1;
        if line.is_blank() {
            self.stats.blank_line_count += 1;
        }
        if depth > 0 {
            self.stats.explained_line_count += 1;
        }
        VisitorAction::Continue
    }

    fn enter_explanation(&mut self, explanation: &Explanation, depth: usize) -> VisitorAction {
        self.stats.explanation_count += 1;
        if explanation.index.is_some() {
            self.stats.ordered_explanation_count += 1;
        }
        self.stats.max_depth = self.stats.max_depth.max(depth as u32 + 1);
        VisitorAction::Continue
    }
}
