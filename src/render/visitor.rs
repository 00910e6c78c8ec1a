//! Visitor pattern for customizing document rendering.
//!
//! The visitor pattern allows users to customize how tree nodes are
//! rendered, or to analyse a document, without modifying the core
//! rendering logic. Traversal is iterative, so deeply nested documents
//! are walked without recursion.
//!
//! # Example
//!
//! ```
//! use codeguide::model::Explanation;
//! use codeguide::render::visitor::{DocumentVisitor, VisitorAction};
//!
//! struct HideNotes;
//!
//! impl DocumentVisitor for HideNotes {
//!     fn enter_explanation(&mut self, e: &Explanation, _depth: usize) -> VisitorAction {
//!         if e.label.starts_with("NOTE") {
//!             VisitorAction::Skip
//!         } else {
//!             VisitorAction::Continue
//!         }
//!     }
//! }
//! ```

pub use crate::model::{Event, TreeEvents};

use crate::model::{CodeLine, Document, Explanation};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the node (and, for explanations, its whole subtree) with
    /// custom output.
    Replace(String),

    /// Skip this node and its subtree entirely.
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the node should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting document nodes.
///
/// `depth` is the number of explanations enclosing the node. All methods
/// return `VisitorAction::Continue` by default.
pub trait DocumentVisitor: Send + Sync {
    /// Called once before any node.
    fn on_document_start(&mut self, doc: &Document) {
        let _ = doc;
    }

    /// Called for every code line.
    fn visit_code_line(&mut self, line: &CodeLine, depth: usize) -> VisitorAction {
        let _ = (line, depth);
        VisitorAction::Continue
    }

    /// Called before an explanation's children.
    ///
    /// Returning `Skip` or `Replace` suppresses the children and the
    /// matching [`leave_explanation`](Self::leave_explanation) call.
    fn enter_explanation(&mut self, explanation: &Explanation, depth: usize) -> VisitorAction {
        let _ = (explanation, depth);
        VisitorAction::Continue
    }

    /// Called after an explanation's children.
    fn leave_explanation(&mut self, explanation: &Explanation, depth: usize) {
        let _ = (explanation, depth);
    }

    /// Called once after all nodes.
    fn on_document_end(&mut self, doc: &Document) {
        let _ = doc;
    }
}

/// Walk a document depth-first, calling the visitor for each node.
///
/// Replacement content is ignored here; renderers use it.
pub fn walk<V: DocumentVisitor + ?Sized>(doc: &Document, visitor: &mut V) {
    visitor.on_document_start(doc);
    let mut events = TreeEvents::new(&doc.children);
    while let Some(event) = events.next() {
        match event {
            Event::Code(line, depth) => {
                visitor.visit_code_line(line, depth);
            }
            Event::Enter(e, depth) => {
                if !matches!(visitor.enter_explanation(e, depth), VisitorAction::Continue) {
                    events.skip_current();
                }
            }
            Event::Leave(e, depth) => visitor.leave_explanation(e, depth),
        }
    }
    visitor.on_document_end(doc);
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentVisitor for DefaultVisitor {}

/// Visitor that drops blank code lines.
#[derive(Debug, Clone, Default)]
pub struct SkipBlankLinesVisitor;

impl DocumentVisitor for SkipBlankLinesVisitor {
    fn visit_code_line(&mut self, line: &CodeLine, _depth: usize) -> VisitorAction {
        if line.is_blank() {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

/// Visitor that flattens explanations nested deeper than a limit.
///
/// Regions past the limit are skipped, code included; use it to render an
/// overview of a heavily annotated file.
#[derive(Debug, Clone)]
pub struct MaxDepthVisitor {
    max_depth: usize,
}

impl MaxDepthVisitor {
    /// Keep at most `max_depth` levels of explanations.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl DocumentVisitor for MaxDepthVisitor {
    fn enter_explanation(&mut self, _explanation: &Explanation, depth: usize) -> VisitorAction {
        if depth >= self.max_depth {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn DocumentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for CompositeVisitor {
    fn on_document_start(&mut self, doc: &Document) {
        for visitor in &mut self.visitors {
            visitor.on_document_start(doc);
        }
    }

    fn visit_code_line(&mut self, line: &CodeLine, depth: usize) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_code_line(line, depth);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn enter_explanation(&mut self, explanation: &Explanation, depth: usize) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.enter_explanation(explanation, depth);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn leave_explanation(&mut self, explanation: &Explanation, depth: usize) {
        for visitor in &mut self.visitors {
            visitor.leave_explanation(explanation, depth);
        }
    }

    fn on_document_end(&mut self, doc: &Document) {
        for visitor in &mut self.visitors {
            visitor.on_document_end(doc);
        }
    }
}
