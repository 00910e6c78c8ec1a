//! Document-level types.

use super::events::{Event, TreeEvents};
use super::node::{code_lines, max_depth};
use super::{CodeLine, Explanation, Node};
use serde::{Deserialize, Serialize};

/// A parsed guide: the content tree plus document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Leading prose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,

    /// Trailing prose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outro: Option<String>,

    /// Top-level nodes, in source order
    pub children: Vec<Node>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from top-level nodes with no metadata.
    pub fn with_children(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    /// Add a top-level node.
    pub fn add_node(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Check if the document has no content nodes.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if the document carries any title, intro or outro.
    pub fn has_metadata(&self) -> bool {
        self.title.is_some() || self.intro.is_some() || self.outro.is_some()
    }

    /// Maximum region nesting depth (0 when there are no regions).
    pub fn depth(&self) -> usize {
        max_depth(&self.children)
    }

    /// All code lines, depth-first in source order.
    pub fn code_lines(&self) -> Vec<&CodeLine> {
        code_lines(&self.children)
    }

    /// All explanations, depth-first in source order.
    pub fn explanations(&self) -> Vec<&Explanation> {
        TreeEvents::new(&self.children)
            .filter_map(|event| match event {
                Event::Enter(e, _) => Some(e),
                _ => None,
            })
            .collect()
    }

    /// The code with all markup removed, one line per code line.
    pub fn plain_code(&self) -> String {
        self.code_lines()
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.title = Some("Example".to_string());
        doc.add_node(Node::code("l1"));
        doc.add_node(Explanation::new(
            "A",
            vec![
                Node::code("l2"),
                Explanation::new("B", vec![Node::code("l3")]).into(),
            ],
        ));
        doc.add_node(Node::code("l4"));
        doc
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(!doc.has_metadata());
        assert_eq!(doc.depth(), 0);
    }

    #[test]
    fn test_plain_code() {
        assert_eq!(sample().plain_code(), "l1\nl2\nl3\nl4");
    }

    #[test]
    fn test_explanations_in_document_order() {
        let doc = sample();
        let labels: Vec<&str> = doc.explanations().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(doc.depth(), 2);
        assert!(doc.has_metadata());
    }
}
