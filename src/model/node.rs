//! Content tree nodes: code lines and explanation regions.

use serde::{Deserialize, Serialize};

use super::events::{Event, TreeEvents};

/// A node in the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// A single line of code
    Code(CodeLine),
    /// An annotated region wrapping further nodes
    Explanation(Explanation),
}

impl Node {
    /// Create a code line node.
    pub fn code(text: impl Into<String>) -> Self {
        Node::Code(CodeLine::new(text))
    }

    /// Check if this node is a code line.
    pub fn is_code(&self) -> bool {
        matches!(self, Node::Code(_))
    }

    /// Get the code line if this node is one.
    pub fn as_code(&self) -> Option<&CodeLine> {
        match self {
            Node::Code(line) => Some(line),
            _ => None,
        }
    }

    /// Get the explanation if this node is one.
    pub fn as_explanation(&self) -> Option<&Explanation> {
        match self {
            Node::Explanation(e) => Some(e),
            _ => None,
        }
    }

    /// Nesting depth of this node (code lines are 0, a region adds 1).
    pub fn depth(&self) -> usize {
        match self {
            Node::Code(_) => 0,
            Node::Explanation(e) => e.depth(),
        }
    }
}

impl From<CodeLine> for Node {
    fn from(line: CodeLine) -> Self {
        Node::Code(line)
    }
}

impl From<Explanation> for Node {
    fn from(explanation: Explanation) -> Self {
        Node::Explanation(explanation)
    }
}

/// One line of code, kept verbatim.
///
/// Blank lines are empty strings here; substituting visible content for
/// them is left to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLine {
    /// Literal line text (no trailing newline)
    pub text: String,
}

impl CodeLine {
    /// Create a new code line.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Check if the line is blank (empty or whitespace only).
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An annotated region of code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// Explanatory text; lines of a multi-line label are joined with `\n`
    pub label: String,

    /// Explicit presentation order (1-indexed), if the markup gave one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,

    /// Nested content, in source order
    pub children: Vec<Node>,
}

impl Explanation {
    /// Create an explanation without an explicit order index.
    pub fn new(label: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            label: label.into(),
            index: None,
            children,
        }
    }

    /// Set the explicit order index.
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    /// Zero-based presentation step derived from the explicit index.
    ///
    /// An index of 0 maps to step 0 as well.
    pub fn step(&self) -> Option<u32> {
        self.index.map(|i| i.saturating_sub(1))
    }

    /// Add a child node.
    pub fn add_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Maximum nesting depth of this region, counting itself.
    pub fn depth(&self) -> usize {
        1 + max_depth(&self.children)
    }

    /// Code lines under this region, depth-first in source order.
    pub fn code_lines(&self) -> Vec<&CodeLine> {
        code_lines(&self.children)
    }
}

impl Drop for Explanation {
    // Nested regions are flattened onto a work list and dropped one level
    // at a time.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Explanation(mut e) = node {
                pending.append(&mut e.children);
            }
        }
    }
}

pub(crate) fn max_depth(nodes: &[Node]) -> usize {
    TreeEvents::new(nodes)
        .filter_map(|event| match event {
            Event::Enter(_, depth) => Some(depth + 1),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

pub(crate) fn code_lines(nodes: &[Node]) -> Vec<&CodeLine> {
    TreeEvents::new(nodes)
        .filter_map(|event| match event {
            Event::Code(line, _) => Some(line),
            _ => None,
        })
        .collect()
}
