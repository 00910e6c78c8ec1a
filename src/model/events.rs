//! Depth-first traversal over a content tree without recursion.

use super::{CodeLine, Explanation, Node};

/// One step of a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A code line at the given depth
    Code(&'a CodeLine, usize),
    /// Entering an explanation at the given depth
    Enter(&'a Explanation, usize),
    /// Leaving an explanation entered at the given depth
    Leave(&'a Explanation, usize),
}

/// Iterative depth-first traversal over a node sequence.
///
/// The open regions live on a heap stack, so trees of any depth can be
/// walked.
pub struct TreeEvents<'a> {
    stack: Vec<(Option<&'a Explanation>, std::slice::Iter<'a, Node>)>,
    just_entered: bool,
}

impl<'a> TreeEvents<'a> {
    /// Start a traversal of the given top-level nodes.
    pub fn new(nodes: &'a [Node]) -> Self {
        Self {
            stack: vec![(None, nodes.iter())],
            just_entered: false,
        }
    }

    /// Abandon the explanation just entered, without a `Leave` event.
    ///
    /// Only valid directly after an [`Event::Enter`]; anywhere else it
    /// does nothing and returns `false`.
    pub fn skip_current(&mut self) -> bool {
        if !self.just_entered {
            return false;
        }
        self.just_entered = false;
        self.stack.pop();
        true
    }

    fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }
}

impl<'a> Iterator for TreeEvents<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Event<'a>> {
        self.just_entered = false;
        let depth = self.depth();
        let (owner, iter) = self.stack.last_mut()?;
        match iter.next() {
            Some(Node::Code(line)) => Some(Event::Code(line, depth)),
            Some(Node::Explanation(e)) => {
                self.stack.push((Some(e), e.children.iter()));
                self.just_entered = true;
                Some(Event::Enter(e, depth))
            }
            None => {
                let owner = *owner;
                self.stack.pop();
                owner.map(|e| Event::Leave(e, depth - 1))
            }
        }
    }
}
