//! Document model for annotated code.
//!
//! The parser produces these types and renderers consume them. A
//! [`Document`] owns a tree of [`Node`]s: code lines as leaves and
//! [`Explanation`] regions as interior nodes.

mod document;
mod events;
mod node;

pub use document::Document;
pub use events::{Event, TreeEvents};
pub use node::{CodeLine, Explanation, Node};
