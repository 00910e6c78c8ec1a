//! Annotation parsing.
//!
//! Parsing runs in four stages, each consuming the previous one's output
//! in order: lines are classified ([`Classifier`]), grouped into runs of
//! equal kind ([`group_runs`]), built into a tree ([`TreeBuilder`]), and
//! assembled into a [`Document`](crate::model::Document) ([`assemble`]).
//! [`GuideParser`] drives all four.

mod assemble;
mod builder;
mod classify;
mod guide_parser;
mod options;
mod runs;
mod syntax;

pub use assemble::{assemble, MAX_INTROS, MAX_TITLES};
pub use builder::{build_tree, MetadataNode, ParsedTree, TreeBuilder};
pub use classify::{ClassifiedLine, Classifier, LineClass, LineKind};
pub use guide_parser::GuideParser;
pub use options::{ErrorMode, ParseOptions, DEFAULT_MAX_DEPTH};
pub use runs::{group_runs, Run, Runs};
pub use syntax::{Dialect, MarkupSyntax, DEFAULT_COMMENT_START};
