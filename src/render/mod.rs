//! Rendering module for converting parsed guides to output formats.

mod html;
mod json;
mod options;
mod result;
mod text;
pub mod visitor;

pub use html::{
    to_html, to_html_with_stats, write_html, CodeFormatter, EscapedCode, HtmlRenderer, PlainProse,
    ProseFormatter,
};
pub use json::{from_json, to_json, JsonFormat, MAX_JSON_DEPTH};
pub use options::{RenderOptions, SCRIPTS, STYLESHEETS};
pub use result::{DocumentStats, RenderResult, StatsVisitor};
pub use text::to_text;
pub use visitor::{
    walk, CompositeVisitor, DefaultVisitor, DocumentVisitor, Event, MaxDepthVisitor,
    SkipBlankLinesVisitor, TreeEvents, VisitorAction,
};
