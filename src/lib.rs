//! # codeguide
//!
//! Turn comment-annotated source code into a guided tour.
//!
//! Annotations live in ordinary line comments, so the annotated file stays
//! valid source. With the default `#` comment token:
//!
//! ```text
//! #### A Tiny Guide ####
//! ### Some prose introducing the code.
//! import sys
//! ## [1] Read the arguments
//! args = sys.argv[1:]
//! ##.
//! ```
//!
//! `#### Title ####` names the document, `###` lines carry the intro (and a
//! trailing outro), `##` opens a region explaining the code up to the
//! matching `##.`. Regions nest.
//!
//! ## Quick Start
//!
//! ```
//! use codeguide::{parse_str, render};
//!
//! fn main() -> codeguide::Result<()> {
//!     let doc = parse_str("x = 1\n## set y\ny = 2\n##.")?;
//!     assert_eq!(doc.explanations()[0].label, "set y");
//!
//!     let html = render::to_html(&doc, &render::RenderOptions::default())?;
//!     assert!(html.contains("bootstro"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Configurable markup**: any comment token, doubled or pipe dialect
//! - **Total parsing**: malformed nesting is recovered by default, or
//!   rejected in strict mode
//! - **Output formats**: guided-tour HTML, plain code, JSON
//! - **Language registry**: pick the markup from a file's extension

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, LanguageProfile, LanguageRegistry, OutputFormat};
pub use error::{Error, MetadataKind, Result};
pub use model::{CodeLine, Document, Explanation, Node};
pub use parser::{
    Dialect, ErrorMode, GuideParser, MarkupSyntax, ParseOptions, DEFAULT_MAX_DEPTH,
};
pub use render::{DocumentStats, JsonFormat, RenderOptions};

use std::io::Read;
use std::path::Path;

/// Parse annotated source text with the default `#` markup.
///
/// # Example
///
/// ```
/// use codeguide::{parse_str, Node};
///
/// let doc = parse_str("l1\n## t1\nt1 l1\n##.\nl2").unwrap();
/// assert_eq!(doc.children.len(), 3);
/// assert_eq!(doc.children[0], Node::code("l1"));
/// ```
pub fn parse_str(source: &str) -> Result<Document> {
    GuideParser::new()?.parse_str(source)
}

/// Parse annotated source text with custom options.
pub fn parse_str_with_options(source: &str, options: ParseOptions) -> Result<Document> {
    GuideParser::with_options(options)?.parse_str(source)
}

/// Parse a sequence of lines (newlines already stripped).
pub fn parse_lines<I>(lines: I) -> Result<Document>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    GuideParser::new()?.parse_lines(lines)
}

/// Parse a sequence of lines with custom options.
pub fn parse_lines_with_options<I>(lines: I, options: ParseOptions) -> Result<Document>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    GuideParser::with_options(options)?.parse_lines(lines)
}

/// Parse an annotated source file.
///
/// # Example
///
/// ```no_run
/// use codeguide::parse_file;
///
/// let doc = parse_file("example.py").unwrap();
/// println!("Regions: {}", doc.explanations().len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    GuideParser::new()?.parse_file(path)
}

/// Parse an annotated source file with custom options.
///
/// # Example
///
/// ```no_run
/// use codeguide::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_comment_start("//").strict();
/// let doc = parse_file_with_options("main.rs", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    GuideParser::with_options(options)?.parse_file(path)
}

/// Parse annotated source from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    GuideParser::new()?.parse_reader(reader)
}

/// Parse annotated source from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    GuideParser::with_options(options)?.parse_reader(reader)
}

/// Convert an annotated source file to an HTML page.
///
/// # Example
///
/// ```no_run
/// use codeguide::to_html;
///
/// let html = to_html("example.py").unwrap();
/// std::fs::write("example.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Builder for parsing and rendering annotated source.
///
/// # Example
///
/// ```
/// use codeguide::CodeGuide;
///
/// let html = CodeGuide::new()
///     .with_comment_start("//")
///     .with_language("rust")
///     .with_resource_dir("resources")
///     .strict()
///     .parse_str("//// main\nfn main() {}\n////.")?
///     .to_html()?;
/// assert!(html.contains("resources/code-guide.js"));
/// # Ok::<(), codeguide::Error>(())
/// ```
pub struct CodeGuide {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl CodeGuide {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the comment token of the annotated language.
    pub fn with_comment_start(mut self, token: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_comment_start(token);
        self
    }

    /// Set the marker dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.parse_options = self.parse_options.with_dialect(dialect);
        self
    }

    /// Reject malformed markup.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Recover from malformed markup (the default).
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the deepest region nesting accepted.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.parse_options = self.parse_options.with_max_depth(depth);
        self
    }

    /// Accept regions nested to any depth.
    pub fn unlimited_depth(mut self) -> Self {
        self.parse_options = self.parse_options.unlimited_depth();
        self
    }

    /// Set the language named in the rendered page.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_language(language);
        self
    }

    /// Set the directory scripts and stylesheets are loaded from.
    pub fn with_resource_dir(mut self, dir: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_resource_dir(dir);
        self
    }

    /// Use a language profile's markup and name.
    pub fn with_profile(mut self, profile: &LanguageProfile) -> Self {
        let max_depth = self.parse_options.max_depth;
        self.parse_options = profile.parse_options(self.parse_options.error_mode);
        self.parse_options.max_depth = max_depth;
        self.render_options = self.render_options.with_language(profile.name.clone());
        self
    }

    /// Parse source text.
    pub fn parse_str(self, source: &str) -> Result<CodeGuideResult> {
        let document = GuideParser::with_options(self.parse_options)?.parse_str(source)?;
        Ok(CodeGuideResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a sequence of lines.
    pub fn parse_lines<I>(self, lines: I) -> Result<CodeGuideResult>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let document = GuideParser::with_options(self.parse_options)?.parse_lines(lines)?;
        Ok(CodeGuideResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<CodeGuideResult> {
        let document = GuideParser::with_options(self.parse_options)?.parse_file(path)?;
        Ok(CodeGuideResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for CodeGuide {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing annotated source.
pub struct CodeGuideResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl CodeGuideResult {
    /// Convert to an HTML page.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to plain code with markup removed.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Statistics of the parsed document.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::collect(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
