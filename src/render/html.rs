//! HTML rendering for guided-tour pages.

use std::io::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::error::{Error, Result};
use crate::model::{CodeLine, Document, Explanation};

use super::options::{SCRIPTS, STYLESHEETS};
use super::visitor::{DocumentVisitor, Event, TreeEvents, VisitorAction};
use super::{DocumentStats, RenderOptions, RenderResult};

/// Formats the content of a single code line.
///
/// The returned string is inserted verbatim inside the line's `<pre>`
/// element, so implementations must escape it themselves.
pub trait CodeFormatter: Send + Sync {
    /// Format one line of code.
    fn format_line(&self, text: &str, language: Option<&str>) -> String;
}

/// Code formatter that only escapes HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapedCode;

impl CodeFormatter for EscapedCode {
    fn format_line(&self, text: &str, _language: Option<&str>) -> String {
        if text.is_empty() {
            // An empty <pre> collapses to zero height.
            " ".to_string()
        } else {
            encode_text(text).into_owned()
        }
    }
}

/// Formats explanation labels, intros and outros.
pub trait ProseFormatter: Send + Sync {
    /// Format a block of prose into HTML.
    fn format(&self, text: &str) -> String;
}

/// Prose formatter that escapes text and wraps blank-line separated
/// paragraphs in `<p>` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainProse;

impl ProseFormatter for PlainProse {
    fn format(&self, text: &str) -> String {
        let mut output = String::new();
        let mut paragraph: Vec<&str> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                flush_paragraph(&mut paragraph, &mut output);
            } else {
                paragraph.push(line.trim_end());
            }
        }
        flush_paragraph(&mut paragraph, &mut output);

        output
    }
}

fn flush_paragraph(paragraph: &mut Vec<&str>, output: &mut String) {
    if !paragraph.is_empty() {
        output.push_str("<p>");
        output.push_str(&encode_text(&paragraph.join("\n")));
        output.push_str("</p>");
        paragraph.clear();
    }
}

const COLOPHON: &str = "<div class=\"colophon\"><p>Generated with \
    <a href=\"http://github.com/npryce/code-guide\">Code Guide</a>.</p></div>";

/// Title of the page: the document title, or else a heading opening the
/// intro.
fn page_title(doc: &Document) -> Option<&str> {
    doc.title
        .as_deref()
        .or_else(|| doc.intro.as_deref().and_then(intro_heading))
}

/// A level-one heading on the first non-blank line of the intro, written
/// either as `# Heading` or underlined with `=`.
fn intro_heading(intro: &str) -> Option<&str> {
    let mut lines = intro.lines().skip_while(|line| line.trim().is_empty());
    let first = lines.next()?.trim();

    if let Some(rest) = first.strip_prefix("# ") {
        let heading = rest.trim_end_matches('#').trim();
        return (!heading.is_empty()).then_some(heading);
    }

    let underline = lines.next()?.trim();
    if !first.is_empty() && !underline.is_empty() && underline.chars().all(|c| c == '=') {
        Some(first)
    } else {
        None
    }
}

/// Convert a document to an HTML page.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    HtmlRenderer::new(options.clone()).render(doc)
}

/// Convert a document to an HTML page with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    HtmlRenderer::new(options.clone()).render_with_stats(doc)
}

/// Write a document as an HTML page to a sink.
pub fn write_html<W: Write>(doc: &Document, options: &RenderOptions, out: &mut W) -> Result<()> {
    HtmlRenderer::new(options.clone()).render_to(doc, out)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    code_formatter: Box<dyn CodeFormatter>,
    prose_formatter: Box<dyn ProseFormatter>,
    visitor: Option<Box<dyn DocumentVisitor>>,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            code_formatter: Box::new(EscapedCode),
            prose_formatter: Box::new(PlainProse),
            visitor: None,
        }
    }

    /// Use a custom code formatter.
    pub fn with_code_formatter<F: CodeFormatter + 'static>(mut self, formatter: F) -> Self {
        self.code_formatter = Box::new(formatter);
        self
    }

    /// Use a custom prose formatter.
    pub fn with_prose_formatter<F: ProseFormatter + 'static>(mut self, formatter: F) -> Self {
        self.prose_formatter = Box::new(formatter);
        self
    }

    /// Customize rendering with a visitor.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Render a document to a string.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        let mut buffer = Vec::new();
        self.render_to(doc, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Render(e.to_string()))
    }

    /// Render a document to a string with statistics.
    pub fn render_with_stats(self, doc: &Document) -> Result<RenderResult> {
        let stats = DocumentStats::collect(doc);
        let content = self.render(doc)?;
        Ok(RenderResult::new(content, stats))
    }

    /// Render a document to a sink.
    pub fn render_to<W: Write>(&mut self, doc: &Document, out: &mut W) -> Result<()> {
        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_document_start(doc);
        }

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        self.write_head(doc, out)?;
        writeln!(out, "<body>")?;

        if let Some(title) = &doc.title {
            writeln!(out, "<h1 class=\"code-guide-title\">{}</h1>", encode_text(title))?;
        }
        if let Some(intro) = &doc.intro {
            writeln!(
                out,
                "<div class=\"code-guide-intro\">{}</div>",
                self.prose_formatter.format(intro)
            )?;
        }
        if self.options.explain_button {
            writeln!(
                out,
                "<p><button class=\"btn btn-primary\" type=\"button\" \
                 onclick=\"code_guide.start()\">Explain!</button></p>"
            )?;
        }

        match &self.options.language {
            Some(language) => writeln!(
                out,
                "<div class=\"code-guide-code language-{}\">",
                encode_double_quoted_attribute(language)
            )?,
            None => writeln!(out, "<div class=\"code-guide-code\">")?,
        }
        self.write_nodes(doc, out)?;
        writeln!(out, "</div>")?;

        if let Some(outro) = &doc.outro {
            writeln!(
                out,
                "<div class=\"code-guide-outro\">{}</div>",
                self.prose_formatter.format(outro)
            )?;
        }
        if self.options.colophon {
            writeln!(out, "{}", COLOPHON)?;
        }

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;

        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_document_end(doc);
        }
        Ok(())
    }

    fn write_head<W: Write>(&self, doc: &Document, out: &mut W) -> Result<()> {
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        if let Some(title) = page_title(doc) {
            writeln!(out, "<title>{}</title>", encode_text(title))?;
        }
        for stylesheet in STYLESHEETS {
            writeln!(
                out,
                "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">",
                encode_double_quoted_attribute(&self.options.resource(stylesheet))
            )?;
        }
        for script in SCRIPTS {
            writeln!(
                out,
                "<script type=\"text/javascript\" src=\"{}\"></script>",
                encode_double_quoted_attribute(&self.options.resource(script))
            )?;
        }
        writeln!(out, "</head>")?;
        Ok(())
    }

    fn write_nodes<W: Write>(&mut self, doc: &Document, out: &mut W) -> Result<()> {
        let mut events = TreeEvents::new(&doc.children);
        while let Some(event) = events.next() {
            match event {
                Event::Code(line, depth) => match self.visit_code_line(line, depth) {
                    VisitorAction::Continue => self.write_code_line(line, out)?,
                    VisitorAction::Replace(content) => writeln!(out, "{}", content)?,
                    VisitorAction::Skip => {}
                },
                Event::Enter(explanation, depth) => {
                    match self.enter_explanation(explanation, depth) {
                        VisitorAction::Continue => self.open_explanation(explanation, out)?,
                        VisitorAction::Replace(content) => {
                            writeln!(out, "{}", content)?;
                            events.skip_current();
                        }
                        VisitorAction::Skip => {
                            events.skip_current();
                        }
                    }
                }
                Event::Leave(explanation, depth) => {
                    if let Some(visitor) = self.visitor.as_mut() {
                        visitor.leave_explanation(explanation, depth);
                    }
                    writeln!(out, "</div>")?;
                }
            }
        }
        Ok(())
    }

    fn visit_code_line(&mut self, line: &CodeLine, depth: usize) -> VisitorAction {
        match self.visitor.as_mut() {
            Some(visitor) => visitor.visit_code_line(line, depth),
            None => VisitorAction::Continue,
        }
    }

    fn enter_explanation(&mut self, explanation: &Explanation, depth: usize) -> VisitorAction {
        match self.visitor.as_mut() {
            Some(visitor) => visitor.enter_explanation(explanation, depth),
            None => VisitorAction::Continue,
        }
    }

    fn write_code_line<W: Write>(&self, line: &CodeLine, out: &mut W) -> Result<()> {
        let content = self
            .code_formatter
            .format_line(&line.text, self.options.language.as_deref());
        writeln!(out, "<pre class=\"code-guide-line\">{}</pre>", content)?;
        Ok(())
    }

    fn open_explanation<W: Write>(&self, explanation: &Explanation, out: &mut W) -> Result<()> {
        let content = self.prose_formatter.format(&explanation.label);
        write!(
            out,
            "<div class=\"bootstro\" data-bootstro-content=\"{}\" data-bootstro-html=\"true\" \
             data-bootstro-placement=\"right\" data-bootstro-width=\"25%\"",
            encode_double_quoted_attribute(&content)
        )?;
        if let Some(step) = explanation.step() {
            write!(out, " data-bootstro-step=\"{}\"", step)?;
        }
        writeln!(out, ">")?;
        Ok(())
    }
}
