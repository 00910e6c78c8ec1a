//! Annotated source parser.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::model::Document;

use super::assemble::assemble;
use super::builder::TreeBuilder;
use super::classify::Classifier;
use super::options::ParseOptions;
use super::runs::group_runs;

/// Parser for comment-annotated source code.
///
/// Holds the compiled markup patterns, so one parser can be reused for
/// any number of inputs.
#[derive(Debug, Clone)]
pub struct GuideParser {
    classifier: Classifier,
    options: ParseOptions,
}

impl GuideParser {
    /// Create a parser with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Result<Self> {
        let classifier = Classifier::new(&options.syntax)?;
        Ok(Self {
            classifier,
            options,
        })
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Get the line classifier.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Parse a sequence of lines (newlines already stripped).
    pub fn parse_lines<I>(&self, lines: I) -> Result<Document>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let classified = lines
            .into_iter()
            .enumerate()
            .map(|(position, line)| self.classifier.classify(position, line));

        let mut builder =
            TreeBuilder::new(self.options.error_mode).with_max_depth(self.options.max_depth);
        let mut run_count = 0usize;
        for run in group_runs(classified) {
            run_count += 1;
            builder.push_run(run)?;
        }
        log::debug!("Parsed {} runs", run_count);

        let tree = builder.finish()?;
        assemble(tree, self.options.error_mode)
    }

    /// Parse source text.
    pub fn parse_str(&self, source: &str) -> Result<Document> {
        self.parse_lines(source.lines())
    }

    /// Parse from a reader.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Document> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        self.parse_lines(lines)
    }

    /// Parse a file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        log::debug!("Parsing {}", path.display());
        let file = File::open(path)?;
        self.parse_reader(file)
    }
}
