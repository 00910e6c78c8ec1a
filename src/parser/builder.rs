//! Tree building from runs.
//!
//! Regions nest through an explicit stack of open regions rather than
//! recursion, so arbitrarily deep markup cannot exhaust the call stack.
//! Each region-start run pushes one frame; each region-end line pops one
//! and attaches the finished [`Explanation`] to the level below it.

use crate::error::{Error, MetadataKind, Result};
use crate::model::{CodeLine, Explanation, Node};

use super::classify::{LineClass, LineKind};
use super::options::ErrorMode;
use super::runs::Run;

/// A title or intro block collected during the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataNode {
    /// Which metadata the block provides
    pub kind: MetadataKind,

    /// Joined text of the run
    pub text: String,

    /// 1-indexed line where the run starts
    pub line: usize,
}

/// Output of the tree builder: content tree plus metadata in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTree {
    /// Top-level content nodes
    pub children: Vec<Node>,

    /// Metadata blocks found at any depth
    pub metadata: Vec<MetadataNode>,
}

impl ParsedTree {
    /// Metadata blocks of one kind, in source order.
    pub fn metadata_of(&self, kind: MetadataKind) -> impl Iterator<Item = &MetadataNode> {
        self.metadata.iter().filter(move |m| m.kind == kind)
    }
}

#[derive(Debug)]
struct OpenRegion {
    label: String,
    index: Option<u32>,
    line: usize,
    children: Vec<Node>,
}

impl OpenRegion {
    fn into_explanation(self) -> Explanation {
        Explanation {
            label: self.label,
            index: self.index,
            children: self.children,
        }
    }
}

/// Incremental tree builder fed one run at a time.
pub struct TreeBuilder {
    error_mode: ErrorMode,
    max_depth: Option<usize>,
    root: Vec<Node>,
    open: Vec<OpenRegion>,
    metadata: Vec<MetadataNode>,
}

impl TreeBuilder {
    /// Create a builder with the given error mode and no nesting limit.
    pub fn new(error_mode: ErrorMode) -> Self {
        Self {
            error_mode,
            max_depth: None,
            root: Vec::new(),
            open: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Limit region nesting; opening a region past it fails.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Number of regions currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Consume the next run.
    pub fn push_run(&mut self, run: Run) -> Result<()> {
        match run.kind {
            LineKind::Title => self.push_metadata(MetadataKind::Title, &run),
            LineKind::Intro => self.push_metadata(MetadataKind::Intro, &run),
            LineKind::RegionStart => self.open_region(&run)?,
            LineKind::RegionEnd => {
                for line in &run.lines {
                    self.close_region(line.line_number())?;
                }
            }
            LineKind::Plain => {
                let children = self.current_children();
                children.extend(
                    run.lines
                        .into_iter()
                        .map(|line| Node::Code(CodeLine::new(line.source))),
                );
            }
        }
        Ok(())
    }

    /// Close any regions still open and return the tree.
    pub fn finish(mut self) -> Result<ParsedTree> {
        if let Some(region) = self.open.last() {
            if self.error_mode == ErrorMode::Strict {
                return Err(Error::UnterminatedRegion {
                    line: region.line,
                    label: region.label.clone(),
                });
            }
        }

        while let Some(region) = self.open.pop() {
            log::warn!(
                "Region opened at line {} is not terminated; closing it at end of input",
                region.line
            );
            let explanation = region.into_explanation();
            self.current_children().push(explanation.into());
        }

        Ok(ParsedTree {
            children: self.root,
            metadata: self.metadata,
        })
    }

    fn current_children(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(region) => &mut region.children,
            None => &mut self.root,
        }
    }

    fn push_metadata(&mut self, kind: MetadataKind, run: &Run) {
        log::debug!("Collected {} block at line {}", kind, run.line_number());
        self.metadata.push(MetadataNode {
            kind,
            text: run.joined_text(),
            line: run.line_number(),
        });
    }

    fn open_region(&mut self, run: &Run) -> Result<()> {
        if let Some(limit) = self.max_depth {
            if self.open.len() >= limit {
                return Err(Error::NestingTooDeep {
                    line: run.line_number(),
                    limit,
                });
            }
        }

        // The first line's index names the region; later ones are ignored.
        let index = run.lines.first().and_then(|line| match line.class {
            LineClass::RegionStart { index, .. } => index,
            _ => None,
        });
        log::debug!(
            "Opening region at line {} (depth {})",
            run.line_number(),
            self.open.len() + 1
        );
        self.open.push(OpenRegion {
            label: run.joined_text(),
            index,
            line: run.line_number(),
            children: Vec::new(),
        });
        Ok(())
    }

    fn close_region(&mut self, line: usize) -> Result<()> {
        match self.open.pop() {
            Some(region) => {
                let explanation = region.into_explanation();
                self.current_children().push(explanation.into());
                Ok(())
            }
            None => match self.error_mode {
                ErrorMode::Strict => Err(Error::UnmatchedRegionEnd { line }),
                ErrorMode::Lenient => {
                    log::warn!("Dropping region end at line {} with no open region", line);
                    Ok(())
                }
            },
        }
    }
}

/// Build a tree from a sequence of runs.
pub fn build_tree<I>(runs: I, error_mode: ErrorMode) -> Result<ParsedTree>
where
    I: IntoIterator<Item = Run>,
{
    let mut builder = TreeBuilder::new(error_mode);
    for run in runs {
        builder.push_run(run)?;
    }
    builder.finish()
}
