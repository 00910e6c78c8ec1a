//! Language registry dispatching annotated source files by extension.
//!
//! Each source language marks up its guide with its own comment token.
//! The registry maps file extensions and language names to
//! [`LanguageProfile`]s, so a file can be parsed and rendered without
//! spelling out its syntax.
//!
//! # Example
//!
//! ```no_run
//! use codeguide::convert::{ConvertOptions, LanguageRegistry};
//! use std::path::Path;
//!
//! fn main() -> codeguide::Result<()> {
//!     let registry = LanguageRegistry::with_defaults();
//!     let result = registry.convert(Path::new("example.py"), &ConvertOptions::default())?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

mod language;

pub use language::{default_profiles, LanguageProfile};

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::ErrorMode;
use crate::render::{to_html, to_json, to_text, DocumentStats, JsonFormat, RenderOptions};

/// Options for converting an annotated source file.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// How malformed markup is handled
    pub error_mode: ErrorMode,

    /// Output format
    pub output_format: OutputFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Guided-tour HTML page
    #[default]
    Html,

    /// Plain source code with markup removed
    Text,

    /// JSON document tree
    Json,
}

impl OutputFormat {
    /// MIME type of this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Html => "text/html",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }
}

/// Result of converting an annotated source file.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: String,

    /// Statistics of the parsed guide
    pub stats: DocumentStats,

    /// MIME type of the output
    pub mime_type: &'static str,

    /// Name of the language profile used
    pub language: String,
}

impl ConvertResult {
    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Registry of language profiles.
pub struct LanguageRegistry {
    by_extension: HashMap<String, Arc<LanguageProfile>>,
    by_name: HashMap<String, Arc<LanguageProfile>>,
}

impl LanguageRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_extension: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in profiles.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for profile in default_profiles() {
            registry.register(profile);
        }
        registry
    }

    /// Register a profile.
    ///
    /// The profile is registered for all its extensions, replacing any
    /// earlier profile claiming the same extension or name.
    pub fn register(&mut self, profile: LanguageProfile) {
        let profile = Arc::new(profile);
        for ext in &profile.extensions {
            if let Some(previous) = self.by_extension.insert(ext.to_lowercase(), profile.clone()) {
                if previous.name != profile.name {
                    log::debug!(
                        "Extension {:?} moved from {} to {}",
                        ext,
                        previous.name,
                        profile.name
                    );
                }
            }
        }
        self.by_name.insert(profile.name.to_lowercase(), profile);
    }

    /// Get a profile by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<LanguageProfile>> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        self.by_extension.get(&ext).cloned()
    }

    /// Get a profile by language name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<LanguageProfile>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.get_by_extension(ext).is_some()
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.by_extension.keys().map(|s| s.as_str()).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Find the profile for a file path by its extension.
    pub fn profile_for_path(&self, path: &Path) -> Result<Arc<LanguageProfile>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnknownLanguage(format!("{} has no extension", path.display())))?;

        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnknownLanguage(format!("no profile for extension {:?}", ext)))
    }

    /// Parse and render a file using the profile matching its extension.
    pub fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let profile = self.profile_for_path(path)?;
        let doc = profile.parser(options.error_mode)?.parse_file(path)?;
        render(&doc, &profile, options)
    }

    /// Convert several files in parallel.
    ///
    /// Results keep the order of `paths`; one failing file does not stop
    /// the others.
    pub fn convert_all<P>(&self, paths: &[P], options: &ConvertOptions) -> Vec<Result<ConvertResult>>
    where
        P: AsRef<Path> + Sync,
    {
        paths
            .par_iter()
            .map(|path| self.convert(path.as_ref(), options))
            .collect()
    }

    /// Parse and render source text as the named language.
    pub fn convert_str(
        &self,
        source: &str,
        language: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let profile = self
            .get_by_name(language)
            .ok_or_else(|| Error::UnknownLanguage(language.to_string()))?;
        let doc = profile.parser(options.error_mode)?.parse_str(source)?;
        render(&doc, &profile, options)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn render(doc: &Document, profile: &LanguageProfile, options: &ConvertOptions) -> Result<ConvertResult> {
    let content = match options.output_format {
        OutputFormat::Html => {
            let mut render_options = options.render.clone();
            if render_options.language.is_none() {
                render_options.language = Some(profile.name.clone());
            }
            to_html(doc, &render_options)?
        }
        OutputFormat::Text => to_text(doc),
        OutputFormat::Json => to_json(doc, JsonFormat::Pretty)?,
    };

    Ok(ConvertResult {
        content,
        stats: DocumentStats::collect(doc),
        mime_type: options.output_format.mime_type(),
        language: profile.name.clone(),
    })
}
