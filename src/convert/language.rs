//! Language profiles: how a source language spells its comments.

use crate::error::Result;
use crate::parser::{Dialect, ErrorMode, GuideParser, MarkupSyntax, ParseOptions};

/// Markup conventions for one source language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Lowercase language name, also used as the rendered `language-*` class
    pub name: String,

    /// File extensions, lowercase without the leading dot
    pub extensions: Vec<String>,

    /// Single-line comment token
    pub comment_start: String,

    /// Marker dialect
    pub dialect: Dialect,
}

impl LanguageProfile {
    /// Create a profile using the default dialect.
    pub fn new(name: impl Into<String>, comment_start: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            extensions: Vec::new(),
            comment_start: comment_start.into(),
            dialect: Dialect::default(),
        }
    }

    /// Add file extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions.extend(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase()),
        );
        self
    }

    /// Set the dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Markup syntax for this language.
    pub fn syntax(&self) -> MarkupSyntax {
        MarkupSyntax::new(self.comment_start.clone()).with_dialect(self.dialect)
    }

    /// Parse options for this language.
    pub fn parse_options(&self, error_mode: ErrorMode) -> ParseOptions {
        ParseOptions::new()
            .with_syntax(self.syntax())
            .with_error_mode(error_mode)
    }

    /// Build a parser for this language.
    pub fn parser(&self, error_mode: ErrorMode) -> Result<GuideParser> {
        GuideParser::with_options(self.parse_options(error_mode))
    }
}

/// Built-in profiles.
///
/// Single-character comment tokens use the doubled dialect (`##`, `;;`);
/// two-character tokens use the pipe dialect (`//|`, `--|`).
pub fn default_profiles() -> Vec<LanguageProfile> {
    let hash = |name: &str, exts: &[&str]| LanguageProfile::new(name, "#").with_extensions(exts);
    let slash = |name: &str, exts: &[&str]| {
        LanguageProfile::new(name, "//")
            .with_extensions(exts)
            .with_dialect(Dialect::Pipe)
    };
    let dash = |name: &str, exts: &[&str]| {
        LanguageProfile::new(name, "--")
            .with_extensions(exts)
            .with_dialect(Dialect::Pipe)
    };

    vec![
        hash("python", &["py", "pyw"]),
        hash("ruby", &["rb"]),
        hash("shell", &["sh", "bash"]),
        hash("perl", &["pl", "pm"]),
        hash("r", &["r"]),
        hash("toml", &["toml"]),
        hash("yaml", &["yaml", "yml"]),
        slash("rust", &["rs"]),
        slash("c", &["c", "h"]),
        slash("cpp", &["cpp", "cc", "cxx", "hpp"]),
        slash("javascript", &["js", "mjs"]),
        slash("typescript", &["ts"]),
        slash("java", &["java"]),
        slash("go", &["go"]),
        slash("scala", &["scala"]),
        dash("haskell", &["hs"]),
        dash("sql", &["sql"]),
        dash("lua", &["lua"]),
        LanguageProfile::new("lisp", ";").with_extensions(["lisp", "el", "scm", "clj"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let profile = LanguageProfile::new("Python", "#").with_extensions([".PY", "pyw"]);
        assert_eq!(profile.name, "python");
        assert_eq!(profile.extensions, vec!["py", "pyw"]);
        assert_eq!(profile.syntax().region_marker(), "##");
    }

    #[test]
    fn test_profile_parser() {
        let profile = LanguageProfile::new("rust", "//").with_dialect(Dialect::Pipe);
        let parser = profile.parser(ErrorMode::Strict).unwrap();
        let doc = parser.parse_str("//| main\nfn main() {}\n//|.").unwrap();
        assert_eq!(doc.explanations().len(), 1);
        assert_eq!(doc.explanations()[0].label, "main");
    }

    #[test]
    fn test_default_profiles_are_valid() {
        for profile in default_profiles() {
            assert!(profile.syntax().validate().is_ok(), "{}", profile.name);
            assert!(!profile.extensions.is_empty());
        }
    }
}
