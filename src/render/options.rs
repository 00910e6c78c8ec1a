//! Rendering options and configuration.

/// Scripts linked from the page head; `{min}` expands to `.min` when minified.
pub const SCRIPTS: [&str; 4] = [
    "jquery-1.9.1{min}.js",
    "bootstrap/js/bootstrap{min}.js",
    "bootstro{min}.js",
    "code-guide.js",
];

/// Stylesheets linked from the page head.
pub const STYLESHEETS: [&str; 4] = [
    "bootstrap/css/bootstrap{min}.css",
    "bootstro{min}.css",
    "pygments.css",
    "code-guide.css",
];

/// Options for rendering a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Language of the annotated code, added as a `language-*` class
    pub language: Option<String>,

    /// Directory prefixed to script and stylesheet URLs
    pub resource_dir: String,

    /// Link the minified variants of scripts and stylesheets
    pub minified: bool,

    /// Emit the button that starts the guided tour
    pub explain_button: bool,

    /// Close the page with the "Generated with" colophon
    pub colophon: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language of the annotated code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the resource directory.
    pub fn with_resource_dir(mut self, dir: impl Into<String>) -> Self {
        self.resource_dir = dir.into();
        self
    }

    /// Enable or disable minified resources.
    pub fn with_minified(mut self, minified: bool) -> Self {
        self.minified = minified;
        self
    }

    /// Enable or disable the explain button.
    pub fn with_explain_button(mut self, enabled: bool) -> Self {
        self.explain_button = enabled;
        self
    }

    /// Enable or disable the colophon.
    pub fn with_colophon(mut self, enabled: bool) -> Self {
        self.colophon = enabled;
        self
    }

    /// Resolve a resource template to the URL used in the page.
    pub fn resource(&self, template: &str) -> String {
        let name = template.replace("{min}", if self.minified { ".min" } else { "" });
        if self.resource_dir.is_empty() {
            name
        } else if self.resource_dir.ends_with('/') {
            format!("{}{}", self.resource_dir, name)
        } else {
            format!("{}/{}", self.resource_dir, name)
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: None,
            resource_dir: String::new(),
            minified: true,
            explain_button: true,
            colophon: true,
        }
    }
}
