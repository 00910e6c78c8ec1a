//! JSON rendering for parsed guides.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Deepest region nesting written as JSON.
///
/// serde_json reads at most 127 nested containers and every region level
/// takes two (its object and its `children` array).
pub const MAX_JSON_DEPTH: usize = 62;

/// Convert a document to JSON.
///
/// Documents nested deeper than [`MAX_JSON_DEPTH`] are rejected, since
/// [`from_json`] could not read them back.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let depth = doc.depth();
    if depth > MAX_JSON_DEPTH {
        return Err(Error::Render(format!(
            "regions nest {} deep, JSON output allows {}",
            depth, MAX_JSON_DEPTH
        )));
    }

    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Read a document back from JSON produced by [`to_json`].
pub fn from_json(json: &str) -> Result<Document> {
    serde_json::from_str(json).map_err(|e| Error::Render(format!("JSON parse error: {}", e)))
}
