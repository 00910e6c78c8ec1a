//! Plain text rendering.

use crate::model::Document;

/// Convert a document to plain source code, annotations removed.
///
/// Every code line, blank ones included, is terminated by `\n`.
pub fn to_text(doc: &Document) -> String {
    let mut output = String::new();
    for line in doc.code_lines() {
        output.push_str(&line.text);
        output.push('\n');
    }
    output
}
