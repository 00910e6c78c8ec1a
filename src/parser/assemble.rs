//! Document assembly: metadata validation and the final [`Document`].

use crate::error::{Error, MetadataKind, Result};
use crate::model::Document;

use super::builder::{MetadataNode, ParsedTree};
use super::options::ErrorMode;

/// Title blocks allowed per document.
pub const MAX_TITLES: usize = 1;

/// Intro blocks a strict parse accepts (intro and outro).
pub const MAX_INTROS: usize = 2;

/// Validate metadata cardinality and build the document.
///
/// The first intro block becomes the intro and, when there is more than
/// one, the last becomes the outro. Blocks in between are ignored in
/// lenient mode.
pub fn assemble(tree: ParsedTree, error_mode: ErrorMode) -> Result<Document> {
    let titles: Vec<&MetadataNode> = tree.metadata_of(MetadataKind::Title).collect();
    check_count(&titles, MetadataKind::Title, MAX_TITLES)?;

    let intros: Vec<&MetadataNode> = tree.metadata_of(MetadataKind::Intro).collect();
    if error_mode == ErrorMode::Strict {
        check_count(&intros, MetadataKind::Intro, MAX_INTROS)?;
    } else if intros.len() > MAX_INTROS {
        log::warn!(
            "Ignoring {} intro blocks between the intro (line {}) and the outro (line {})",
            intros.len() - MAX_INTROS,
            intros[0].line,
            intros[intros.len() - 1].line
        );
    }

    let title = titles.first().map(|m| m.text.clone());
    let intro = intros.first().map(|m| m.text.clone());
    let outro = if intros.len() > 1 {
        intros.last().map(|m| m.text.clone())
    } else {
        None
    };

    Ok(Document {
        title,
        intro,
        outro,
        children: tree.children,
    })
}

fn check_count(found: &[&MetadataNode], kind: MetadataKind, allowed: usize) -> Result<()> {
    match found.get(allowed) {
        Some(surplus) => Err(Error::TooManyMetadataNodes {
            kind,
            found: found.len(),
            allowed,
            line: surplus.line,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    fn meta(kind: MetadataKind, text: &str, line: usize) -> MetadataNode {
        MetadataNode {
            kind,
            text: text.to_string(),
            line,
        }
    }

    fn tree(metadata: Vec<MetadataNode>) -> ParsedTree {
        ParsedTree {
            children: vec![Node::code("x")],
            metadata,
        }
    }

    #[test]
    fn test_no_metadata() {
        let doc = assemble(tree(vec![]), ErrorMode::Strict).unwrap();
        assert_eq!(doc, Document::with_children(vec![Node::code("x")]));
    }

    #[test]
    fn test_single_intro_has_no_outro() {
        let doc = assemble(
            tree(vec![meta(MetadataKind::Intro, "hello", 1)]),
            ErrorMode::Lenient,
        )
        .unwrap();
        assert_eq!(doc.intro.as_deref(), Some("hello"));
        assert_eq!(doc.outro, None);
    }

    #[test]
    fn test_first_and_last_intro() {
        let doc = assemble(
            tree(vec![
                meta(MetadataKind::Intro, "first", 1),
                meta(MetadataKind::Intro, "middle", 5),
                meta(MetadataKind::Intro, "last", 9),
            ]),
            ErrorMode::Lenient,
        )
        .unwrap();
        assert_eq!(doc.intro.as_deref(), Some("first"));
        assert_eq!(doc.outro.as_deref(), Some("last"));
    }

    #[test]
    fn test_strict_rejects_third_intro() {
        let err = assemble(
            tree(vec![
                meta(MetadataKind::Intro, "first", 1),
                meta(MetadataKind::Intro, "middle", 5),
                meta(MetadataKind::Intro, "last", 9),
            ]),
            ErrorMode::Strict,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::TooManyMetadataNodes {
                kind: MetadataKind::Intro,
                found: 3,
                allowed: 2,
                line: 9
            }
        ));
    }

    #[test]
    fn test_two_titles_fail_in_any_mode() {
        for mode in [ErrorMode::Lenient, ErrorMode::Strict] {
            let err = assemble(
                tree(vec![
                    meta(MetadataKind::Title, "One", 1),
                    meta(MetadataKind::Title, "Two", 4),
                ]),
                mode,
            )
            .unwrap_err();
            assert!(matches!(
                err,
                Error::TooManyMetadataNodes {
                    kind: MetadataKind::Title,
                    found: 2,
                    allowed: 1,
                    line: 4
                }
            ));
        }
    }
}
