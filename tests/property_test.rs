//! Property-based tests for the parser.
//!
//! Generated inputs stay inside the markup grammar: code lines never
//! contain the comment token, and every region's first child is a code
//! line so that adjacent region starts are not merged into one label.

use codeguide::model::{Explanation, Node};
use codeguide::parser::{Classifier, GuideParser};
use codeguide::{parse_lines, parse_lines_with_options, MarkupSyntax, ParseOptions};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Sample {
    Code(String),
    Region(String, Vec<Sample>),
}

/// Code lines without markup, blank ones included
fn code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z =();]{0,16}",
        "    [a-z]{1,8}\\(\\)",
        Just(String::new()),
    ]
}

fn label_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z ,]{0,12}"
}

fn tree_strategy() -> impl Strategy<Value = Vec<Sample>> {
    let leaf = code_strategy().prop_map(Sample::Code);
    let node = leaf.prop_recursive(5, 64, 6, |inner| {
        (
            label_strategy(),
            code_strategy(),
            prop::collection::vec(inner, 0..6),
        )
            .prop_map(|(label, first, mut rest)| {
                rest.insert(0, Sample::Code(first));
                Sample::Region(label, rest)
            })
    });
    prop::collection::vec(node, 0..12)
}

/// Arbitrary mixes of markup lines, with no title lines
fn markup_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("##.".to_string()),
        Just("  ##.".to_string()),
        "## [0-9a-z ]{0,8}",
        "## \\[[0-9]{1,3}\\] [a-z]{0,6}",
        "### [a-z ]{0,8}",
        code_strategy(),
    ]
}

fn write_lines(nodes: &[Sample], out: &mut Vec<String>) {
    for node in nodes {
        match node {
            Sample::Code(text) => out.push(text.clone()),
            Sample::Region(label, children) => {
                out.push(format!("## {}", label));
                write_lines(children, out);
                out.push("##.".to_string());
            }
        }
    }
}

fn expected_nodes(nodes: &[Sample]) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| match node {
            Sample::Code(text) => Node::code(text.clone()),
            Sample::Region(label, children) => {
                Explanation::new(label.clone(), expected_nodes(children)).into()
            }
        })
        .collect()
}

fn sample_depth(nodes: &[Sample]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Sample::Code(_) => 0,
            Sample::Region(_, children) => 1 + sample_depth(children),
        })
        .max()
        .unwrap_or(0)
}

fn code_texts(nodes: &[Sample], out: &mut Vec<String>) {
    for node in nodes {
        match node {
            Sample::Code(text) => out.push(text.clone()),
            Sample::Region(_, children) => code_texts(children, out),
        }
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_balanced_nesting(tree in tree_strategy()) {
            let mut lines = Vec::new();
            write_lines(&tree, &mut lines);

            let doc = parse_lines_with_options(lines, ParseOptions::new().strict()).unwrap();

            prop_assert_eq!(doc.depth(), sample_depth(&tree));
            prop_assert_eq!(&doc.children, &expected_nodes(&tree));

            let mut code = Vec::new();
            code_texts(&tree, &mut code);
            let parsed: Vec<String> = doc.code_lines().iter().map(|l| l.text.clone()).collect();
            prop_assert_eq!(parsed, code);
        }

        #[test]
        fn test_plain_text_round_trip(lines in prop::collection::vec(code_strategy(), 0..40)) {
            let doc = parse_lines(lines.clone()).unwrap();

            prop_assert!(!doc.has_metadata());
            let expected: Vec<Node> = lines.iter().map(|l| Node::code(l.clone())).collect();
            prop_assert_eq!(doc.children, expected);
        }

        #[test]
        fn test_lenient_parse_is_total(lines in prop::collection::vec(markup_line_strategy(), 0..40)) {
            let parser = GuideParser::new().unwrap();
            let first = parser.parse_lines(lines.clone());
            prop_assert!(first.is_ok(), "lenient parse failed for {:?}", lines);

            let second = parser.parse_lines(lines).unwrap();
            prop_assert_eq!(first.unwrap(), second);
        }

        #[test]
        fn test_classification_is_pure(line in "\\PC{0,24}") {
            let classifier = Classifier::new(&MarkupSyntax::default()).unwrap();
            let a = classifier.classify(0, line.clone());
            let b = classifier.classify(0, line);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn test_markup_is_never_code(lines in prop::collection::vec(markup_line_strategy(), 0..40)) {
            let classifier = Classifier::new(&MarkupSyntax::default()).unwrap();
            let doc = parse_lines(lines.clone()).unwrap();

            let plain: Vec<String> = lines
                .into_iter()
                .filter(|l| !classifier.kind_of(l).is_markup())
                .collect();
            let parsed: Vec<String> = doc.code_lines().iter().map(|l| l.text.clone()).collect();
            prop_assert_eq!(parsed, plain);
        }
    }
}
