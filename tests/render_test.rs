//! Integration tests for HTML rendering.

use codeguide::model::{Document, Explanation, Node};
use codeguide::render::{
    to_html, CodeFormatter, HtmlRenderer, ProseFormatter, RenderOptions, SCRIPTS, STYLESHEETS,
};

fn example() -> Document {
    let mut doc = Document::with_children(vec![
        Node::code("l1"),
        Explanation::new(
            "A",
            vec![
                Node::code("l2"),
                Node::code(""),
                Node::code("l3"),
                Explanation::new("B", vec![Node::code("l4"), Node::code("l5")]).into(),
                Node::code("l6"),
            ],
        )
        .into(),
        Explanation::new("C", vec![Node::code("l7")]).into(),
        Node::code("l8"),
    ]);
    doc.title = Some("Example Code".to_string());
    doc.intro = Some("Intro Text".to_string());
    doc.outro = Some("That's all, folks!".to_string());
    doc
}

fn resources(options: &RenderOptions) -> Vec<String> {
    SCRIPTS
        .iter()
        .chain(STYLESHEETS.iter())
        .map(|r| options.resource(r))
        .collect()
}

#[test]
fn test_code_lines_in_order() {
    let html = to_html(&example(), &RenderOptions::default()).unwrap();
    let lines: Vec<&str> = html
        .lines()
        .filter_map(|l| l.strip_prefix("<pre class=\"code-guide-line\">"))
        .filter_map(|l| l.strip_suffix("</pre>"))
        .collect();
    assert_eq!(lines, vec!["l1", "l2", " ", "l3", "l4", "l5", "l6", "l7", "l8"]);
}

#[test]
fn test_explanations_wrap_their_code() {
    let html = to_html(&example(), &RenderOptions::default()).unwrap();

    let a = html.find("data-bootstro-content=\"&lt;p&gt;A&lt;/p&gt;\"").unwrap();
    let b = html.find("data-bootstro-content=\"&lt;p&gt;B&lt;/p&gt;\"").unwrap();
    let c = html.find("data-bootstro-content=\"&lt;p&gt;C&lt;/p&gt;\"").unwrap();
    let l2 = html.find(">l2<").unwrap();
    let l4 = html.find(">l4<").unwrap();
    let l7 = html.find(">l7<").unwrap();

    assert!(a < l2 && l2 < b && b < l4 && l4 < c && c < l7);
    assert_eq!(html.matches("<div class=\"bootstro\"").count(), 3);
}

#[test]
fn test_script_and_stylesheet_links_in_head() {
    let options = RenderOptions::default();
    let html = to_html(&example(), &options).unwrap();
    let head_end = html.find("</head>").unwrap();

    for resource in resources(&options) {
        let at = html.find(&format!("\"{}\"", resource)).unwrap();
        assert!(at < head_end, "{} outside head", resource);
    }
    assert!(html.contains("src=\"bootstro.min.js\""));
    assert!(html.contains("href=\"bootstrap/css/bootstrap.min.css\""));
}

#[test]
fn test_resources_prefixed_with_resource_directory() {
    let options = RenderOptions::new().with_resource_dir("over/here");
    let html = to_html(&example(), &options).unwrap();

    for resource in resources(&options) {
        assert!(resource.starts_with("over/here/"));
        assert!(html.contains(&resource));
    }
}

#[test]
fn test_explain_button() {
    let html = to_html(&example(), &RenderOptions::default()).unwrap();
    assert!(html.contains(
        "<button class=\"btn btn-primary\" type=\"button\" onclick=\"code_guide.start()\">Explain!</button>"
    ));
}

#[test]
fn test_title_intro_outro() {
    let html = to_html(&example(), &RenderOptions::default()).unwrap();

    assert!(html.contains("<title>Example Code</title>"));
    assert!(html.contains("<h1 class=\"code-guide-title\">Example Code</h1>"));
    assert!(html.contains("<div class=\"code-guide-intro\"><p>Intro Text</p></div>"));
    assert!(html.contains("<div class=\"code-guide-outro\"><p>That's all, folks!</p></div>"));

    let intro = html.find("code-guide-intro").unwrap();
    let code = html.find("code-guide-code").unwrap();
    let outro = html.find("code-guide-outro").unwrap();
    assert!(intro < code && code < outro);
}

#[test]
fn test_explicit_ordering_as_html() {
    let doc = Document::with_children(vec![
        Explanation::new("e2", vec![Node::code("l1")])
            .with_index(2)
            .into(),
        Explanation::new("e1", vec![Node::code("l2")])
            .with_index(1)
            .into(),
    ]);
    let html = to_html(&doc, &RenderOptions::default()).unwrap();

    let step1 = html.find("data-bootstro-step=\"1\"").unwrap();
    let step0 = html.find("data-bootstro-step=\"0\"").unwrap();
    let l1 = html.find(">l1<").unwrap();
    let l2 = html.find(">l2<").unwrap();
    assert!(step1 < l1 && l1 < step0 && step0 < l2);
}

struct UpperCode;

impl CodeFormatter for UpperCode {
    fn format_line(&self, text: &str, language: Option<&str>) -> String {
        format!("{}:{}", language.unwrap_or("none"), text.to_uppercase())
    }
}

struct RawProse;

impl ProseFormatter for RawProse {
    fn format(&self, text: &str) -> String {
        format!("<em>{}</em>", text)
    }
}

#[test]
fn test_custom_formatters() {
    let html = HtmlRenderer::new(RenderOptions::new().with_language("python"))
        .with_code_formatter(UpperCode)
        .with_prose_formatter(RawProse)
        .render(&example())
        .unwrap();

    assert!(html.contains("<pre class=\"code-guide-line\">python:L1</pre>"));
    assert!(html.contains("<div class=\"code-guide-intro\"><em>Intro Text</em></div>"));
    assert!(html.contains("data-bootstro-content=\"&lt;em&gt;A&lt;/em&gt;\""));
}

#[test]
fn test_deeply_nested_render() {
    let mut node: Node = Node::code("deep");
    for i in 0..2_000 {
        node = Explanation::new(format!("level {}", i), vec![node]).into();
    }
    let doc = Document::with_children(vec![node]);
    let html = to_html(&doc, &RenderOptions::default()).unwrap();

    assert_eq!(html.matches("<div class=\"bootstro\"").count(), 2_000);
    assert!(html.contains(">deep<"));
}
