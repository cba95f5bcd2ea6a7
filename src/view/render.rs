//! Renderers that turn a view tree into HTML or terminal text.

use askama::Template;

use super::{Element, Intent, Node};
use crate::Result;

const VOID_TAGS: &[&str] = &["img", "input", "br"];
const INLINE_TAGS: &[&str] = &["strong", "option"];

/// One element; `children` is already-rendered markup.
#[derive(Template)]
#[template(
    source = "<{{ tag }}{% for (name, value) in attrs %} {{ name }}=\"{{ value }}\"{% endfor %}{% if let Some(code) = intent %} data-intent=\"{{ code }}\"{% endif %}>{% if !void %}{{ children|safe }}</{{ tag }}>{% endif %}",
    ext = "html"
)]
struct ElementHtml<'a> {
    tag: &'a str,
    attrs: &'a [(&'static str, String)],
    intent: Option<String>,
    void: bool,
    children: String,
}

#[derive(Template)]
#[template(source = "{{ text }}", ext = "html")]
struct TextHtml<'a> {
    text: &'a str,
}

/// Serialize a view tree to HTML.
///
/// Intents are exposed as `data-intent` attributes so a page script (or a
/// test) can see which node triggers what.
pub fn to_html(node: &Node) -> Result<String> {
    match node {
        Node::Text(text) => Ok(TextHtml { text }.render()?),
        Node::Element(e) => {
            let children = e
                .children
                .iter()
                .map(to_html)
                .collect::<Result<String>>()?;
            let html = ElementHtml {
                tag: e.tag,
                attrs: &e.attrs,
                intent: e.intent.as_ref().map(intent_code),
                void: VOID_TAGS.contains(&e.tag),
                children,
            }
            .render()?;
            Ok(html)
        }
    }
}

fn intent_code(intent: &Intent) -> String {
    match intent {
        Intent::SelectPlayer(id) => format!("select:{id}"),
        Intent::Back => "back".to_string(),
        Intent::RemovePlayer(id) => format!("remove:{id}"),
        Intent::SubmitForm => "submit".to_string(),
    }
}

/// Render a view tree for a terminal.
///
/// Each element that holds only text becomes one indented line; images
/// show their alt text and source; intents appear as bracketed hints.
pub fn to_text(node: &Node) -> String {
    let mut out = String::new();
    write_text(node, 0, &mut out);
    out
}

fn write_text(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Text(t) => {
            let t = t.trim();
            if !t.is_empty() {
                out.push_str(&format!("{indent}{t}\n"));
            }
        }
        Node::Element(e) => {
            if let Some(line) = leaf_line(e) {
                let hint = e.intent.as_ref().map(intent_hint).unwrap_or_default();
                out.push_str(&format!("{indent}{line}{hint}\n"));
                return;
            }
            let next = match e.tag {
                "ul" | "form" | "select" => depth,
                _ => depth + 1,
            };
            if let Some(intent) = &e.intent {
                out.push_str(&format!("{indent}{}\n", intent_hint(intent).trim_start()));
            }
            for c in &e.children {
                write_text(c, next, out);
            }
        }
    }
}

fn leaf_line(e: &Element) -> Option<String> {
    match e.tag {
        "img" => Some(format!(
            "[image: {} <{}>]",
            e.get_attr("alt").unwrap_or_default(),
            e.get_attr("src").unwrap_or_default()
        )),
        "input" => Some(format!(
            "{}: ____",
            e.get_attr("placeholder").or(e.get_attr("id")).unwrap_or_default()
        )),
        "button" => Some(format!("<{}>", Node::Element(e.clone()).text_content().trim())),
        _ if e
            .children
            .iter()
            .all(|c| matches!(c, Node::Text(_)) || is_inline(c)) =>
        {
            let text = Node::Element(e.clone()).text_content();
            let text = text.trim();
            (!text.is_empty()).then(|| match e.tag {
                "option" => format!("- {text}"),
                _ => text.to_string(),
            })
        }
        _ => None,
    }
}

fn is_inline(node: &Node) -> bool {
    matches!(node, Node::Element(e) if INLINE_TAGS.contains(&e.tag))
}

fn intent_hint(intent: &Intent) -> String {
    match intent {
        Intent::SelectPlayer(id) => format!("  [select {id}]"),
        Intent::Back => "  [back]".to_string(),
        Intent::RemovePlayer(id) => format!("  [remove {id}]"),
        Intent::SubmitForm => "  [add]".to_string(),
    }
}
