// src/infrastructure/html.rs
//
// HTML helpers for header values
//
// - escape_html: attribute-safe escaping of & < > " '
// - html_to_text: rich-text abstract → single plain-text string

use regex::Regex;
use scraper::{ElementRef, Html, Node};
use std::sync::OnceLock;

/// Escapes the five HTML special characters, quotes included
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Elements whose end implies a line break in plain text
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre", "tr",
    "table",
];

/// Converts an HTML fragment to plain text
///
/// Tags are dropped, entities decoded, <br> and block ends become line
/// breaks, runs of blanks collapse to one space. Result is trimmed.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut raw = String::new();
    collect_text(fragment.root_element(), &mut raw);
    normalize_whitespace(&raw)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if name == "br" {
                out.push('\n');
                continue;
            }
            collect_text(child_el, out);
            if BLOCK_ELEMENTS.contains(&name) {
                out.push('\n');
            }
        } else if let Node::Text(text) = child.value() {
            out.push_str(text);
        }
    }
}

fn normalize_whitespace(raw: &str) -> String {
    static BLANKS: OnceLock<Regex> = OnceLock::new();
    static BREAKS: OnceLock<Regex> = OnceLock::new();

    let blanks = BLANKS.get_or_init(|| Regex::new(r"[ \t\r\x{a0}]+").expect("valid regex"));
    let breaks = BREAKS.get_or_init(|| Regex::new(r" *\n[ \n]*").expect("valid regex"));

    let collapsed = blanks.replace_all(raw, " ");
    let collapsed = breaks.replace_all(&collapsed, "\n");
    collapsed.trim().to_string()
}
