//! Helpers shared by site sanitizers.

use regex::Regex;
use scraper::{ElementRef, Node, Selector};
use std::sync::LazyLock;

/// Tags dropped together with their content.
pub const BLACKLIST_TAGS: [&str; 4] = ["script", "style", "time", "noscript"];

/// Tags whose boundaries separate words and lines.
const BLOCK_TAGS: [&str; 19] = [
    "div", "p", "address", "article", "header", "footer", "section", "figure", "figcaption",
    "blockquote", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6",
];

static SPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\u{a0}]+").unwrap());

static NEWLINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\n\s*").unwrap());

/// Readable text of `root`, skipping blacklisted tags and anything matching `buzz`.
///
/// Block elements and `<br>` become line breaks on both sides, so words in
/// adjacent blocks never run together.
pub fn extract_text(root: ElementRef<'_>, buzz: &Selector) -> String {
    let mut text = String::new();
    walk_children(root, buzz, &mut text);
    normalize_whitespace(&text)
}

fn walk_children(element: ElementRef<'_>, buzz: &Selector, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    walk_element(child, buzz, out);
                }
            }
            _ => {}
        }
    }
}

fn walk_element(element: ElementRef<'_>, buzz: &Selector, out: &mut String) {
    let name = element.value().name();
    if BLACKLIST_TAGS.contains(&name) || buzz.matches(&element) {
        return;
    }

    if name == "br" {
        out.push('\n');
        return;
    }

    let block = BLOCK_TAGS.contains(&name);
    if block {
        out.push('\n');
    }
    walk_children(element, buzz, out);
    if block {
        out.push('\n');
    }
}

/// Collapses runs of spaces and blank lines, trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    let spaced = SPACE_REGEX.replace_all(text, " ");
    NEWLINE_REGEX
        .replace_all(&spaced, "\n")
        .trim()
        .to_string()
}
