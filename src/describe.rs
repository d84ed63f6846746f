//! Content Descriptor: the best available spoken label for a single node.
//!
//! The one rule everything here hangs on: a node is described from its *own*
//! content only — accessibility attributes and direct text children — never
//! from text living inside descendant elements. That rule is what keeps a
//! hover over a wrapper from reading an entire subtree as one run-on
//! utterance.

use crate::dom::{DomTree, NodeId, roles};

/// Maximum number of characters taken from a node's direct text.
const DIRECT_TEXT_CAP: usize = 100;

/// The direct content of a node, without descending into child elements.
///
/// Priority order, first non-empty wins: `alt`, `title`, `placeholder`,
/// trimmed `value`, then the node's own text-node children joined with
/// single spaces and capped at 100 characters.
pub fn direct_content(dom: &DomTree, node: NodeId) -> String {
    for attr in ["alt", "title", "placeholder"] {
        if let Some(value) = dom.attr(node, attr)
            && !value.trim().is_empty()
        {
            return value.trim().to_string();
        }
    }

    if let Some(value) = dom.attr(node, "value") {
        let value = value.trim();
        if !value.is_empty() {
            return value.to_string();
        }
    }

    let mut pieces = Vec::new();
    for child in dom.children(node) {
        if let Some(text) = dom.text_content(child) {
            let text = text.trim();
            if !text.is_empty() {
                pieces.push(text);
            }
        }
    }

    cap_chars(&pieces.join(" "), DIRECT_TEXT_CAP)
}

/// Produce the spoken label for a node.
///
/// Falls back to a role name for interactive elements ("link", "button",
/// "dropdown", ...) and to the lower-cased tag name otherwise. Returns an
/// empty string for the document root and `<body>`.
pub fn describe(dom: &DomTree, node: NodeId) -> String {
    if is_root(dom, node) {
        return String::new();
    }

    let text = direct_content(dom, node);
    if !text.is_empty() {
        return text;
    }

    let Some(tag) = dom.tag(node) else {
        return String::new();
    };
    let tag = tag.as_ref();

    match roles::role_name(tag) {
        Some(role) => role.to_string(),
        None => tag.to_lowercase(),
    }
}

/// Produce the spoken label with a role prefix ("button: Submit").
///
/// Unlike [`describe`] there is no bare-role fallback: an element whose
/// direct content is empty yields an empty string, so point-read mode stays
/// silent instead of announcing naked role names.
pub fn describe_with_type(dom: &DomTree, node: NodeId) -> String {
    if is_root(dom, node) {
        return String::new();
    }

    let text = direct_content(dom, node);
    if text.is_empty() {
        return String::new();
    }

    let prefix = dom.tag(node).and_then(|tag| {
        let input_type = dom.attr(node, "type");
        roles::type_prefix(tag.as_ref(), input_type)
    });

    match prefix {
        Some(prefix) => format!("{prefix}: {text}"),
        None => text,
    }
}

fn is_root(dom: &DomTree, node: NodeId) -> bool {
    node == dom.document() || dom.tag(node).is_some_and(|tag| tag.as_ref() == "body")
}

/// Truncate a string to at most `max` characters on a char boundary.
fn cap_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_alt_wins_over_text() {
        let dom = parse_html(br#"<img alt="A cat" title="ignored">"#);
        let img = dom.find_by_tag("img").unwrap();
        assert_eq!(describe(&dom, img), "A cat");
    }

    #[test]
    fn test_title_then_placeholder() {
        let dom = parse_html(br#"<input title="Search the site">"#);
        let input = dom.find_by_tag("input").unwrap();
        assert_eq!(describe(&dom, input), "Search the site");

        let dom = parse_html(br#"<input placeholder="Your name">"#);
        let input = dom.find_by_tag("input").unwrap();
        assert_eq!(describe(&dom, input), "Your name");
    }

    #[test]
    fn test_direct_text_excludes_children() {
        let dom = parse_html(b"<p>own text <span>child text</span> more</p>");
        let p = dom.find_by_tag("p").unwrap();
        assert_eq!(describe(&dom, p), "own text more");
    }

    #[test]
    fn test_tag_fallback_for_bare_leaf() {
        let dom = parse_html(b"<p><canvas></canvas></p>");
        let canvas = dom.find_by_tag("canvas").unwrap();
        assert_eq!(describe(&dom, canvas), "canvas");
    }

    #[test]
    fn test_role_fallback_for_interactive() {
        let dom = parse_html(br#"<a href="/x"></a>"#);
        let a = dom.find_by_tag("a").unwrap();
        assert_eq!(describe(&dom, a), "link");

        let dom = parse_html(b"<select></select>");
        let select = dom.find_by_tag("select").unwrap();
        assert_eq!(describe(&dom, select), "dropdown");
    }

    #[test]
    fn test_root_is_silent() {
        let dom = parse_html(b"<body>text</body>");
        let body = dom.find_by_tag("body").unwrap();
        assert_eq!(describe(&dom, body), "");
        assert_eq!(describe(&dom, dom.document()), "");
    }

    #[test]
    fn test_direct_text_cap() {
        let long = "x".repeat(250);
        let html = format!("<p>{long}</p>");
        let dom = parse_html(html.as_bytes());
        let p = dom.find_by_tag("p").unwrap();
        assert_eq!(describe(&dom, p).chars().count(), 100);
    }

    #[test]
    fn test_typed_description() {
        let dom = parse_html(b"<button>Submit</button>");
        let button = dom.find_by_tag("button").unwrap();
        assert_eq!(describe_with_type(&dom, button), "button: Submit");

        let dom = parse_html(br#"<input type="search" placeholder="Find...">"#);
        let input = dom.find_by_tag("input").unwrap();
        assert_eq!(describe_with_type(&dom, input), "search box: Find...");
    }

    #[test]
    fn test_typed_description_no_bare_roles() {
        let dom = parse_html(br#"<a href="/x"></a>"#);
        let a = dom.find_by_tag("a").unwrap();
        assert_eq!(describe_with_type(&dom, a), "");
    }

    #[test]
    fn test_typed_description_plain_text_unprefixed() {
        let dom = parse_html(b"<p>Just a paragraph</p>");
        let p = dom.find_by_tag("p").unwrap();
        assert_eq!(describe_with_type(&dom, p), "Just a paragraph");
    }

    #[test]
    fn test_multibyte_cap_is_char_safe() {
        let long = "é".repeat(150);
        let html = format!("<p>{long}</p>");
        let dom = parse_html(html.as_bytes());
        let p = dom.find_by_tag("p").unwrap();
        assert_eq!(describe(&dom, p).chars().count(), 100);
    }
}
