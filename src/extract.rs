//! Document-Order Extractor: visible text from a start position onward.
//!
//! `extract_from` is a pure function over the tree — no narration state, no
//! side effects. It walks text nodes in document order inside the smallest
//! substantial container around the start node, filters out non-content,
//! chrome, whitespace, hidden and before-start fragments, deduplicates
//! repeated runs, and truncates at a fixed budget.

use std::collections::HashSet;

use crate::config::ChromeMarkers;
use crate::dom::{DomTree, NodeId, roles};

/// Appended when extraction stops at the length budget.
pub const TRUNCATION_MARKER: &str = "... (content truncated)";

/// Maximum extracted length in characters, excluding the truncation marker.
const MAX_CONTENT_CHARS: usize = 5000;

/// Minimum subtree text length for a container to count as substantial.
const SUBSTANTIAL_CHARS: usize = 20;

/// Extract readable text starting at `start`, in document order.
///
/// The walk covers the smallest ancestor of `start` that is a
/// content-bearing container (`article`, `section`, `main`, `div`, `p`,
/// `li`, `blockquote`) with more than 20 characters of subtree text,
/// defaulting to `<body>` or the document root. Fragments strictly before
/// `start` are rejected; so are fragments inside script/style/noscript,
/// inside the toolbar chrome, pure whitespace, and fragments under a hidden
/// element. Exact repeats and one-character fragments are dropped, runs are
/// joined with sentence punctuation, and output is capped so it never
/// exceeds 5000 characters plus [`TRUNCATION_MARKER`].
pub fn extract_from(dom: &DomTree, chrome: &ChromeMarkers, start: NodeId) -> String {
    let container = find_content_container(dom, start);

    let mut content = String::new();
    let mut content_chars = 0usize;
    let mut seen: HashSet<String> = HashSet::new();
    let mut reached_start = false;

    for id in dom.descendants(container) {
        if id == start {
            reached_start = true;
        }

        let Some(raw) = dom.text_content(id) else {
            continue;
        };
        if !reached_start {
            continue;
        }
        if !fragment_is_content(dom, chrome, id) {
            continue;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Repeats and single-character fragments are noise
        let trimmed_chars = trimmed.chars().count();
        if trimmed_chars <= 1 || seen.contains(trimmed) {
            continue;
        }

        let separator = if content.is_empty() {
            ""
        } else if content.ends_with(['.', '!', '?']) {
            " "
        } else {
            ". "
        };

        if content_chars + separator.len() + trimmed_chars > MAX_CONTENT_CHARS {
            content.push_str(TRUNCATION_MARKER);
            break;
        }

        content.push_str(separator);
        content.push_str(trimmed);
        content_chars += separator.len() + trimmed_chars;
        seen.insert(trimmed.to_string());
    }

    content
}

/// Extract all readable text of the page's main content region.
///
/// Runs only the non-content/chrome/whitespace filters over `<main>` (or
/// `<body>`/root when absent), with no start position, no dedup and no
/// truncation. Used for "read entire page" rather than "continue from here".
pub fn extract_all(dom: &DomTree, chrome: &ChromeMarkers) -> String {
    let region = dom
        .find_by_tag("main")
        .or_else(|| dom.find_by_tag("body"))
        .unwrap_or(dom.document());

    let mut content = String::new();
    for id in dom.descendants(region) {
        let Some(raw) = dom.text_content(id) else {
            continue;
        };
        if in_non_content(dom, id) || in_chrome(dom, chrome, id) {
            continue;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !content.is_empty() {
            content.push(' ');
        }
        content.push_str(trimmed);
    }

    content
}

/// Smallest ancestor of `start` that qualifies as a substantial content
/// container, defaulting to `<body>` or the document root.
fn find_content_container(dom: &DomTree, start: NodeId) -> NodeId {
    for id in dom.ancestors(start) {
        let Some(tag) = dom.tag(id) else {
            continue;
        };
        if tag.as_ref() == "body" {
            break;
        }
        if roles::is_content_container(tag.as_ref()) && is_substantial(dom, id) {
            return id;
        }
    }
    dom.find_by_tag("body").unwrap_or(dom.document())
}

fn is_substantial(dom: &DomTree, node: NodeId) -> bool {
    dom.subtree_text(node).trim().chars().count() > SUBSTANTIAL_CHARS
}

/// Filters 1, 2 and 4: non-content ancestry, chrome ancestry, hidden ancestry.
fn fragment_is_content(dom: &DomTree, chrome: &ChromeMarkers, text_node: NodeId) -> bool {
    if in_non_content(dom, text_node) || in_chrome(dom, chrome, text_node) {
        return false;
    }
    // Hidden anywhere up the chain hides the fragment
    !dom.ancestors(text_node).any(|id| dom.is_hidden_inline(id))
}

fn in_non_content(dom: &DomTree, text_node: NodeId) -> bool {
    dom.ancestors(text_node)
        .any(|id| dom.tag(id).is_some_and(|t| roles::is_non_content(t.as_ref())))
}

fn in_chrome(dom: &DomTree, chrome: &ChromeMarkers, text_node: NodeId) -> bool {
    match dom.parent(text_node) {
        Some(parent) => chrome.contains(dom, parent),
        None => false,
    }
}
