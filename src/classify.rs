//! Container Classifier: structural containers versus announceable leaves.

use crate::describe::direct_content;
use crate::dom::{DomTree, NodeId, roles};

/// Decide whether a node is a structural container to skip.
///
/// Two signals, either suffices:
///
/// 1. The tag is in the structural set and at least one element child has
///    direct content or is interactive — the container's content is already
///    going to be announced via its children.
/// 2. The node has no direct content of its own but does have element
///    children — an empty wrapper whose value lives entirely in descendants.
///
/// Leaf nodes with no children and no text are *not* skipped; they still get
/// a tag-based fallback label from the descriptor. The heuristic accepts
/// occasionally skipping a container with a useful label to avoid
/// double-narrating nested regions.
pub fn should_skip(dom: &DomTree, node: NodeId) -> bool {
    let Some(tag) = dom.tag(node) else {
        return false;
    };

    if roles::is_structural_container(tag.as_ref()) {
        let has_meaningful_child = dom.children(node).any(|child| {
            if !dom.is_element(child) {
                return false;
            }
            if dom
                .tag(child)
                .is_some_and(|t| roles::is_interactive(t.as_ref()))
            {
                return true;
            }
            !direct_content(dom, child).is_empty()
        });
        if has_meaningful_child {
            return true;
        }
    }

    if direct_content(dom, node).is_empty() && dom.children(node).any(|c| dom.is_element(c)) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_skips_container_with_text_children() {
        let dom = parse_html(b"<div><p>Some text</p></div>");
        let div = dom.find_by_tag("div").unwrap();
        assert!(should_skip(&dom, div));
    }

    #[test]
    fn test_skips_container_with_interactive_children() {
        let dom = parse_html(br#"<nav><a href="/home"></a></nav>"#);
        let nav = dom.find_by_tag("nav").unwrap();
        assert!(should_skip(&dom, nav));
    }

    #[test]
    fn test_skips_empty_wrapper() {
        // Not in the structural set, but no direct content + element children
        let dom = parse_html(b"<span><em>inner</em></span>");
        let span = dom.find_by_tag("span").unwrap();
        assert!(should_skip(&dom, span));
    }

    #[test]
    fn test_keeps_bare_leaf() {
        let dom = parse_html(b"<p><canvas></canvas></p>");
        let canvas = dom.find_by_tag("canvas").unwrap();
        assert!(!should_skip(&dom, canvas));
    }

    #[test]
    fn test_keeps_labeled_paragraph() {
        let dom = parse_html(b"<p>Readable text</p>");
        let p = dom.find_by_tag("p").unwrap();
        assert!(!should_skip(&dom, p));
    }

    #[test]
    fn test_keeps_container_with_own_text_and_plain_children() {
        // Structural tag, but its children carry no content of their own,
        // and the div itself has direct text
        let dom = parse_html(b"<div>label <canvas></canvas></div>");
        let div = dom.find_by_tag("div").unwrap();
        assert!(!should_skip(&dom, div));
    }
}
