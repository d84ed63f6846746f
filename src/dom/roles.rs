//! Tag classification sets used by the narration components.
//!
//! These are deliberately plain tag-name matches: narration works on
//! arbitrary host pages, so the classification has to hold up without any
//! schema knowledge beyond HTML itself.

/// Structural containers whose content is announced through their children.
///
/// Announcing one of these *and* its children would double-narrate nested
/// regions, which is the failure mode the classifier exists to avoid.
pub fn is_structural_container(tag: &str) -> bool {
    matches!(
        tag,
        "div"
            | "section"
            | "article"
            | "main"
            | "header"
            | "footer"
            | "aside"
            | "nav"
            | "ul"
            | "ol"
            | "table"
            | "form"
            | "fieldset"
            | "details"
    )
}

/// Interactive elements that make a container's children "meaningful".
pub fn is_interactive(tag: &str) -> bool {
    matches!(tag, "a" | "button" | "input" | "select" | "textarea")
}

/// Content-bearing containers eligible as an extraction starting container.
pub fn is_content_container(tag: &str) -> bool {
    matches!(
        tag,
        "article" | "section" | "main" | "div" | "p" | "li" | "blockquote"
    )
}

/// Elements whose text is never page content.
pub fn is_non_content(tag: &str) -> bool {
    matches!(tag, "script" | "style" | "noscript")
}

/// Spoken role name for interactive elements with no label of their own.
pub fn role_name(tag: &str) -> Option<&'static str> {
    match tag {
        "a" => Some("link"),
        "button" => Some("button"),
        "input" => Some("input"),
        "img" => Some("image"),
        "video" => Some("video"),
        "audio" => Some("audio"),
        "select" => Some("dropdown"),
        _ => None,
    }
}

/// Role prefix for typed descriptions, derived from tag and input type.
///
/// Returns `None` for elements that are spoken without a prefix.
pub fn type_prefix(tag: &str, input_type: Option<&str>) -> Option<&'static str> {
    match tag {
        "button" => Some("button"),
        "a" => Some("link"),
        "input" => match input_type.unwrap_or("text") {
            "button" | "submit" => Some("button"),
            "text" => Some("text input"),
            "password" => Some("password input"),
            "email" => Some("email input"),
            "tel" => Some("phone input"),
            "number" => Some("number input"),
            "search" => Some("search box"),
            "url" => Some("URL input"),
            _ => Some("input"),
        },
        "select" => Some("dropdown"),
        "textarea" => Some("text area"),
        "img" => Some("image"),
        _ => None,
    }
}
