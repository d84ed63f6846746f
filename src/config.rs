//! Configuration for the narration engine.

use std::time::Duration;

use crate::dom::{DomTree, NodeId};

/// Per-utterance speech parameters.
///
/// These are external configuration inputs applied to every utterance; they
/// are not part of the narration state machine. Voice selection policy is
/// the host's concern — `voice_index` is passed through untouched.
#[derive(Debug, Clone)]
pub struct SpeechSettings {
    /// Volume in `0.0..=1.0`.
    pub volume: f32,
    /// Speaking rate multiplier.
    pub rate: f32,
    /// Pitch multiplier.
    pub pitch: f32,
    /// BCP 47 language tag.
    pub lang: String,
    /// Index into the host's voice list, if the host selected one.
    pub voice_index: Option<usize>,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            volume: 0.7,
            rate: 1.0,
            pitch: 1.0,
            lang: "en-US".to_string(),
            voice_index: None,
        }
    }
}

/// The toolbar's own regions, excluded from narration triggers.
///
/// Without self-exclusion the toolbar narrates its own buttons the moment
/// the pointer crosses it.
#[derive(Debug, Clone)]
pub struct ChromeMarkers {
    /// Class carried by the toolbar container.
    pub toolbar_class: String,
    /// Id of the toolbar's open/close trigger.
    pub trigger_id: String,
}

impl Default for ChromeMarkers {
    fn default() -> Self {
        Self {
            toolbar_class: "accessibility-toolbar".to_string(),
            trigger_id: "accessibility-trigger".to_string(),
        }
    }
}

impl ChromeMarkers {
    /// Check whether a node sits inside the toolbar chrome.
    pub fn contains(&self, dom: &DomTree, node: NodeId) -> bool {
        std::iter::once(node)
            .chain(dom.ancestors(node))
            .any(|id| {
                dom.has_class(id, &self.toolbar_class)
                    || dom.element_id(id) == Some(self.trigger_id.as_str())
            })
    }
}

/// Narrator configuration: debounce intervals, speech settings, chrome.
#[derive(Debug, Clone)]
pub struct NarratorConfig {
    /// Debounce before a point-read announcement.
    pub point_read_delay: Duration,
    /// Debounce before continuous reading starts. Longer than point-read:
    /// switching reading context mid-sentence is more disruptive than a
    /// one-shot label.
    pub continuous_delay: Duration,
    pub speech: SpeechSettings,
    pub chrome: ChromeMarkers,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            point_read_delay: Duration::from_millis(300),
            continuous_delay: Duration::from_millis(500),
            speech: SpeechSettings::default(),
            chrome: ChromeMarkers::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_chrome_detection_by_class() {
        let dom = parse_html(
            br#"<div class="accessibility-toolbar"><button id="zoom-in">+</button></div>
                <p id="content">text</p>"#,
        );
        let chrome = ChromeMarkers::default();

        let button = dom.get_by_id("zoom-in").unwrap();
        assert!(chrome.contains(&dom, button));

        let content = dom.get_by_id("content").unwrap();
        assert!(!chrome.contains(&dom, content));
    }

    #[test]
    fn test_chrome_detection_by_trigger_id() {
        let dom = parse_html(br#"<button id="accessibility-trigger">open</button>"#);
        let chrome = ChromeMarkers::default();
        let trigger = dom.get_by_id("accessibility-trigger").unwrap();
        assert!(chrome.contains(&dom, trigger));
    }

    #[test]
    fn test_default_delays() {
        let config = NarratorConfig::default();
        assert_eq!(config.point_read_delay, Duration::from_millis(300));
        assert_eq!(config.continuous_delay, Duration::from_millis(500));
    }
}
