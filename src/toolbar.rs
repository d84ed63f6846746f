//! Toolbar feature state and hotkey dispatch.
//!
//! The visual side of the toolbar — CSS, layout, class application — belongs
//! to the host. This module owns the state behind it: zoom stepping, which
//! assist features are on, the announcement text each change should speak,
//! and the keyboard-chord dispatch table. Announcements are returned to the
//! caller, which passes them to the narrator.

use std::collections::HashSet;

/// Zoom bounds and step, in percent.
const ZOOM_MIN: u16 = 50;
const ZOOM_MAX: u16 = 300;
const ZOOM_STEP: u16 = 10;

/// A toggleable visual assist feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    HighContrast,
    TextOnly,
    ReadingGuide,
    LargeCursor,
    LargeCaptions,
}

impl Feature {
    /// CSS class the host applies while the feature is enabled, if the
    /// feature is class-driven.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Feature::HighContrast => Some("high-contrast"),
            Feature::TextOnly => Some("text-only"),
            Feature::LargeCursor => Some("large-cursor"),
            Feature::ReadingGuide | Feature::LargeCaptions => None,
        }
    }

    fn spoken_name(self) -> &'static str {
        match self {
            Feature::HighContrast => "High contrast mode",
            Feature::TextOnly => "Text-only mode",
            Feature::ReadingGuide => "Reading guide",
            Feature::LargeCursor => "Large cursor",
            Feature::LargeCaptions => "Large captions",
        }
    }

    const ALL: [Feature; 5] = [
        Feature::HighContrast,
        Feature::TextOnly,
        Feature::ReadingGuide,
        Feature::LargeCursor,
        Feature::LargeCaptions,
    ];
}

/// State behind the toolbar's visual adjustments.
///
/// Zoom is tracked in integer percent to keep 0.1 steps exact.
#[derive(Debug, Clone)]
pub struct ToolbarState {
    zoom_percent: u16,
    enabled: HashSet<Feature>,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolbarState {
    pub fn new() -> Self {
        Self {
            zoom_percent: 100,
            enabled: HashSet::new(),
        }
    }

    /// Current zoom factor (1.0 = 100%).
    pub fn zoom(&self) -> f32 {
        f32::from(self.zoom_percent) / 100.0
    }

    /// Step zoom up. Returns the announcement to speak.
    pub fn zoom_in(&mut self) -> String {
        self.zoom_percent = (self.zoom_percent + ZOOM_STEP).min(ZOOM_MAX);
        if self.zoom_percent == ZOOM_MAX {
            return "Page is at maximum zoom".to_string();
        }
        format!("Page zoomed in to {}%", self.zoom_percent)
    }

    /// Step zoom down. Returns the announcement to speak.
    pub fn zoom_out(&mut self) -> String {
        self.zoom_percent = self.zoom_percent.saturating_sub(ZOOM_STEP).max(ZOOM_MIN);
        if self.zoom_percent == ZOOM_MIN {
            return "Page is at minimum zoom".to_string();
        }
        format!("Page zoomed out to {}%", self.zoom_percent)
    }

    pub fn reset_zoom(&mut self) {
        self.zoom_percent = 100;
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.enabled.contains(&feature)
    }

    /// Flip a feature. Returns the announcement to speak.
    pub fn toggle(&mut self, feature: Feature) -> String {
        let enabled = !self.is_enabled(feature);
        self.set(feature, enabled);
        format!(
            "{} {}",
            feature.spoken_name(),
            if enabled { "enabled" } else { "disabled" }
        )
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        if enabled {
            self.enabled.insert(feature);
        } else {
            self.enabled.remove(&feature);
        }
    }

    /// CSS classes the host should currently apply to its targets.
    pub fn active_classes(&self) -> Vec<&'static str> {
        Feature::ALL
            .iter()
            .filter(|f| self.is_enabled(**f))
            .filter_map(|f| f.css_class())
            .collect()
    }

    /// Reset zoom and all features. Returns the announcement to speak.
    pub fn reset_all(&mut self) -> String {
        self.reset_zoom();
        self.enabled.clear();
        "All accessibility features reset".to_string()
    }
}

/// Action behind a keyboard chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GoHome,
    ToggleToolbar,
    ZoomIn,
    ZoomOut,
    ResetAll,
    TogglePointRead,
    ToggleContinuous,
    ToggleHighContrast,
    ToggleTextOnly,
    ToggleReadingGuide,
    ToggleLargeCaptions,
    ToggleLargeCursor,
    NavigateBack,
    NavigateForward,
    StopSpeech,
}

/// A keyboard chord: optional Alt modifier plus a key code ("KeyH",
/// "Equal", "Escape", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub alt: bool,
    pub code: String,
}

impl Hotkey {
    /// Parse a chord string like `"Alt+KeyH"` or `"Escape"`.
    pub fn parse(chord: &str) -> Option<Self> {
        if chord.is_empty() {
            return None;
        }
        match chord.split_once('+') {
            Some(("Alt", code)) if !code.is_empty() => Some(Self {
                alt: true,
                code: code.to_string(),
            }),
            Some(_) => None,
            None => Some(Self {
                alt: false,
                code: chord.to_string(),
            }),
        }
    }
}

/// Keyboard dispatch table.
pub struct HotkeyMap {
    bindings: Vec<(Hotkey, Action)>,
}

impl Default for HotkeyMap {
    fn default() -> Self {
        let defaults = [
            ("Alt+KeyH", Action::GoHome),
            ("Alt+KeyA", Action::ToggleToolbar),
            ("Alt+Equal", Action::ZoomIn),
            ("Alt+Minus", Action::ZoomOut),
            ("Alt+KeyS", Action::TogglePointRead),
            ("Alt+KeyM", Action::ToggleContinuous),
            ("Alt+KeyC", Action::ToggleHighContrast),
            ("Alt+KeyT", Action::ToggleTextOnly),
            ("Alt+KeyR", Action::ToggleReadingGuide),
            ("Alt+KeyL", Action::ToggleLargeCaptions),
            ("Alt+KeyU", Action::ToggleLargeCursor),
            ("Alt+Digit0", Action::ResetAll),
            ("Alt+BracketLeft", Action::NavigateBack),
            ("Alt+BracketRight", Action::NavigateForward),
            ("Escape", Action::StopSpeech),
        ];
        let bindings = defaults
            .into_iter()
            .filter_map(|(chord, action)| Hotkey::parse(chord).map(|hk| (hk, action)))
            .collect();
        Self { bindings }
    }
}

impl HotkeyMap {
    /// Look up the action bound to a pressed chord.
    pub fn lookup(&self, alt: bool, code: &str) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(hk, _)| hk.alt == alt && hk.code == code)
            .map(|(_, action)| *action)
    }

    /// Rebind an action to a new chord, replacing any existing binding.
    pub fn bind(&mut self, hotkey: Hotkey, action: Action) {
        self.bindings.retain(|(_, a)| *a != action);
        self.bindings.push((hotkey, action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut toolbar = ToolbarState::new();
        assert_eq!(toolbar.zoom_in(), "Page zoomed in to 110%");
        assert_eq!(toolbar.zoom_out(), "Page zoomed out to 100%");

        for _ in 0..30 {
            toolbar.zoom_in();
        }
        assert_eq!(toolbar.zoom(), 3.0);
        assert_eq!(toolbar.zoom_in(), "Page is at maximum zoom");

        for _ in 0..40 {
            toolbar.zoom_out();
        }
        assert_eq!(toolbar.zoom(), 0.5);
        assert_eq!(toolbar.zoom_out(), "Page is at minimum zoom");
    }

    #[test]
    fn test_feature_toggles_announce() {
        let mut toolbar = ToolbarState::new();
        assert_eq!(
            toolbar.toggle(Feature::HighContrast),
            "High contrast mode enabled"
        );
        assert!(toolbar.is_enabled(Feature::HighContrast));
        assert_eq!(
            toolbar.toggle(Feature::HighContrast),
            "High contrast mode disabled"
        );
        assert!(!toolbar.is_enabled(Feature::HighContrast));
    }

    #[test]
    fn test_active_classes() {
        let mut toolbar = ToolbarState::new();
        toolbar.set(Feature::HighContrast, true);
        toolbar.set(Feature::ReadingGuide, true); // not class-driven
        let classes = toolbar.active_classes();
        assert_eq!(classes, vec!["high-contrast"]);
    }

    #[test]
    fn test_reset_all() {
        let mut toolbar = ToolbarState::new();
        toolbar.zoom_in();
        toolbar.set(Feature::TextOnly, true);
        toolbar.reset_all();
        assert_eq!(toolbar.zoom(), 1.0);
        assert!(toolbar.active_classes().is_empty());
    }

    #[test]
    fn test_hotkey_parse() {
        assert_eq!(
            Hotkey::parse("Alt+KeyH"),
            Some(Hotkey {
                alt: true,
                code: "KeyH".to_string()
            })
        );
        assert_eq!(
            Hotkey::parse("Escape"),
            Some(Hotkey {
                alt: false,
                code: "Escape".to_string()
            })
        );
        assert_eq!(Hotkey::parse("Ctrl+KeyH"), None);
        assert_eq!(Hotkey::parse(""), None);
    }

    #[test]
    fn test_hotkey_lookup_and_rebind() {
        let mut map = HotkeyMap::default();
        assert_eq!(map.lookup(true, "KeyC"), Some(Action::ToggleHighContrast));
        assert_eq!(map.lookup(false, "Escape"), Some(Action::StopSpeech));
        assert_eq!(map.lookup(false, "KeyC"), None);

        map.bind(Hotkey::parse("Alt+KeyX").unwrap(), Action::ToggleHighContrast);
        assert_eq!(map.lookup(true, "KeyC"), None);
        assert_eq!(map.lookup(true, "KeyX"), Some(Action::ToggleHighContrast));
    }
}
