//! # pagespeak
//!
//! An in-page narration engine for HTML: the logic core of an accessibility
//! toolbar that reads web pages aloud on hover.
//!
//! ## Features
//!
//! - Describe any element by its most specific available label (alt, title,
//!   placeholder, value, or direct text), prefixed with its control type
//! - Skip generic layout containers so narration lands on real content
//! - Extract readable content in document order from a hovered position to
//!   the end of the enclosing container, deduplicated and length-capped
//! - Debounced hover dispatch with point-read and continuous modes
//! - A single-utterance narration session over any [`SpeechSynthesizer`]
//! - Toolbar state: zoom stepping, visual assist toggles, hotkey dispatch
//!
//! ## Quick Start
//!
//! ```
//! use std::time::{Duration, Instant};
//! use pagespeak::{parse_html, NarrationMode, Narrator, NarratorConfig, NullSynthesizer};
//!
//! let dom = parse_html(b"<article><p>Hello, reader.</p></article>");
//! let paragraph = dom.find_by_tag("p").unwrap();
//!
//! let mut narrator = Narrator::new(NullSynthesizer, NarratorConfig::default());
//! narrator.set_mode(NarrationMode::Continuous);
//!
//! // The host wires pointer events and a timer into the narrator.
//! let now = Instant::now();
//! narrator.pointer_over(&dom, paragraph, now);
//! narrator.poll(&dom, now + Duration::from_millis(500));
//! ```
//!
//! The engine never talks to a real speech service itself; the host supplies
//! a [`SpeechSynthesizer`] and reports end-of-utterance back via
//! [`Narrator::notify_utterance_end`].

pub mod classify;
pub mod config;
pub mod describe;
pub mod dom;
pub mod error;
pub mod extract;
pub mod narrator;
pub mod toolbar;
pub(crate) mod util;

pub use config::{ChromeMarkers, NarratorConfig, SpeechSettings};
pub use describe::{describe, describe_with_type};
pub use dom::{parse_html, parse_html_with_encoding, DomTree, NodeId};
pub use error::{Error, Result};
pub use extract::{extract_all, extract_from};
pub use narrator::{
    NarrationMode, NarrationSession, Narrator, NullSynthesizer, SpeechSynthesizer, Utterance,
};
pub use toolbar::{Action, Feature, Hotkey, HotkeyMap, ToolbarState};
