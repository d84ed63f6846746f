//! Hover Dispatcher and the public narration surface.
//!
//! All logic runs on pointer/keyboard callbacks and timer polls — never
//! concurrently with itself. The debounce timer is plain data (a deadline),
//! re-armed by overwriting, so "cancel before re-arm" is enforced by
//! construction rather than by discipline.

mod session;

pub use session::{NarrationSession, NullSynthesizer, OnComplete, SpeechSynthesizer, Utterance};

use std::time::Instant;

use tracing::{debug, warn};

use crate::classify::should_skip;
use crate::config::{NarratorConfig, SpeechSettings};
use crate::describe::describe_with_type;
use crate::dom::{DomTree, NodeId};
use crate::extract::{extract_all, extract_from};

/// Spoken when continuous extraction finds nothing from the start point.
pub const NO_CONTENT_NOTICE: &str = "No readable content found";
/// Spoken after a continuous reading runs to completion.
pub const FINISHED_NOTICE: &str = "Finished reading";
/// Spoken when a click interrupts continuous reading.
pub const STOPPED_NOTICE: &str = "Stopped reading";

/// Which narration branch is active. Exactly one value at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrationMode {
    /// No narration.
    #[default]
    Off,
    /// Announce one element's label per hover.
    PointRead,
    /// Read forward from a hovered position through subsequent content.
    Continuous,
}

impl NarrationMode {
    /// Parse a configuration name. Unrecognized values default to `Off`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "single" | "point" | "point-read" => NarrationMode::PointRead,
            "continuous" => NarrationMode::Continuous,
            _ => NarrationMode::Off,
        }
    }
}

impl std::fmt::Display for NarrationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NarrationMode::Off => "off",
            NarrationMode::PointRead => "point-read",
            NarrationMode::Continuous => "continuous",
        };
        f.write_str(name)
    }
}

/// An armed debounce timer: the hover it belongs to and when it fires.
#[derive(Debug, Clone, Copy)]
struct PendingHover {
    target: NodeId,
    due: Instant,
}

/// The narration engine's public surface.
///
/// Owns the hover state machine and the narration session; the host wires
/// pointer events, timer polls and the synthesizer's end-of-utterance signal
/// into it. Node ids are identity markers only — the tree stays with the
/// host and is passed into each call.
pub struct Narrator<S: SpeechSynthesizer> {
    config: NarratorConfig,
    mode: NarrationMode,
    session: NarrationSession<S>,
    /// Identity marker for jitter suppression; never dereferenced across calls.
    last_hovered: Option<NodeId>,
    pending: Option<PendingHover>,
}

impl<S: SpeechSynthesizer> Narrator<S> {
    pub fn new(synth: S, config: NarratorConfig) -> Self {
        let session = NarrationSession::new(synth, config.speech.clone());
        Self {
            config,
            mode: NarrationMode::Off,
            session,
            last_hovered: None,
            pending: None,
        }
    }

    pub fn mode(&self) -> NarrationMode {
        self.mode
    }

    /// Switch narration mode, cancelling any pending timer and in-flight
    /// utterance. Stale timers surviving a mode switch are the classic
    /// source of narration about elements the pointer already left.
    pub fn set_mode(&mut self, mode: NarrationMode) {
        debug!(from = %self.mode, to = %mode, "narration mode change");
        self.pending = None;
        self.last_hovered = None;
        self.session.stop();
        self.mode = mode;
    }

    /// Pointer entered `target`. Arms (or re-arms) the debounce timer.
    pub fn pointer_over(&mut self, dom: &DomTree, target: NodeId, now: Instant) {
        if self.mode == NarrationMode::Off {
            return;
        }
        if self.config.chrome.contains(dom, target) {
            return;
        }
        // Sub-pixel jitter re-delivers the same element; never re-announce it
        if self.last_hovered == Some(target) {
            return;
        }

        let delay = match self.mode {
            NarrationMode::PointRead => self.config.point_read_delay,
            NarrationMode::Continuous => self.config.continuous_delay,
            NarrationMode::Off => return,
        };
        self.pending = Some(PendingHover {
            target,
            due: now + delay,
        });
    }

    /// Pointer left the hovered element. Cancels the pending timer and
    /// clears the jitter marker; an already-started continuous reading keeps
    /// going.
    pub fn pointer_out(&mut self) {
        self.pending = None;
        self.last_hovered = None;
    }

    /// Pointer click. In continuous mode a click outside the chrome stops
    /// an in-progress reading; point-read mode is unaffected.
    pub fn pointer_click(&mut self, dom: &DomTree, target: NodeId) {
        if self.mode == NarrationMode::Off {
            return;
        }
        if self.config.chrome.contains(dom, target) {
            return;
        }
        if self.mode == NarrationMode::Continuous && self.session.is_reading() {
            self.stop();
            self.say(STOPPED_NOTICE);
        }
    }

    /// Fire the debounce timer if it is due. The host calls this from its
    /// timer callback; [`Narrator::pending_deadline`] says when.
    pub fn poll(&mut self, dom: &DomTree, now: Instant) {
        let Some(pending) = self.pending else {
            return;
        };
        if now < pending.due {
            return;
        }
        self.pending = None;
        self.fire(dom, pending.target);
    }

    /// Deadline of the armed debounce timer, if any.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// Narrate the whole main-content region, independent of hover.
    pub fn read_page(&mut self, dom: &DomTree) {
        if self.mode == NarrationMode::Off || self.session.is_reading() {
            return;
        }
        let content = extract_all(dom, &self.config.chrome);
        if content.is_empty() {
            self.say(NO_CONTENT_NOTICE);
        } else {
            self.say(&content);
        }
    }

    /// Stop speech and fully reset hover tracking, so the next hover over
    /// the same element re-triggers narration.
    pub fn stop(&mut self) {
        self.session.stop();
        self.pending = None;
        self.last_hovered = None;
    }

    pub fn is_reading(&self) -> bool {
        self.session.is_reading()
    }

    /// Host signal that the active utterance finished.
    pub fn notify_utterance_end(&mut self) {
        self.session.notify_finished();
    }

    /// Per-utterance speech parameters (volume/rate sliders et al.).
    pub fn settings_mut(&mut self) -> &mut SpeechSettings {
        &mut self.session.settings
    }

    /// Access the underlying session.
    pub fn session(&self) -> &NarrationSession<S> {
        &self.session
    }

    fn fire(&mut self, dom: &DomTree, target: NodeId) {
        debug!(node = target.0, mode = %self.mode, "hover debounce fired");
        self.last_hovered = Some(target);

        if should_skip(dom, target) {
            return;
        }

        match self.mode {
            NarrationMode::Off => {}
            NarrationMode::PointRead => {
                let description = describe_with_type(dom, target);
                if !description.is_empty() {
                    self.say(&description);
                }
            }
            NarrationMode::Continuous => {
                if self.session.is_reading() {
                    self.session.stop();
                }
                let content = extract_from(dom, &self.config.chrome, target);
                if content.is_empty() {
                    self.say(NO_CONTENT_NOTICE);
                } else {
                    self.say_then(&content, |session| {
                        if let Err(err) = session.speak(FINISHED_NOTICE) {
                            warn!(%err, "completion announcement failed");
                        }
                    });
                }
            }
        }
    }

    fn say(&mut self, text: &str) {
        if let Err(err) = self.session.speak(text) {
            warn!(%err, "speech request failed");
        }
    }

    fn say_then(
        &mut self,
        text: &str,
        on_complete: impl FnOnce(&mut NarrationSession<S>) + 'static,
    ) {
        if let Err(err) = self
            .session
            .speak_with_callback(text, Some(Box::new(on_complete)))
        {
            warn!(%err, "speech request failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing_defaults_to_off() {
        assert_eq!(NarrationMode::from_name("single"), NarrationMode::PointRead);
        assert_eq!(
            NarrationMode::from_name("continuous"),
            NarrationMode::Continuous
        );
        assert_eq!(NarrationMode::from_name("none"), NarrationMode::Off);
        assert_eq!(NarrationMode::from_name("garbage"), NarrationMode::Off);
        assert_eq!(NarrationMode::from_name(""), NarrationMode::Off);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(NarrationMode::PointRead.to_string(), "point-read");
        assert_eq!(NarrationMode::Off.to_string(), "off");
    }
}
