//! Narration Session: the sole caller into the speech synthesizer.
//!
//! Invariant: at most one pending/active utterance. Every `speak` cancels
//! whatever was in flight first, and a superseded utterance's completion
//! callback is dropped so it can never fire.

use crate::config::SpeechSettings;
use crate::error::{Error, Result};

/// A single speech request handed to the synthesizer.
#[derive(Debug, Clone)]
pub struct Utterance {
    pub text: String,
    pub volume: f32,
    pub rate: f32,
    pub pitch: f32,
    pub lang: String,
    pub voice_index: Option<usize>,
}

impl Utterance {
    fn new(text: &str, settings: &SpeechSettings) -> Self {
        Self {
            text: text.to_string(),
            volume: settings.volume,
            rate: settings.rate,
            pitch: settings.pitch,
            lang: settings.lang.clone(),
            voice_index: settings.voice_index,
        }
    }
}

/// External speech-synthesis collaborator.
///
/// The service is assumed to serialize requests itself once the
/// cancel-then-speak discipline is followed; `cancel` must drop the active
/// request immediately. End-of-utterance is signalled back by the host via
/// [`NarrationSession::notify_finished`].
pub trait SpeechSynthesizer {
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;
    fn cancel(&mut self);
}

/// Stand-in for a missing speech service: every request fails as
/// unavailable, which the narrator reports as a warning and swallows.
#[derive(Debug, Default)]
pub struct NullSynthesizer;

impl SpeechSynthesizer for NullSynthesizer {
    fn speak(&mut self, _utterance: &Utterance) -> Result<()> {
        Err(Error::SpeechUnavailable)
    }

    fn cancel(&mut self) {}
}

/// Completion callback, invoked exactly once when an utterance finishes.
///
/// Receives the session so it can chain a follow-up utterance.
pub type OnComplete<S> = Box<dyn FnOnce(&mut NarrationSession<S>)>;

/// Owns the "is speaking" state and the active request's callback.
pub struct NarrationSession<S: SpeechSynthesizer> {
    synth: S,
    pub settings: SpeechSettings,
    is_reading: bool,
    on_complete: Option<OnComplete<S>>,
}

impl<S: SpeechSynthesizer> NarrationSession<S> {
    pub fn new(synth: S, settings: SpeechSettings) -> Self {
        Self {
            synth,
            settings,
            is_reading: false,
            on_complete: None,
        }
    }

    /// Speak `text`, cancelling any in-flight utterance first.
    ///
    /// Empty text is a no-op after the cancellation, so "speak nothing"
    /// doubles as "stop speech".
    pub fn speak(&mut self, text: &str) -> Result<()> {
        self.speak_with_callback(text, None)
    }

    /// Speak with a completion callback that fires exactly once when the
    /// utterance ends. A callback belonging to a superseded utterance is
    /// dropped unfired.
    pub fn speak_with_callback(&mut self, text: &str, on_complete: Option<OnComplete<S>>) -> Result<()> {
        self.synth.cancel();
        self.on_complete = None;
        self.is_reading = false;

        if text.is_empty() {
            return Ok(());
        }

        let utterance = Utterance::new(text, &self.settings);
        self.synth.speak(&utterance)?;

        self.is_reading = true;
        self.on_complete = on_complete;
        Ok(())
    }

    /// Host signal that the active utterance finished playing.
    pub fn notify_finished(&mut self) {
        if !self.is_reading {
            return;
        }
        self.is_reading = false;
        if let Some(callback) = self.on_complete.take() {
            callback(self);
        }
    }

    /// Cancel the active utterance immediately.
    pub fn stop(&mut self) {
        self.synth.cancel();
        self.is_reading = false;
        self.on_complete = None;
    }

    pub fn is_reading(&self) -> bool {
        self.is_reading
    }

    /// Access the underlying synthesizer.
    pub fn synthesizer(&self) -> &S {
        &self.synth
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct RecordingSynth {
        spoken: Rc<RefCell<Vec<Utterance>>>,
        cancels: Rc<RefCell<usize>>,
    }

    impl RecordingSynth {
        fn texts(&self) -> Vec<String> {
            self.spoken.borrow().iter().map(|u| u.text.clone()).collect()
        }
    }

    impl SpeechSynthesizer for RecordingSynth {
        fn speak(&mut self, utterance: &Utterance) -> Result<()> {
            self.spoken.borrow_mut().push(utterance.clone());
            Ok(())
        }

        fn cancel(&mut self) {
            *self.cancels.borrow_mut() += 1;
        }
    }

    fn session() -> NarrationSession<RecordingSynth> {
        NarrationSession::new(RecordingSynth::default(), SpeechSettings::default())
    }

    #[test]
    fn test_cancel_before_speak() {
        let mut session = session();
        session.speak("hello").unwrap();
        assert!(session.is_reading());
        assert_eq!(*session.synthesizer().cancels.borrow(), 1);
        assert_eq!(session.synthesizer().texts(), ["hello"]);
    }

    #[test]
    fn test_empty_text_stops_without_speaking() {
        let mut session = session();
        session.speak("hello").unwrap();
        session.speak("").unwrap();
        assert!(!session.is_reading());
        assert_eq!(session.synthesizer().spoken.borrow().len(), 1);
        assert_eq!(*session.synthesizer().cancels.borrow(), 2);
    }

    #[test]
    fn test_superseded_callback_never_fires() {
        let completions: Rc<RefCell<Vec<&'static str>>> = Rc::default();

        let mut session = session();
        let log = Rc::clone(&completions);
        session
            .speak_with_callback("x", Some(Box::new(move |_| log.borrow_mut().push("x"))))
            .unwrap();
        let log = Rc::clone(&completions);
        session
            .speak_with_callback("y", Some(Box::new(move |_| log.borrow_mut().push("y"))))
            .unwrap();

        session.notify_finished();
        session.notify_finished(); // spurious second signal must be ignored

        assert_eq!(completions.borrow().as_slice(), ["y"]);
    }

    #[test]
    fn test_callback_can_chain_followup() {
        let mut session = session();
        session
            .speak_with_callback(
                "body",
                Some(Box::new(|s| {
                    let _ = s.speak("done");
                })),
            )
            .unwrap();
        session.notify_finished();

        assert_eq!(session.synthesizer().texts(), ["body", "done"]);
        assert!(session.is_reading());
    }

    #[test]
    fn test_unavailable_synth_is_a_noop() {
        let mut session = NarrationSession::new(NullSynthesizer, SpeechSettings::default());
        assert!(session.speak("anything").is_err());
        assert!(!session.is_reading());
    }

    #[test]
    fn test_settings_applied_per_utterance() {
        let mut session = session();
        session.settings.volume = 0.4;
        session.settings.rate = 1.5;
        session.speak("check").unwrap();

        let spoken = session.synthesizer().spoken.borrow();
        assert_eq!(spoken[0].volume, 0.4);
        assert_eq!(spoken[0].rate, 1.5);
        assert_eq!(spoken[0].lang, "en-US");
    }
}
