use log::debug;

use super::speech::{SpeakOptions, SpeechSynth};
use crate::error::AssistError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationState {
    Idle,
    Speaking,
}

/// Single-writer narration state machine.
///
/// At most one utterance is ever active: a new request while `Speaking`
/// cancels the in-flight one first (`Speaking -> Idle -> Speaking`). The
/// latest request always wins; nothing queues.
pub struct NarrationSession<S: SpeechSynth> {
    synth: S,
    state: NarrationState,
    options: SpeakOptions,
}

impl<S: SpeechSynth> NarrationSession<S> {
    pub fn new(synth: S) -> Self {
        Self {
            synth,
            state: NarrationState::Idle,
            options: SpeakOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SpeakOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> NarrationState {
        self.state
    }

    /// Cancel anything in flight, then start the new utterance. Blank text
    /// is ignored without touching the collaborator.
    pub fn speak(&mut self, text: &str) -> Result<(), AssistError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        self.stop();
        self.synth.speak(text, &self.options)?;
        self.state = NarrationState::Speaking;
        Ok(())
    }

    /// Cancel the in-flight utterance, if any.
    pub fn stop(&mut self) {
        if self.state == NarrationState::Speaking {
            debug!("cancelling in-flight utterance");
            self.synth.cancel();
            self.state = NarrationState::Idle;
        }
    }

    /// The collaborator reported that the current utterance finished.
    pub fn finished(&mut self) {
        self.state = NarrationState::Idle;
    }
}

#[cfg(test)]
pub(crate) mod test_synth {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every call so tests can assert cancel-before-speak ordering.
    #[derive(Clone, Default)]
    pub struct RecordingSynth {
        pub calls: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingSynth {
        pub fn spoken(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl SpeechSynth for RecordingSynth {
        fn speak(&mut self, text: &str, _options: &SpeakOptions) -> Result<(), AssistError> {
            self.calls.borrow_mut().push(format!("speak:{}", text));
            Ok(())
        }

        fn cancel(&mut self) {
            self.calls.borrow_mut().push("cancel".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_synth::RecordingSynth;
    use super::*;

    #[test]
    fn test_speak_transitions_to_speaking() {
        let synth = RecordingSynth::default();
        let mut session = NarrationSession::new(synth.clone());
        session.speak("hello").unwrap();
        assert_eq!(session.state(), NarrationState::Speaking);
        assert_eq!(synth.spoken(), vec!["speak:hello"]);
    }

    #[test]
    fn test_new_request_cancels_in_flight_utterance() {
        let synth = RecordingSynth::default();
        let mut session = NarrationSession::new(synth.clone());
        session.speak("first").unwrap();
        session.speak("second").unwrap();
        assert_eq!(
            synth.spoken(),
            vec!["speak:first", "cancel", "speak:second"]
        );
        assert_eq!(session.state(), NarrationState::Speaking);
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let synth = RecordingSynth::default();
        let mut session = NarrationSession::new(synth.clone());
        session.speak("   ").unwrap();
        assert_eq!(session.state(), NarrationState::Idle);
        assert!(synth.spoken().is_empty());
    }

    #[test]
    fn test_finished_returns_to_idle_without_cancel() {
        let synth = RecordingSynth::default();
        let mut session = NarrationSession::new(synth.clone());
        session.speak("hello").unwrap();
        session.finished();
        assert_eq!(session.state(), NarrationState::Idle);
        session.speak("next").unwrap();
        assert_eq!(synth.spoken(), vec!["speak:hello", "speak:next"]);
    }

    #[test]
    fn test_stop_when_idle_is_a_no_op() {
        let synth = RecordingSynth::default();
        let mut session = NarrationSession::new(synth.clone());
        session.stop();
        assert!(synth.spoken().is_empty());
    }
}
