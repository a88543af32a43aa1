use log::debug;

use crate::compose::Composer;
use crate::error::AssistError;
use crate::gesture::{GestureSession, SuggestionClient};
use crate::narrate::{NarrationSession, Orchestrator, SpeechRecognizer, SpeechSynth};
use crate::voice::{TranscriptRoute, VoiceSession, VoiceState};

/// What a routed voice transcript did to the composed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceOutcome {
    Appended(String),
    Cleared,
    DeletedWord(String),
    /// A modification command that changes nothing yet ("修改" without a
    /// concrete edit), or a delete on an empty buffer.
    Acknowledged(String),
}

/// Root of the assistant: composed text plus the three session state
/// machines, wired the way the page wires them.
///
/// Everything here is synchronous; the speech collaborator behind the
/// orchestrator is the only asynchronous edge.
pub struct Assistant<S: SpeechSynth> {
    pub composer: Composer,
    pub voice: VoiceSession,
    pub gesture: GestureSession,
    orchestrator: Orchestrator<S>,
}

impl<S: SpeechSynth> Assistant<S> {
    pub fn new(synth: S) -> Self {
        Self {
            composer: Composer::new(),
            voice: VoiceSession::new(),
            gesture: GestureSession::new(),
            orchestrator: Orchestrator::new(NarrationSession::new(synth)),
        }
    }

    pub fn orchestrator(&mut self) -> &mut Orchestrator<S> {
        &mut self.orchestrator
    }

    /// Hold-to-record press. Starting while already recording is a no-op;
    /// an engine that cannot start surfaces `UnsupportedCapability` and the
    /// UI disables the control instead of crashing.
    pub fn press_record(
        &mut self,
        recognizer: &mut dyn SpeechRecognizer,
    ) -> Result<(), AssistError> {
        if self.voice.state() == VoiceState::Recording {
            return Ok(());
        }
        recognizer.start()
    }

    /// Hold-to-record release; the engine answers with `Ended`.
    pub fn release_record(&mut self, recognizer: &mut dyn SpeechRecognizer) {
        recognizer.stop();
    }

    /// Feed one recognition event through the voice session and apply the
    /// routing decision to the composed text.
    pub fn handle_voice_event(
        &mut self,
        event: crate::voice::VoiceEvent,
    ) -> Result<Option<VoiceOutcome>, AssistError> {
        let Some(route) = self.voice.handle(event)? else {
            return Ok(None);
        };
        Ok(Some(match route {
            TranscriptRoute::Append(text) => {
                self.composer.append(&text);
                VoiceOutcome::Appended(text)
            }
            TranscriptRoute::Command(command) => self.apply_command(&command),
        }))
    }

    /// Execute a modification command. `清除` clears the buffer, `删除`
    /// drops the last word; anything else (e.g. `修改` without a concrete
    /// edit) is acknowledged so the user hears the command was understood.
    pub fn apply_command(&mut self, command: &str) -> VoiceOutcome {
        debug!("modification command: {}", command);
        if command.contains("清除") {
            self.composer.clear();
            VoiceOutcome::Cleared
        } else if command.contains("删除") {
            match self.composer.delete_last_word() {
                Some(word) => VoiceOutcome::DeletedWord(word),
                None => VoiceOutcome::Acknowledged(command.to_string()),
            }
        } else {
            VoiceOutcome::Acknowledged(command.to_string())
        }
    }

    /// Submit the captured gesture: validated locally (Scenario E), then
    /// one blocking request. The caller keeps submissions serialized, one
    /// in flight at a time.
    pub fn submit_gesture(
        &self,
        client: &SuggestionClient,
        canvas_width: f32,
        canvas_height: f32,
    ) -> Result<Vec<String>, AssistError> {
        let request = self.gesture.submission(canvas_width, canvas_height)?;
        client.fetch(&request)
    }

    pub fn select_suggestion(&mut self, suggestion: &str) {
        self.composer.select_suggestion(suggestion);
    }

    /// Read the whole composed text aloud; returns false when there is
    /// nothing to read.
    pub fn read_final(&mut self) -> Result<bool, AssistError> {
        if self.composer.is_empty() {
            return Ok(false);
        }
        let text = self.composer.final_text().to_string();
        self.orchestrator.narration().speak(&text)?;
        Ok(true)
    }

    pub fn copy_final(&self) -> Result<(), AssistError> {
        self.composer.copy_to_clipboard()
    }

    /// Reset every session: composed text, gesture points, and any
    /// in-flight narration.
    pub fn clear_all(&mut self) {
        self.composer.clear();
        self.gesture.clear();
        self.orchestrator.narration().stop();
    }
}
