use log::{debug, warn};

use super::transcript::{route_transcript, TranscriptRoute, MODIFICATION_KEYWORDS};
use crate::error::AssistError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Idle,
    Recording,
}

/// Events from the speech-recognition collaborator, fed in the order the
/// engine emits them. Interim transcripts are display-only and produce no
/// routing decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEvent {
    Started,
    Interim(String),
    Final(String),
    Error(String),
    Ended,
}

/// Voice capture session state machine.
///
/// Owns the `Idle`/`Recording` flag that used to be a global boolean;
/// transitions happen only through [`VoiceSession::handle`]. An engine error
/// resets the session to `Idle` so the UI can recover, and surfaces as
/// [`AssistError::Recognition`].
pub struct VoiceSession {
    state: VoiceState,
    keywords: Vec<String>,
}

impl VoiceSession {
    pub fn new() -> Self {
        Self {
            state: VoiceState::Idle,
            keywords: MODIFICATION_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn with_keywords(keywords: Vec<String>) -> Self {
        Self {
            state: VoiceState::Idle,
            keywords,
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    /// Apply one recognition event. Only a final transcript yields a
    /// routing decision.
    pub fn handle(&mut self, event: VoiceEvent) -> Result<Option<TranscriptRoute>, AssistError> {
        match event {
            VoiceEvent::Started => {
                self.state = VoiceState::Recording;
                Ok(None)
            }
            VoiceEvent::Interim(text) => {
                debug!("interim transcript: {}", text);
                Ok(None)
            }
            VoiceEvent::Final(text) => {
                let refs: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
                Ok(Some(route_transcript(&text, &refs)))
            }
            VoiceEvent::Error(message) => {
                warn!("recognition error: {}", message);
                self.state = VoiceState::Idle;
                Err(AssistError::Recognition(message))
            }
            VoiceEvent::Ended => {
                self.state = VoiceState::Idle;
                Ok(None)
            }
        }
    }
}

impl Default for VoiceSession {
    fn default() -> Self {
        Self::new()
    }
}
