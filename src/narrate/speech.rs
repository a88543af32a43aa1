use crate::error::AssistError;

/// Delivery parameters for one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakOptions {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Language/voice preference, e.g. "zh-CN"; the synthesis collaborator
    /// picks the closest available voice.
    pub voice_hint: Option<String>,
}

impl Default for SpeakOptions {
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.0,
            volume: 1.0,
            voice_hint: None,
        }
    }
}

/// Speech-synthesis collaborator.
///
/// Runs asynchronously relative to the core; the core's only obligations are
/// to cancel before speaking again and to report the `Idle` transition when
/// the collaborator signals the utterance ended.
pub trait SpeechSynth {
    fn speak(&mut self, text: &str, options: &SpeakOptions) -> Result<(), AssistError>;
    fn cancel(&mut self);
}

/// Speech-recognition collaborator: push-to-talk start/stop. Transcripts
/// arrive as [`crate::voice::VoiceEvent`]s, not through this trait.
pub trait SpeechRecognizer {
    fn start(&mut self) -> Result<(), AssistError>;
    fn stop(&mut self);
}
