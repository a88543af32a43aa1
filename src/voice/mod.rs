pub mod session;
pub mod transcript;

pub use session::{VoiceEvent, VoiceSession, VoiceState};
pub use transcript::{route_transcript, TranscriptRoute};
