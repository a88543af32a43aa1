pub mod orchestrator;
pub mod session;
pub mod speech;

pub use orchestrator::{Orchestrator, PageTarget};
pub use session::{NarrationSession, NarrationState};
pub use speech::{SpeakOptions, SpeechRecognizer, SpeechSynth};
