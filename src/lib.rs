//! Core of a touch/voice text-input assistant for visually-impaired users.
//!
//! The crate turns low-level interaction events (a pointer position over an
//! input box, a caret move, a tap on free page text) into a "speakable unit",
//! the smallest piece of text worth reading aloud for that interaction, and
//! manages the session state machines around voice capture, gesture capture
//! and narration. All locator and tokenizer operations are synchronous pure
//! functions; the speech and suggestion collaborators are reached through
//! traits and one blocking HTTP client.

pub mod assistant;
pub mod compose;
pub mod error;
pub mod gesture;
pub mod locate;
pub mod narrate;
pub mod resolve;
pub mod text;
pub mod voice;

pub use assistant::{Assistant, VoiceOutcome};
pub use error::AssistError;
pub use locate::{locate, BoxMetrics, CharLocation};
pub use narrate::{NarrationSession, Orchestrator, SpeakOptions, SpeechRecognizer, SpeechSynth};
pub use resolve::{resolve_unit, ResolveMode, SpeakableUnit};
pub use text::{join_tokens, tokenize, ScriptClass, Token};
