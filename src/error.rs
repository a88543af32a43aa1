use thiserror::Error;

/// Errors surfaced to the caller.
///
/// Locator and resolver ambiguity (empty text, out-of-range positions) is
/// never an error; those paths return `None` sentinels so narration can be
/// suppressed quietly. Only capability, recognition, clipboard and network
/// failures reach this type.
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("required capability unavailable: {0}")]
    UnsupportedCapability(String),

    #[error("speech recognition error: {0}")]
    Recognition(String),

    #[error("suggestion request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("draw a gesture first (at least 2 points required)")]
    EmptyGesture,

    #[error("no text to copy")]
    EmptyClipboard,

    #[error("clipboard error: {0}")]
    Clipboard(String),
}
