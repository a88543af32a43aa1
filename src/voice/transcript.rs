use lazy_static::lazy_static;

lazy_static! {
    /// Default modification keywords; a transcript containing any of these
    /// is a command, not dictation. Locale deployments pass their own list.
    pub static ref MODIFICATION_KEYWORDS: Vec<&'static str> = vec!["修改", "删除", "清除"];
}

/// Where a final transcript goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptRoute {
    /// Hand to the command handler (modification keyword present).
    Command(String),
    /// Append to the composed text.
    Append(String),
}

/// Route a final transcript: phrases containing a modification keyword go
/// to the command handler, everything else is dictation. Matching is
/// case-insensitive for scripts where case exists.
pub fn route_transcript(text: &str, keywords: &[&str]) -> TranscriptRoute {
    let lowered = text.to_lowercase();
    let lowered = lowered.trim();
    if keywords
        .iter()
        .any(|k| lowered.contains(k.to_lowercase().as_str()))
    {
        TranscriptRoute::Command(text.to_string())
    } else {
        TranscriptRoute::Append(text.to_string())
    }
}
