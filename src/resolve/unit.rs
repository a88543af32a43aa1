/// The smallest piece of text chosen to be read aloud for one interaction.
///
/// Disposable: it has no identity beyond the narration request it feeds, and
/// any edit to the underlying text invalidates its range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakableUnit {
    pub text: String,
    /// Absolute character offset where the unit starts, inclusive.
    pub start: usize,
    /// Absolute character offset where the unit ends, exclusive.
    pub end: usize,
}
