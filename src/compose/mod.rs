use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::AssistError;

/// The text being composed across voice dictation and gesture suggestions.
///
/// Every accepted phrase or suggestion lands here with a trailing space;
/// `final_text` is the trimmed view handed to narration and the clipboard.
/// Nothing persists beyond the session.
pub struct Composer {
    current: String,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            current: String::new(),
        }
    }

    pub fn append(&mut self, text: &str) {
        self.current.push_str(text);
        self.current.push(' ');
    }

    /// Accepting a suggestion appends it the same way dictation does.
    pub fn select_suggestion(&mut self, suggestion: &str) {
        self.append(suggestion);
    }

    pub fn final_text(&self) -> &str {
        self.current.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.final_text().is_empty()
    }

    pub fn clear(&mut self) {
        self.current.clear();
    }

    /// Drop the last word of the buffer, returning it. Word boundaries are
    /// unicode-aware, so a trailing CJK ideograph counts as one word.
    pub fn delete_last_word(&mut self) -> Option<String> {
        let trimmed_len = self.current.trim_end().len();
        self.current.truncate(trimmed_len);

        let (start, word) = self
            .current
            .split_word_bound_indices()
            .filter(|(_, w)| !w.trim().is_empty())
            .last()?;
        let deleted = word.to_string();
        self.current.truncate(start);
        debug!("deleted last word: {}", deleted);
        Some(deleted)
    }

    /// Copy the final text to the system clipboard; empty text is an error
    /// the UI turns into "nothing to copy".
    pub fn copy_to_clipboard(&self) -> Result<(), AssistError> {
        if self.is_empty() {
            return Err(AssistError::EmptyClipboard);
        }
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| AssistError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(self.final_text().to_string())
            .map_err(|e| AssistError::Clipboard(e.to_string()))
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_adds_trailing_space_between_phrases() {
        let mut composer = Composer::new();
        composer.append("buy some");
        composer.append("milk");
        assert_eq!(composer.final_text(), "buy some milk");
    }

    #[test]
    fn test_suggestion_appends_like_dictation() {
        let mut composer = Composer::new();
        composer.append("I want");
        composer.select_suggestion("coffee");
        assert_eq!(composer.final_text(), "I want coffee");
    }

    #[test]
    fn test_final_text_trims() {
        let mut composer = Composer::new();
        composer.append("hello");
        assert_eq!(composer.final_text(), "hello");
        assert!(!composer.is_empty());
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut composer = Composer::new();
        composer.append("something");
        composer.clear();
        assert!(composer.is_empty());
    }

    #[test]
    fn test_delete_last_word() {
        let mut composer = Composer::new();
        composer.append("buy some milk");
        assert_eq!(composer.delete_last_word(), Some("milk".to_string()));
        assert_eq!(composer.final_text(), "buy some");
    }

    #[test]
    fn test_delete_last_word_cjk() {
        let mut composer = Composer::new();
        composer.append("喝咖啡");
        let deleted = composer.delete_last_word().unwrap();
        assert!(!deleted.is_empty());
        assert!(composer.final_text().len() < "喝咖啡".len());
    }

    #[test]
    fn test_delete_on_empty_buffer_is_none() {
        let mut composer = Composer::new();
        assert_eq!(composer.delete_last_word(), None);
    }

    #[test]
    fn test_copy_empty_buffer_is_error() {
        let composer = Composer::new();
        assert!(matches!(
            composer.copy_to_clipboard(),
            Err(AssistError::EmptyClipboard)
        ));
    }
}
