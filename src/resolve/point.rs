use crate::text::token::{is_cjk, is_word_char};
use crate::text::ScriptClass;

/// Sentence terminators, fullwidth and ASCII.
fn is_terminator(c: char) -> bool {
    matches!(c, '。' | '！' | '？' | '.' | '!' | '?')
}

/// Character range `[start, end)` of the point-mode unit around `index`
/// within one line's characters.
///
/// The character's script class picks the expansion: word characters grow to
/// the whole word, a CJK ideograph picks up at most one CJK neighbor per
/// side, punctuation grows to the enclosing sentence fragment including its
/// trailing terminator run, and whitespace defers to the nearest
/// non-whitespace neighbor (left preferred). `None` when the line holds
/// nothing speakable.
pub fn point_range(chars: &[char], index: usize) -> Option<(usize, usize)> {
    if chars.is_empty() {
        return None;
    }
    if index >= chars.len() {
        // Caret at end of line or on the newline itself: treat like
        // whitespace and look for the nearest real character.
        return nearest_neighbor(chars, chars.len().saturating_sub(1));
    }

    match ScriptClass::of(chars[index]) {
        ScriptClass::Latin => Some(word_range(chars, index)),
        ScriptClass::Cjk => Some(cjk_cluster(chars, index)),
        ScriptClass::Punctuation => Some(sentence_fragment(chars, index)),
        ScriptClass::Whitespace => nearest_neighbor(chars, index),
    }
}

fn word_range(chars: &[char], index: usize) -> (usize, usize) {
    let mut start = index;
    let mut end = index;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    while end + 1 < chars.len() && is_word_char(chars[end + 1]) {
        end += 1;
    }
    (start, end + 1)
}

/// The ideograph itself plus at most one CJK neighbor on each side; 1-3
/// characters reads with more natural prosody than a lone syllable.
fn cjk_cluster(chars: &[char], index: usize) -> (usize, usize) {
    let mut start = index;
    let mut end = index;
    if start > 0 && is_cjk(chars[start - 1]) {
        start -= 1;
    }
    if end + 1 < chars.len() && is_cjk(chars[end + 1]) {
        end += 1;
    }
    (start, end + 1)
}

/// The enclosing sentence: back to the previous terminator, forward to the
/// next one, then through the whole terminator run, trimmed of surrounding
/// whitespace.
fn sentence_fragment(chars: &[char], index: usize) -> (usize, usize) {
    let mut start = index;
    let mut end = index;
    while start > 0 && !is_terminator(chars[start - 1]) {
        start -= 1;
    }
    while end + 1 < chars.len() && !is_terminator(chars[end + 1]) {
        end += 1;
    }
    while end + 1 < chars.len() && is_terminator(chars[end + 1]) {
        end += 1;
    }
    trim_range(chars, start, end + 1)
}

fn trim_range(chars: &[char], mut start: usize, mut end: usize) -> (usize, usize) {
    while start < end && chars[start].is_whitespace() {
        start += 1;
    }
    while end > start && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    (start, end)
}

/// Symmetric outward scan from a whitespace position, preferring the left
/// side, resolving whatever character is found first.
fn nearest_neighbor(chars: &[char], index: usize) -> Option<(usize, usize)> {
    let mut left = index as isize - 1;
    let mut right = index + 1;
    if !chars[index].is_whitespace() {
        return point_range(chars, index);
    }
    while left >= 0 || right < chars.len() {
        if left >= 0 && !chars[left as usize].is_whitespace() {
            return point_range(chars, left as usize);
        }
        if right < chars.len() && !chars[right].is_whitespace() {
            return point_range(chars, right);
        }
        left -= 1;
        right += 1;
    }
    None
}
