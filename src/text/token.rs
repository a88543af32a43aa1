/// Script classification of a single character or token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    /// Alphanumeric runs plus `_` and `'` (not only Latin letters, but the
    /// class that reads as one spoken word).
    Latin,
    /// One CJK ideograph, including the compatibility ranges.
    Cjk,
    /// A single punctuation or symbol character.
    Punctuation,
    /// Never carried by an emitted token; whitespace runs are gaps.
    Whitespace,
}

impl ScriptClass {
    /// Classify one character. Applied left-to-right this gives the
    /// longest-match tokenization rules their per-character decision.
    pub fn of(c: char) -> ScriptClass {
        if c.is_whitespace() {
            ScriptClass::Whitespace
        } else if is_cjk(c) {
            ScriptClass::Cjk
        } else if is_word_char(c) {
            ScriptClass::Latin
        } else {
            ScriptClass::Punctuation
        }
    }
}

/// CJK Unified Ideographs, Extension A, and the compatibility block.
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}')
}

/// Word characters: letters, digits, underscore, apostrophe.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() && !is_cjk(c) || c == '_' || c == '\''
}

/// One token of a tokenization pass.
///
/// `start` and `end` are 0-based character offsets into the source line,
/// `end` exclusive. Tokens never overlap and are ordered by `start`; gaps
/// between consecutive tokens are the whitespace runs that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub script: ScriptClass,
}

impl Token {
    /// Whether `index` falls inside this token's source range.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Character distance from `index` to the nearer of the token's two
    /// endpoints, used to pick the closest token when a caret sits in a gap.
    pub fn distance_to(&self, index: usize) -> usize {
        let to_start = self.start.abs_diff(index);
        let to_last = (self.end - 1).abs_diff(index);
        to_start.min(to_last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_word_chars() {
        assert_eq!(ScriptClass::of('a'), ScriptClass::Latin);
        assert_eq!(ScriptClass::of('Z'), ScriptClass::Latin);
        assert_eq!(ScriptClass::of('7'), ScriptClass::Latin);
        assert_eq!(ScriptClass::of('_'), ScriptClass::Latin);
        assert_eq!(ScriptClass::of('\''), ScriptClass::Latin);
    }

    #[test]
    fn test_classify_cjk() {
        assert_eq!(ScriptClass::of('我'), ScriptClass::Cjk);
        assert_eq!(ScriptClass::of('愛'), ScriptClass::Cjk);
        // Extension A
        assert_eq!(ScriptClass::of('\u{3400}'), ScriptClass::Cjk);
        // Compatibility block
        assert_eq!(ScriptClass::of('\u{F900}'), ScriptClass::Cjk);
    }

    #[test]
    fn test_classify_punctuation_and_whitespace() {
        assert_eq!(ScriptClass::of('.'), ScriptClass::Punctuation);
        assert_eq!(ScriptClass::of('，'), ScriptClass::Punctuation);
        assert_eq!(ScriptClass::of(' '), ScriptClass::Whitespace);
        assert_eq!(ScriptClass::of('\n'), ScriptClass::Whitespace);
    }

    #[test]
    fn test_token_contains() {
        let token = Token {
            text: "world".to_string(),
            start: 6,
            end: 11,
            script: ScriptClass::Latin,
        };
        assert!(token.contains(6));
        assert!(token.contains(10));
        assert!(!token.contains(11));
        assert!(!token.contains(5));
    }

    #[test]
    fn test_token_distance() {
        let token = Token {
            text: "world".to_string(),
            start: 6,
            end: 11,
            script: ScriptClass::Latin,
        };
        assert_eq!(token.distance_to(4), 2);
        assert_eq!(token.distance_to(13), 3);
        assert_eq!(token.distance_to(8), 2);
    }
}
