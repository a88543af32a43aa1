use super::token::{is_word_char, ScriptClass, Token};

/// Split one line into typed tokens, left-to-right, longest match per class.
///
/// Whitespace is skipped and never emitted; it survives only as gaps between
/// token ranges. Each CJK ideograph becomes its own single-character token so
/// the resolver can build natural 1-3 character clusters later. Word
/// characters run greedily into one token; anything else is a lone
/// punctuation token.
pub fn tokenize(line: &str) -> Vec<Token> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match ScriptClass::of(c) {
            ScriptClass::Whitespace => {
                i += 1;
            }
            ScriptClass::Cjk => {
                tokens.push(Token {
                    text: c.to_string(),
                    start: i,
                    end: i + 1,
                    script: ScriptClass::Cjk,
                });
                i += 1;
            }
            ScriptClass::Latin => {
                let start = i;
                i += 1;
                while i < chars.len() && is_word_char(chars[i]) {
                    i += 1;
                }
                tokens.push(Token {
                    text: chars[start..i].iter().collect(),
                    start,
                    end: i,
                    script: ScriptClass::Latin,
                });
            }
            ScriptClass::Punctuation => {
                tokens.push(Token {
                    text: c.to_string(),
                    start: i,
                    end: i + 1,
                    script: ScriptClass::Punctuation,
                });
                i += 1;
            }
        }
    }

    tokens
}

/// Join tokens back into display text.
///
/// A single space goes between two adjacent non-CJK word-like tokens only;
/// CJK and punctuation attach directly. This reproduces natural spacing for
/// mixed-script text: "hello world" round-trips, "我爱Rust" stays unspaced.
pub fn join_tokens(tokens: &[Token]) -> String {
    let mut result = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            let prev = &tokens[i - 1];
            let need_space = prev.script != ScriptClass::Cjk
                && token.script != ScriptClass::Cjk
                && prev.text.chars().last().map_or(false, is_word_char)
                && token.text.chars().next().map_or(false, is_word_char);
            if need_space {
                result.push(' ');
            }
        }
        result.push_str(&token.text);
    }
    result
}
