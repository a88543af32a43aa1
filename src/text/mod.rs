pub mod token;
pub mod tokenizer;

pub use token::{ScriptClass, Token};
pub use tokenizer::{join_tokens, tokenize};
