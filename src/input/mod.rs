mod line_source;
mod tokenizer;

pub use line_source::{Line, LineSource};
pub use tokenizer::{tokenize, TokenizeError, Tokenizer, Tokens};

use std::fmt;

#[derive(Debug)]
pub enum InputError {
    Io(std::io::Error),
    Tokenize(TokenizeError),
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::Io(e)
    }
}

impl From<TokenizeError> for InputError {
    fn from(e: TokenizeError) -> Self {
        InputError::Tokenize(e)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "IO error: {}", e),
            InputError::Tokenize(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InputError {}
