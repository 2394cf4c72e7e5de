use std::fmt;
use std::ops::Deref;

const DELIMITERS: [char; 2] = [' ', '\n'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    TooManyTokens { limit: usize, found: usize },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::TooManyTokens { limit, found } => {
                write!(f, "too many words: {} (limit is {})", found, limit)
            }
        }
    }
}

impl std::error::Error for TokenizeError {}

/// A command word followed by its arguments. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens(Vec<String>);

impl Tokens {
    /// Returns `None` for an empty word list.
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.is_empty() || words.iter().any(|w| w.is_empty()) {
            None
        } else {
            Some(Tokens(words))
        }
    }

    pub fn command(&self) -> &str {
        &self.0[0]
    }

    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Deref for Tokens {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

/// Splits lines into words on spaces and newlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    limit: Option<usize>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self { limit: None }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    pub fn tokenize(&self, line: &str) -> Result<Option<Tokens>, TokenizeError> {
        let words: Vec<String> = line
            .split(DELIMITERS)
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect();

        if let Some(limit) = self.limit {
            if words.len() > limit {
                return Err(TokenizeError::TooManyTokens {
                    limit,
                    found: words.len(),
                });
            }
        }

        Ok(Tokens::new(words))
    }
}

/// Tokenizes with no word limit.
pub fn tokenize(line: &str) -> Result<Option<Tokens>, TokenizeError> {
    Tokenizer::new().tokenize(line)
}
