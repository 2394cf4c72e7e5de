use std::io::BufRead;

use super::tokenizer::{Tokenizer, Tokens};
use super::InputError;

#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    EndOfInput,
    Blank,
    Command(Tokens),
}

/// Pulls tokenized commands out of a line-oriented stream.
pub struct LineSource<R> {
    reader: R,
    tokenizer: Tokenizer,
    buffer: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R, tokenizer: Tokenizer) -> Self {
        Self {
            reader,
            tokenizer,
            buffer: Vec::new(),
            line_number: 0,
        }
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn next_line(&mut self) -> Result<Line, InputError> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(Line::EndOfInput);
        }
        self.line_number += 1;

        let text = String::from_utf8_lossy(&self.buffer);
        match self.tokenizer.tokenize(&text)? {
            Some(tokens) => Ok(Line::Command(tokens)),
            None => Ok(Line::Blank),
        }
    }
}
