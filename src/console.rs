use std::fmt::Display;
use std::io::{self, Write};

use crate::highlight::Highlighter;

/// Where the session writes: prompt and usage text to `out`, diagnostics to `err`.
pub struct Console {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    highlighter: Highlighter,
}

impl Console {
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>, highlighter: Highlighter) -> Self {
        Self {
            out,
            err,
            highlighter,
        }
    }

    pub fn stdio(highlighter: Highlighter) -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()), highlighter)
    }

    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    // Diagnostics are best effort: a closed stream must not take the session down.

    pub fn usage(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
        let _ = self.out.flush();
    }

    pub fn error(&mut self, message: impl Display) {
        let text = self.highlighter.error(&message.to_string());
        let _ = writeln!(self.err, "{}", text);
    }

    pub fn warning(&mut self, message: impl Display) {
        let text = self.highlighter.warning(&message.to_string());
        let _ = writeln!(self.err, "{}", text);
    }
}


#[cfg(test)]
mod tests {
    use super::capture;

    #[test]
    fn test_streams_are_separate() -> std::io::Result<()> {
        let (mut console, out, err) = capture::console();
        console.prompt("? ")?;
        console.usage("Expected usage: cd <path>");
        console.error("Error forking.");
        assert_eq!(out.contents(), "? Expected usage: cd <path>\n");
        assert_eq!(err.contents(), "Error forking.\n");
        Ok(())
    }
}
