use inksac::prelude::*;
use std::io::{self, IsTerminal};

/// Colours diagnostics when the terminal supports it.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::detect()
    }
}

impl Highlighter {
    pub fn detect() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Colour only when stderr is a terminal that supports it.
    pub fn for_stderr() -> Self {
        Self::for_terminal(io::stderr().is_terminal())
    }

    pub fn for_terminal(is_terminal: bool) -> Self {
        if is_terminal {
            Self::detect()
        } else {
            Self::plain()
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn error(&self, message: &str) -> String {
        if self.is_plain() {
            return message.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        message.style(error_style).to_string()
    }

    pub fn warning(&self, message: &str) -> String {
        if self.is_plain() {
            return message.to_string();
        }

        let warning_style = Style::builder()
            .foreground(Color::Yellow)
            .build();

        message.style(warning_style).to_string()
    }
}
