//! ANSI styling for learner-facing console output.
//!
//! Color is applied only when stdout is a terminal and `NO_COLOR` is unset,
//! so piped output and tests see plain text.

use std::io::{IsTerminal, Write};

use anyhow::{Context, Result};

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
}

/// Foreground colors used by the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => codes::RED,
            Color::Green => codes::GREEN,
            Color::Yellow => codes::YELLOW,
            Color::Blue => codes::BLUE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    /// Never emit escape codes.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Always emit escape codes.
    pub fn ansi() -> Self {
        Self { enabled: true }
    }

    /// Detect from the environment: terminal stdout and no `NO_COLOR`.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            enabled: !no_color && std::io::stdout().is_terminal(),
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        self.wrap(text, color.code())
    }

    pub fn bold(&self, text: &str) -> String {
        self.wrap(text, codes::BOLD)
    }

    fn wrap(&self, text: &str, code: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.lines()
            .map(|line| format!("{code}{line}{}", codes::RESET))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Learner-facing output sink with styling applied per line.
pub struct Console<W> {
    out: W,
    styler: Styler,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, styler: Styler) -> Self {
        Self { out, styler }
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").context("write output")
    }

    pub fn colored(&mut self, text: &str, color: Color) -> Result<()> {
        let painted = self.styler.paint(text, color);
        self.line(&painted)
    }

    pub fn bold(&mut self, text: &str) -> Result<()> {
        let painted = self.styler.bold(text);
        self.line(&painted)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("flush output")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
