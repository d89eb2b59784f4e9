//! Yes/no confirmation prompts.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

/// Asks the learner to confirm a destructive or repeated action.
pub trait Confirm {
    /// Returns `true` only on an explicit yes.
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Prompt over arbitrary reader/writer handles (stdin/stdout in production).
pub struct TerminalConfirm<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalConfirm<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.writer, "{question} [y/N]: ").context("write prompt")?;
        self.writer.flush().context("flush prompt")?;

        let mut buffer = String::new();
        let read = self
            .reader
            .read_line(&mut buffer)
            .context("read confirmation")?;
        if read == 0 {
            // EOF: behave like an empty answer, but finish the prompt line.
            writeln!(self.writer).ok();
        }
        let answer = parse_answer(&buffer);
        debug!(answer, "confirmation answered");
        Ok(answer)
    }
}

fn parse_answer(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
