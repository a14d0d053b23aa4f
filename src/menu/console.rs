//! Line-oriented operator console over any reader/writer pair.

use crate::errors::Result;
use std::io::{BufRead, Write};

/// Operator prompt and output, shared by every menu command.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input source and an output sink.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one line of text.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `label` without a newline and reads the answer.
    ///
    /// Returns `None` once input is exhausted. The line ending is stripped,
    /// other whitespace is kept.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written or the input read.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Gives the output sink back, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }
}
