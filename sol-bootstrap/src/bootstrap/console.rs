//! Terminal interaction: printed lines, prompts and pacing pauses

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// Line-oriented console over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
    pause_unit: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `pause_unit` is the length of a one-step pause; zero disables pacing
    pub fn new(input: R, output: W, pause_unit: Duration) -> Self {
        Self {
            input,
            output,
            pause_unit,
        }
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to console")?;
        self.output.flush().context("Failed to flush console")
    }

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// The trailing line ending is stripped. Reaching end of input is an error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").context("Failed to write to console")?;
        self.output.flush().context("Failed to flush console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            anyhow::bail!("Unexpected end of input after prompt: {}", prompt.trim_end());
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Sleep for `steps` pause units
    pub fn pause(&self, steps: u32) {
        let duration = self.pause_unit * steps;
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// First character of an answer, lower-cased
pub fn first_char_lowercase(answer: &str) -> Option<String> {
    answer.chars().next().map(|c| c.to_lowercase().collect())
}
