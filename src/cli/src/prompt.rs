//! Line-based operator prompts.

use faucet_core::{CoreError, Prompter};
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Writes each question to `output` and reads one line of `input` as the answer.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Creates a prompter over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Creates a prompter that reads answers from `input` and writes questions to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, CoreError> {
        self.output
            .write_all(question.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| CoreError::Prompt(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| CoreError::Prompt(e.to_string()))?;
        if read == 0 {
            return Err(CoreError::Prompt("input closed".to_string()));
        }

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}
