//! Operator confirmation before an interactive copy.
//!
//! The gate shows the full command line and reads one answer. Only an
//! answer starting with `y` or `Y` approves; anything else, including an
//! empty line or EOF, declines.

use std::io::{self, BufRead, Write};

/// Decides whether a rendered command may run.
pub trait Confirm {
    fn confirm(&mut self, command_line: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, command_line: &str) -> bool {
        self(command_line)
    }
}

/// Prompts on the process's own stdout and reads the answer from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, command_line: &str) -> bool {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        ask(&mut input, &mut output, command_line)
    }
}

/// Prompts on arbitrary streams.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream, e.g. to inspect what was shown.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, command_line: &str) -> bool {
        ask(&mut self.input, &mut self.output, command_line)
    }
}

/// Whether an answer counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, command_line: &str) -> bool {
    // A broken terminal means nobody approved.
    if write!(output, "{}\nProceed? [y/N] ", command_line).is_err() || output.flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_affirmative(&answer),
    }
}
