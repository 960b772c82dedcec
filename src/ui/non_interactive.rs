//! Line-based UI for piped or redirected stdio.

use std::io::{self, BufRead, Write};

use crate::error::Result;

use super::theme::ReadyTheme;
use super::{OutputMode, Prompt, UserInterface};

/// UI implementation used when stdin or stdout is not a terminal.
///
/// Status lines go to stdout without color. Prompts print the question and
/// read one line from the input stream, so answers can be piped in.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: ReadyTheme,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a UI reading answers from stdin.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_input(mode, Box::new(io::BufReader::new(io::stdin())))
    }

    /// Create a UI reading answers from `input` (for testing).
    pub fn with_input(mode: OutputMode, input: Box<dyn BufRead>) -> Self {
        Self {
            mode,
            theme: ReadyTheme::plain(),
            input,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        println!("{}", self.theme.format_error(msg));
    }

    fn fatal(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", prompt.question)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            // End of input: nobody will answer.
            println!();
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
