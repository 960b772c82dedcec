//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] when stdin or stdout is not a terminal
//! - [`MockUI`] for capturing interactions in tests
//!
//! # Example
//!
//! ```
//! use readymate::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("install_git", "y");
//!
//! let answer = ui.prompt(&Prompt::new("install_git", "Install git?")).unwrap();
//! assert_eq!(answer, "y");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ReadyTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain status line.
    fn message(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a warning line.
    fn warning(&mut self, msg: &str);

    /// Display an error status line (still on stdout).
    fn error(&mut self, msg: &str);

    /// Report a fatal error on stderr.
    fn fatal(&mut self, msg: &str);

    /// Ask a question and return the raw answer.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;
}

/// A confirmation question for the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used by mocks for lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    /// A prompt keyed by `key`.
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}
