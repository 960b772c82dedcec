//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use readymate::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Found git.");
//! ui.error("Installer brew not found.");
//!
//! assert!(ui.has_success("git"));
//! assert!(ui.has_error("brew"));
//! ```

use std::collections::HashMap;

use crate::error::{ReadyMateError, Result};

use super::{OutputMode, Prompt, UserInterface};

/// Mock UI implementation for testing.
///
/// Unconfigured prompts answer with an empty line, which declines.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    /// Status errors and fatal errors alike.
    errors: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
    questions: Vec<String>,
    /// Make every prompt fail, like a closed stdin.
    fail_prompts: bool,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Make every prompt return an error.
    pub fn fail_prompts(&mut self) {
        self.fail_prompts = true;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Get the question text of every prompt shown.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn fatal(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());
        self.questions.push(prompt.question.clone());

        if self.fail_prompts {
            return Err(ReadyMateError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "mock prompt failure",
            )));
        }

        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_status_lines() {
        let mut ui = MockUI::new();
        ui.message("$ brew install git");
        ui.success("Found git.");
        ui.warning("Installation cancelled.");
        ui.error("Installer brew not found.");
        ui.fatal("Error: Config file not found");

        assert!(ui.has_message("brew install git"));
        assert!(ui.has_success("Found git."));
        assert!(ui.has_warning("cancelled"));
        assert!(ui.has_error("brew"));
        assert!(ui.has_error("Config file not found"));
        assert_eq!(ui.errors().len(), 2);
    }

    #[test]
    fn prompt_returns_configured_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_git", "y");

        let answer = ui.prompt(&Prompt::new("install_git", "q?")).unwrap();
        assert_eq!(answer, "y");
        assert_eq!(ui.prompts_shown(), &["install_git".to_string()]);
        assert_eq!(ui.questions(), &["q?".to_string()]);
    }

    #[test]
    fn unconfigured_prompt_answers_empty() {
        let mut ui = MockUI::new();
        assert_eq!(ui.prompt(&Prompt::new("k", "q?")).unwrap(), "");
    }

    #[test]
    fn failing_prompts_return_error() {
        let mut ui = MockUI::new();
        ui.fail_prompts();
        assert!(ui.prompt(&Prompt::new("k", "q?")).is_err());
        assert_eq!(ui.prompts_shown().len(), 1);
    }

    #[test]
    fn with_mode_sets_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
