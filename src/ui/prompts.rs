//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{ReadyMateError, Result};

use super::Prompt;

/// Convert dialoguer errors to ReadyMateError.
fn map_dialoguer_err(e: dialoguer::Error) -> ReadyMateError {
    anyhow::Error::new(e)
        .context("Failed to read answer from terminal")
        .into()
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask a free-text question on the terminal.
///
/// An empty answer is allowed and returned as-is.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    Input::<String>::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)
}
