//! Configuration validation rules.
//!
//! Software names must not be blank. Per-OS rules are not checked here:
//! only the host's rule matters, and only when the software is missing,
//! so the runner judges it at that point.

use crate::config::schema::ReadyMateConfig;
use crate::error::{ReadyMateError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every violation rather than stopping at the first one.
pub fn validate_config(config: &ReadyMateConfig) -> Vec<ValidationError> {
    config
        .entries()
        .iter()
        .filter(|entry| entry.name.trim().is_empty())
        .map(|entry| ValidationError {
            rule: "blank-name".to_string(),
            message: format!("Software names must not be blank (got {:?})", entry.name),
        })
        .collect()
}

/// Validate, folding every violation into one `ConfigValidationError`.
pub fn validate(config: &ReadyMateConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(ReadyMateError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
