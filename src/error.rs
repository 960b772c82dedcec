//! Error types for readymate operations.
//!
//! This module defines [`ReadyMateError`], the error type for everything that
//! stops a run before any installation work begins, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems are errors: the CLI prints them and exits 1
//! - Install outcomes (unsupported, declined, nonzero exit) are not errors;
//!   they flow through [`RunOutcome`](crate::runner::RunOutcome)
//! - Use `anyhow::Error` (via `ReadyMateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for readymate operations.
#[derive(Debug, Error)]
pub enum ReadyMateError {
    /// Configuration file not found at expected location.
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Invalid config file {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but breaks a schema rule.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An installer process could not be started at all.
    #[error("Failed to start '{command}': {message}")]
    CommandSpawnFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for readymate operations.
pub type Result<T> = std::result::Result<T, ReadyMateError>;
