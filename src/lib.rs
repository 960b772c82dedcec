//! readymate - Make sure the commands a project depends on are installed.
//!
//! readymate reads a JSON file listing required commands, checks each one
//! against `PATH`, and installs the missing ones through the package
//! manager configured for the current operating system.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Config loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Host operating system identity
//! - [`requirements`] - PATH probing and installer invocation
//! - [`runner`] - Readiness run orchestration
//! - [`shell`] - Child process execution
//! - [`ui`] - Prompts and terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use readymate::config::parse_config;
//! use readymate::platform::Platform;
//!
//! let config = parse_config(
//!     r#"{"git": {"installer": "brew", "cmd": "install git"}}"#,
//!     Path::new("ready_mate_config.json"),
//! )
//! .unwrap();
//!
//! let git = config.get("git").unwrap();
//! assert_eq!(git.default_installer(), Some("brew"));
//! assert!(git.rule_for(&Platform::Linux).is_none());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{ReadyMateError, Result};
