//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use readymate::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("ready_mate_config.json");
//! fs::write(&path, r#"{"git": {"installer": "brew", "cmd": "install git"}}"#).unwrap();
//!
//! let config = load_config(&path).unwrap();
//! assert_eq!(config.names().collect::<Vec<_>>(), vec!["git"]);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config, DEFAULT_CONFIG_FILE};
pub use schema::{OsRule, ReadyMateConfig, RequirementDescriptor, SoftwareEntry};
pub use validator::{validate, validate_config, ValidationError};
