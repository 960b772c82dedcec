//! Configuration file loading.
//!
//! The config is a single JSON file, read once per run. Parsing goes through
//! `serde_json::Value` first so entries keep document order and a malformed
//! entry can be reported by name.

use crate::config::schema::{ReadyMateConfig, RequirementDescriptor};
use crate::config::validator::validate;
use crate::error::{ReadyMateError, Result};
use std::fs;
use std::path::Path;

/// Config file name looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "ready_mate_config.json";

/// Load a config file without validating it.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the JSON is invalid.
/// Any other read failure is returned as `Other` naming the path.
pub fn load_config_file(path: &Path) -> Result<ReadyMateConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ReadyMateError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to read config file {}", path.display()))
                .into());
        }
    };

    parse_config(&content, path)
}

/// Parse JSON content into a config.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ReadyMateConfig> {
    let parse_error = |message: String| ReadyMateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    };

    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    let serde_json::Value::Object(map) = value else {
        return Err(parse_error(
            "top level must be an object keyed by software name".to_string(),
        ));
    };

    let mut config = ReadyMateConfig::default();
    for (name, raw) in map {
        let descriptor: RequirementDescriptor = serde_json::from_value(raw)
            .map_err(|e| parse_error(format!("entry '{}': {}", name, e)))?;
        config.insert(name, descriptor);
    }

    tracing::debug!(
        "Parsed {} requirement(s) from {}",
        config.len(),
        source_path.display()
    );

    Ok(config)
}

/// Load and validate the config at `path`.
///
/// # Errors
///
/// Returns `ConfigNotFound`, `ConfigParseError`, or `ConfigValidationError`.
pub fn load_config(path: &Path) -> Result<ReadyMateConfig> {
    let config = load_config_file(path)?;
    validate(&config)?;
    Ok(config)
}
