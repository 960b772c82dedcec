//! Current platform identity.
//!
//! Config entries are keyed by OS identifier. The identifier is computed once
//! at startup and handed by reference to every component that needs it, so
//! the runner and the installer can never disagree about where they run.

use std::fmt;

/// Operating system identifier used for config lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
    /// Any other target, identified by its raw OS string (e.g. "freebsd").
    Other(String),
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a Rust target OS string to its config identifier.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOS,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Identifier as it appears in config files.
    pub fn as_str(&self) -> &str {
        match self {
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Other(raw) => raw,
        }
    }

    /// Privilege elevation only applies on Linux.
    pub fn is_linux(&self) -> bool {
        matches!(self, Platform::Linux)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
