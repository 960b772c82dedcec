//! Command probe: is a command resolvable on the search path?
//!
//! Lookup walks the `PATH` entries directly; nothing is spawned.
//! On Windows each candidate is also tried with every `PATHEXT` suffix.
//!
//! # Example
//!
//! ```no_run
//! use readymate::requirements::probe::{CommandLookup, CommandProbe};
//!
//! let probe = CommandProbe::from_env();
//! if probe.exists("git") {
//!     println!("git at {}", probe.resolve("git").unwrap().display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// Answers "is this command available?".
///
/// Implementations must never panic or error: any failure to resolve is
/// simply `false`.
pub trait CommandLookup {
    /// Whether `command` resolves to an executable.
    fn exists(&self, command: &str) -> bool;
}

/// PATH-based command lookup.
#[derive(Debug, Clone)]
pub struct CommandProbe {
    path_entries: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl CommandProbe {
    /// Probe using the process's `PATH` (and `PATHEXT` on Windows).
    pub fn from_env() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Probe a fixed list of directories.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self {
            path_entries,
            extensions: executable_extensions(),
        }
    }

    /// Resolve `command` to the first matching executable.
    ///
    /// A command containing a path separator is checked as given rather
    /// than searched for.
    pub fn resolve(&self, command: &str) -> Option<PathBuf> {
        let command = command.trim();
        if command.is_empty() || command.contains('\0') {
            return None;
        }

        if has_path_separator(command) {
            return self.with_extensions(Path::new(command));
        }

        resolve_tool_path(command, &self.path_entries, &self.extensions)
    }

    fn with_extensions(&self, base: &Path) -> Option<PathBuf> {
        self.extensions
            .iter()
            .map(|ext| append_extension(base, ext))
            .find(|candidate| candidate.is_file() && is_executable(candidate))
    }
}

impl CommandLookup for CommandProbe {
    fn exists(&self, command: &str) -> bool {
        let resolved = self.resolve(command);
        tracing::debug!("probe '{}' -> {:?}", command, resolved);
        resolved.is_some()
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Within one
/// directory, extensions are tried in order (the empty extension first).
pub fn resolve_tool_path(
    tool: &str,
    path_entries: &[PathBuf],
    extensions: &[String],
) -> Option<PathBuf> {
    for dir in path_entries {
        let base = dir.join(tool);
        for ext in extensions {
            let candidate = append_extension(&base, ext);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Suffixes to try when looking a command up.
#[cfg(windows)]
fn executable_extensions() -> Vec<String> {
    let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    std::iter::once(String::new())
        .chain(
            pathext
                .split(';')
                .filter(|e| !e.is_empty())
                .map(|e| e.to_string()),
        )
        .collect()
}

#[cfg(not(windows))]
fn executable_extensions() -> Vec<String> {
    vec![String::new()]
}

fn append_extension(base: &Path, ext: &str) -> PathBuf {
    if ext.is_empty() {
        base.to_path_buf()
    } else {
        let mut name = base.as_os_str().to_owned();
        name.push(ext);
        PathBuf::from(name)
    }
}

fn has_path_separator(command: &str) -> bool {
    command.contains('/') || (cfg!(windows) && command.contains('\\'))
}
