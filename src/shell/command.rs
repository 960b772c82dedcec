//! Child process execution with inherited stdio.
//!
//! Installers are interactive (password prompts, progress bars), so every
//! child shares the parent's stdin, stdout and stderr and nothing is captured.

use crate::error::{ReadyMateError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running a child process.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandResult {
    /// Whether the child exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run `program` directly with `args`, no shell involved.
///
/// # Errors
///
/// Returns `CommandSpawnFailed` if the process could not be started.
pub fn run_inherited(program: &str, args: &[String]) -> Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    wait_inherited(cmd, &display_line(program, args))
}

/// Run a full command line through the platform shell.
///
/// # Errors
///
/// Returns `CommandSpawnFailed` if the shell could not be started.
pub fn run_shell_inherited(command_line: &str) -> Result<CommandResult> {
    let shell = detect_shell();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag()).arg(command_line);
    wait_inherited(cmd, command_line)
}

fn wait_inherited(mut cmd: Command, shown: &str) -> Result<CommandResult> {
    let start = Instant::now();

    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = cmd
        .status()
        .map_err(|e| ReadyMateError::CommandSpawnFailed {
            command: shown.to_string(),
            message: e.to_string(),
        })?;

    let result = CommandResult {
        exit_code: status.code(),
        duration: start.elapsed(),
    };

    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        shown,
        result.exit_code,
        result.duration
    );

    Ok(result)
}

fn display_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass a command line to the shell (no login, no rc files).
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
