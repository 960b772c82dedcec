//! Installer invocation.
//!
//! Confirms with the user, builds the process [`Invocation`] for a package
//! manager, and runs it through a [`ProcessLauncher`]. Installation failure
//! is an ordinary outcome: every path returns `bool`, nothing here errors.

use crate::platform::Platform;
use crate::shell::{run_inherited, run_shell_inherited};
use crate::ui::{Prompt, UserInterface};

/// Command that wraps an installer needing elevated privileges.
pub const ELEVATION_WRAPPER: &str = "sudo";

/// One software install to attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallRequest<'a> {
    /// Software being installed (used in the confirmation question).
    pub software: &'a str,
    /// Package manager command (e.g., "brew").
    pub installer: &'a str,
    /// Whitespace-separated arguments for the installer.
    pub cmd: &'a str,
    /// Whether the caller asked for elevated privileges.
    pub use_root: bool,
}

/// A fully resolved child process description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Installer binary.
    pub program: String,
    /// Arguments, empty tokens removed.
    pub args: Vec<String>,
    /// Privilege wrapper prefixed to the program, if any.
    pub elevation: Option<String>,
    /// Whether the command line goes through the shell.
    pub via_shell: bool,
}

impl Invocation {
    /// Build the invocation for `installer cmd` on `platform`.
    ///
    /// Elevation only happens on Linux with `use_root`; the wrapped command
    /// is then run through the shell so the wrapper itself gets resolved.
    pub fn build(installer: &str, cmd: &str, platform: &Platform, use_root: bool) -> Self {
        let elevated = platform.is_linux() && use_root;
        Self {
            program: installer.to_string(),
            args: split_args(cmd),
            elevation: elevated.then(|| ELEVATION_WRAPPER.to_string()),
            via_shell: elevated,
        }
    }

    /// The command line as a user would type it.
    pub fn command_line(&self) -> String {
        self.elevation
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.program.as_str()))
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split an argument string on whitespace, discarding empty tokens.
pub fn split_args(cmd: &str) -> Vec<String> {
    cmd.split_whitespace().map(str::to_string).collect()
}

/// Spawns an invocation and reports whether it exited with code 0.
pub trait ProcessLauncher {
    /// Run the invocation to completion with inherited stdio.
    fn launch(&self, invocation: &Invocation) -> bool;
}

/// Launcher that spawns real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, invocation: &Invocation) -> bool {
        let result = if invocation.via_shell {
            run_shell_inherited(&invocation.command_line())
        } else {
            run_inherited(&invocation.program, &invocation.args)
        };

        match result {
            Ok(result) => {
                if !result.success() {
                    tracing::warn!(
                        "'{}' exited with {}",
                        invocation.command_line(),
                        result
                            .exit_code
                            .map(|c| format!("code {}", c))
                            .unwrap_or_else(|| "a signal".to_string())
                    );
                }
                result.success()
            }
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }
}

/// The question asked before installing.
pub fn confirmation_question(software: &str, installer: &str) -> String {
    format!(
        "Do you want to install {} using {}? (y/N)",
        software, installer
    )
}

/// Only a lone `y`, in either case and ignoring surrounding whitespace, agrees.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Runs package managers on behalf of the runner.
pub struct Installer<'a> {
    platform: &'a Platform,
    launcher: &'a dyn ProcessLauncher,
    skip_confirm: bool,
}

impl<'a> Installer<'a> {
    /// Create an installer for one run.
    pub fn new(platform: &'a Platform, launcher: &'a dyn ProcessLauncher, skip_confirm: bool) -> Self {
        Self {
            platform,
            launcher,
            skip_confirm,
        }
    }

    /// Install one piece of software.
    ///
    /// Returns `false` without spawning anything if the user declines.
    /// Otherwise returns `true` iff the installer exits with code 0.
    pub fn install(&self, request: &InstallRequest<'_>, ui: &mut dyn UserInterface) -> bool {
        if !self.skip_confirm && !self.confirm(request, ui) {
            ui.warning("Installation cancelled.");
            return false;
        }

        let invocation =
            Invocation::build(request.installer, request.cmd, self.platform, request.use_root);

        tracing::debug!(
            "Installing {} via '{}' (shell: {})",
            request.software,
            invocation.command_line(),
            invocation.via_shell
        );

        if ui.output_mode().shows_commands() {
            ui.message(&format!("$ {}", invocation.command_line()));
        }

        self.launcher.launch(&invocation)
    }

    fn confirm(&self, request: &InstallRequest<'_>, ui: &mut dyn UserInterface) -> bool {
        let prompt = Prompt::new(
            &format!("install_{}", request.software),
            &confirmation_question(request.software, request.installer),
        );

        match ui.prompt(&prompt) {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                tracing::debug!("Confirmation for {} failed: {}", request.software, e);
                false
            }
        }
    }
}
