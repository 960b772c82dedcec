//! Readiness check orchestration.
//!
//! Walks the config in document order, skips software that is already on
//! PATH, and installs the rest. Two kinds of trouble are treated
//! differently:
//!
//! - an entry that cannot be installed here at all (unsupported OS, no
//!   installer configured, installer not on PATH) aborts the whole run
//!   immediately;
//! - an installer that runs but fails (or a declined prompt) is recorded
//!   and the run moves on to the next entry.

use std::fmt;

use crate::config::{ReadyMateConfig, SoftwareEntry};
use crate::platform::Platform;
use crate::requirements::{CommandLookup, InstallRequest, Installer};
use crate::ui::UserInterface;

/// Why a run stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The OS rule for this platform says `support: false`.
    Unsupported { os: String },
    /// No installer is configured for this OS, either in its rule or as
    /// the default.
    NoInstaller { os: String },
    /// The configured installer is not on PATH.
    InstallerNotFound { installer: String },
}

impl AbortReason {
    /// Status line reported for `software`.
    pub fn message(&self, software: &str) -> String {
        match self {
            AbortReason::Unsupported { os } => {
                format!("{} is not supported on {}.", software, os)
            }
            AbortReason::NoInstaller { os } => format!(
                "Auto installation of {} is not supported on {}.",
                software, os
            ),
            AbortReason::InstallerNotFound { installer } => {
                format!("Installer {} not found.", installer)
            }
        }
    }
}

/// Result of a readiness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every installation that was attempted succeeded.
    Ready,
    /// At least one installation failed or was declined.
    InstallFailed { failed: Vec<String> },
    /// The run stopped at `software` without processing later entries.
    Aborted {
        software: String,
        reason: AbortReason,
    },
}

impl RunOutcome {
    /// Overall pass/fail.
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Ready)
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Ready => write!(f, "ready"),
            RunOutcome::InstallFailed { failed } => {
                write!(f, "failed to install {}", failed.join(", "))
            }
            RunOutcome::Aborted { software, reason } => {
                write!(f, "aborted: {}", reason.message(software))
            }
        }
    }
}

/// What happened to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryStatus {
    Present,
    Installed,
    Failed,
}

/// Drives the probe and installer over a config.
pub struct CheckRunner<'a> {
    platform: &'a Platform,
    probe: &'a dyn CommandLookup,
    installer: Installer<'a>,
}

impl<'a> CheckRunner<'a> {
    /// Create a runner. `installer` must have been built for the same
    /// `platform`.
    pub fn new(
        platform: &'a Platform,
        probe: &'a dyn CommandLookup,
        installer: Installer<'a>,
    ) -> Self {
        Self {
            platform,
            probe,
            installer,
        }
    }

    /// Check every entry, installing what is missing.
    pub fn run(&self, config: &ReadyMateConfig, ui: &mut dyn UserInterface) -> RunOutcome {
        let mut failed = Vec::new();

        for entry in config.entries() {
            match self.check_entry(entry, ui) {
                Ok(EntryStatus::Present | EntryStatus::Installed) => {}
                Ok(EntryStatus::Failed) => failed.push(entry.name.clone()),
                Err(reason) => {
                    ui.error(&reason.message(&entry.name));
                    tracing::debug!("Run aborted at {}: {:?}", entry.name, reason);
                    return RunOutcome::Aborted {
                        software: entry.name.clone(),
                        reason,
                    };
                }
            }
        }

        self.report_missing(config, ui);

        if failed.is_empty() {
            ui.success("All software/commands are ready.");
            RunOutcome::Ready
        } else {
            tracing::debug!("Installation failed for: {}", failed.join(", "));
            RunOutcome::InstallFailed { failed }
        }
    }

    fn check_entry(
        &self,
        entry: &SoftwareEntry,
        ui: &mut dyn UserInterface,
    ) -> Result<EntryStatus, AbortReason> {
        if self.probe.exists(&entry.name) {
            ui.success(&format!("Found {}.", entry.name));
            return Ok(EntryStatus::Present);
        }

        let request = self.plan(entry)?;

        if !self.probe.exists(request.installer) {
            return Err(AbortReason::InstallerNotFound {
                installer: request.installer.to_string(),
            });
        }

        if self.installer.install(&request, ui) {
            Ok(EntryStatus::Installed)
        } else {
            Ok(EntryStatus::Failed)
        }
    }

    /// Pick the OS rule or the default installer for a missing entry.
    fn plan<'e>(&self, entry: &'e SoftwareEntry) -> Result<InstallRequest<'e>, AbortReason> {
        let descriptor = &entry.descriptor;

        if let Some(rule) = descriptor.rule_for(self.platform) {
            if !rule.support {
                return Err(AbortReason::Unsupported {
                    os: self.platform.to_string(),
                });
            }
            let installer = rule.installer.trim();
            if installer.is_empty() {
                return Err(AbortReason::NoInstaller {
                    os: self.platform.to_string(),
                });
            }
            return Ok(InstallRequest {
                software: &entry.name,
                installer,
                cmd: &rule.cmd,
                use_root: self.platform.is_linux() && rule.root,
            });
        }

        let Some(installer) = descriptor.default_installer() else {
            return Err(AbortReason::NoInstaller {
                os: self.platform.to_string(),
            });
        };

        Ok(InstallRequest {
            software: &entry.name,
            installer,
            cmd: descriptor.default_cmd(),
            use_root: false,
        })
    }

    /// Re-probe everything and report what is still missing.
    ///
    /// Purely informational: an installer can exit 0 without putting the
    /// command on PATH, and that does not change the outcome.
    fn report_missing(&self, config: &ReadyMateConfig, ui: &mut dyn UserInterface) {
        for name in config.names() {
            if !self.probe.exists(name) {
                ui.error(&format!("Find and install {} failed.", name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, OsRule, RequirementDescriptor};
    use crate::requirements::{Invocation, ProcessLauncher};
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::path::Path;

    /// Probe answering from a fixed set; installs can add to it.
    struct FakeProbe {
        present: RefCell<HashSet<String>>,
        asked: RefCell<Vec<String>>,
    }

    impl FakeProbe {
        fn with(present: &[&str]) -> Self {
            Self {
                present: RefCell::new(present.iter().map(|s| s.to_string()).collect()),
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandLookup for FakeProbe {
        fn exists(&self, command: &str) -> bool {
            self.asked.borrow_mut().push(command.to_string());
            self.present.borrow().contains(command)
        }
    }

    /// Launcher that records invocations and succeeds unless the program
    /// is listed as failing.
    struct FakeLauncher<'p> {
        failing: HashSet<String>,
        launched: RefCell<Vec<Invocation>>,
        installs_into: Option<&'p FakeProbe>,
    }

    impl<'p> FakeLauncher<'p> {
        fn ok() -> Self {
            Self {
                failing: HashSet::new(),
                launched: RefCell::new(Vec::new()),
                installs_into: None,
            }
        }

        fn failing(programs: &[&str]) -> Self {
            Self {
                failing: programs.iter().map(|s| s.to_string()).collect(),
                ..Self::ok()
            }
        }

        /// Successful installs make the last argument resolvable.
        fn installing_into(probe: &'p FakeProbe) -> Self {
            Self {
                installs_into: Some(probe),
                ..Self::ok()
            }
        }

        fn launched(&self) -> Vec<Invocation> {
            self.launched.borrow().clone()
        }
    }

    impl ProcessLauncher for FakeLauncher<'_> {
        fn launch(&self, invocation: &Invocation) -> bool {
            self.launched.borrow_mut().push(invocation.clone());
            let ok = !self.failing.contains(&invocation.program);
            if ok {
                if let (Some(probe), Some(last)) = (self.installs_into, invocation.args.last()) {
                    probe.present.borrow_mut().insert(last.clone());
                }
            }
            ok
        }
    }

    fn config(json: &str) -> ReadyMateConfig {
        parse_config(json, Path::new("test.json")).unwrap()
    }

    fn run_with(
        platform: &Platform,
        probe: &FakeProbe,
        launcher: &FakeLauncher<'_>,
        skip_confirm: bool,
        config: &ReadyMateConfig,
        ui: &mut MockUI,
    ) -> RunOutcome {
        let installer = Installer::new(platform, launcher, skip_confirm);
        CheckRunner::new(platform, probe, installer).run(config, ui)
    }

    #[test]
    fn present_software_is_never_installed() {
        let probe = FakeProbe::with(&["git", "brew"]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(r#"{"git": {"installer": "brew", "cmd": "install git"}}"#);

        let outcome = run_with(&Platform::MacOS, &probe, &launcher, false, &cfg, &mut ui);

        assert_eq!(outcome, RunOutcome::Ready);
        assert!(launcher.launched().is_empty());
        assert!(ui.prompts_shown().is_empty());
        assert!(ui.has_success("Found git."));
        assert!(ui.has_success("All software/commands are ready."));
    }

    #[test]
    fn confirmed_default_install_spawns_brew() {
        let probe = FakeProbe::with(&["brew"]);
        let launcher = FakeLauncher::installing_into(&probe);
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_git", "y");
        let cfg = config(r#"{"git": {"installer": "brew", "cmd": "install git"}}"#);

        let outcome = run_with(&Platform::MacOS, &probe, &launcher, false, &cfg, &mut ui);

        assert!(outcome.is_success());
        let launched = launcher.launched();
        assert_eq!(launched.len(), 1);
        assert_eq!(launched[0].program, "brew");
        assert_eq!(launched[0].args, vec!["install", "git"]);
        assert!(!launched[0].via_shell);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn unsupported_os_aborts_without_spawning() {
        let probe = FakeProbe::with(&[]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(r#"{"foo": {"macos": {"support": false}}}"#);

        let outcome = run_with(&Platform::MacOS, &probe, &launcher, false, &cfg, &mut ui);

        assert_eq!(
            outcome,
            RunOutcome::Aborted {
                software: "foo".to_string(),
                reason: AbortReason::Unsupported {
                    os: "macos".to_string()
                },
            }
        );
        assert!(!outcome.is_success());
        assert!(ui.has_error("foo is not supported on macos."));
        assert!(launcher.launched().is_empty());
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn unsupported_os_still_aborts_with_skip_confirm() {
        let probe = FakeProbe::with(&[]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(r#"{"foo": {"macos": {"support": false}}}"#);

        let outcome = run_with(&Platform::MacOS, &probe, &launcher, true, &cfg, &mut ui);

        assert!(!outcome.is_success());
        assert!(launcher.launched().is_empty());
    }

    #[test]
    fn abort_skips_later_entries_and_final_report() {
        let probe = FakeProbe::with(&["brew"]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(
            r#"{
                "foo": {"macos": {"support": false}},
                "git": {"installer": "brew", "cmd": "install git"}
            }"#,
        );

        let outcome = run_with(&Platform::MacOS, &probe, &launcher, true, &cfg, &mut ui);

        assert!(matches!(outcome, RunOutcome::Aborted { .. }));
        assert_eq!(*probe.asked.borrow(), vec!["foo".to_string()]);
        assert!(launcher.launched().is_empty());
        assert!(!ui.has_error("Find and install"));
        assert!(!ui.has_success("All software/commands are ready."));
    }

    #[test]
    fn missing_os_rule_installer_aborts() {
        let probe = FakeProbe::with(&[]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(
            r#"{"node": {"linux": {"support": true, "installer": "apt-get", "cmd": "install nodejs"}}}"#,
        );

        let outcome = run_with(&Platform::Linux, &probe, &launcher, true, &cfg, &mut ui);

        assert_eq!(
            outcome,
            RunOutcome::Aborted {
                software: "node".to_string(),
                reason: AbortReason::InstallerNotFound {
                    installer: "apt-get".to_string()
                },
            }
        );
        assert!(ui.has_error("Installer apt-get not found."));
        assert!(launcher.launched().is_empty());
    }

    #[test]
    fn missing_default_installer_aborts() {
        let probe = FakeProbe::with(&[]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(r#"{"git": {"installer": "brew", "cmd": "install git"}}"#);

        let outcome = run_with(&Platform::MacOS, &probe, &launcher, true, &cfg, &mut ui);

        assert!(matches!(
            outcome,
            RunOutcome::Aborted {
                reason: AbortReason::InstallerNotFound { .. },
                ..
            }
        ));
        assert!(ui.has_error("Installer brew not found."));
    }

    #[test]
    fn blank_default_installer_is_unsupported() {
        for json in [
            r#"{"git": {"installer": "  ", "cmd": "install git"}}"#,
            r#"{"git": {"cmd": "install git"}}"#,
            r#"{"git": {"windows": {"support": true, "installer": "choco", "cmd": "install git"}}}"#,
        ] {
            let probe = FakeProbe::with(&["brew", "choco"]);
            let launcher = FakeLauncher::ok();
            let mut ui = MockUI::new();

            let outcome =
                run_with(&Platform::MacOS, &probe, &launcher, true, &config(json), &mut ui);

            assert_eq!(
                outcome,
                RunOutcome::Aborted {
                    software: "git".to_string(),
                    reason: AbortReason::NoInstaller {
                        os: "macos".to_string()
                    },
                },
                "{}",
                json
            );
            assert!(ui.has_error("Auto installation of git is not supported on macos."));
            assert!(launcher.launched().is_empty());
        }
    }

    #[test]
    fn supported_rule_without_installer_aborts_only_when_missing() {
        let json = r#"{
            "git": {"linux": {"support": true, "cmd": "install git"}},
            "node": {"linux": {"support": true, "installer": " ", "cmd": "install nodejs"}}
        }"#;

        let probe = FakeProbe::with(&["git"]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let outcome = run_with(&Platform::Linux, &probe, &launcher, true, &config(json), &mut ui);

        assert!(ui.has_success("Found git."));
        assert_eq!(
            outcome,
            RunOutcome::Aborted {
                software: "node".to_string(),
                reason: AbortReason::NoInstaller {
                    os: "linux".to_string()
                },
            }
        );
        assert!(ui.has_error("Auto installation of node is not supported on linux."));
        assert!(launcher.launched().is_empty());

        // The same rules are never consulted on another OS.
        let probe = FakeProbe::with(&["git", "node"]);
        let mut ui = MockUI::new();
        let outcome = run_with(&Platform::MacOS, &probe, &launcher, true, &config(json), &mut ui);
        assert_eq!(outcome, RunOutcome::Ready);
    }

    #[test]
    fn os_rule_wins_over_default_installer() {
        let probe = FakeProbe::with(&["brew", "choco"]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(
            r#"{"jq": {"installer": "brew", "cmd": "install jq", "windows": {"support": true, "installer": "choco", "cmd": "install jq -y"}}}"#,
        );

        run_with(&Platform::Windows, &probe, &launcher, true, &cfg, &mut ui);

        let launched = launcher.launched();
        assert_eq!(launched[0].program, "choco");
        assert_eq!(launched[0].args, vec!["install", "jq", "-y"]);
    }

    #[test]
    fn linux_root_rule_is_elevated() {
        let probe = FakeProbe::with(&["apt-get"]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(
            r#"{"docker": {"linux": {"support": true, "installer": "apt-get", "cmd": "install -y docker.io", "root": true}}}"#,
        );

        run_with(&Platform::Linux, &probe, &launcher, true, &cfg, &mut ui);

        let launched = launcher.launched();
        assert!(launched[0].via_shell);
        assert_eq!(launched[0].command_line(), "sudo apt-get install -y docker.io");
    }

    #[test]
    fn root_flag_ignored_for_default_installer_and_other_os() {
        let probe = FakeProbe::with(&["brew"]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = ReadyMateConfig::from_entries(vec![
            (
                "git".to_string(),
                RequirementDescriptor::with_default("brew", "install git"),
            ),
            (
                "wget".to_string(),
                RequirementDescriptor::default()
                    .with_rule("macos", OsRule::supported("brew", "install wget").as_root()),
            ),
        ]);

        run_with(&Platform::MacOS, &probe, &launcher, true, &cfg, &mut ui);

        let launched = launcher.launched();
        assert_eq!(launched.len(), 2);
        assert!(launched.iter().all(|i| !i.via_shell && i.elevation.is_none()));
    }

    #[test]
    fn failed_install_is_recorded_and_run_continues() {
        let probe = FakeProbe::with(&["brew", "port"]);
        let launcher = FakeLauncher::failing(&["port"]);
        let mut ui = MockUI::new();
        let cfg = config(
            r#"{
                "zsh": {"installer": "port", "cmd": "install zsh"},
                "git": {"installer": "brew", "cmd": "install git"}
            }"#,
        );

        let outcome = run_with(&Platform::MacOS, &probe, &launcher, true, &cfg, &mut ui);

        assert_eq!(
            outcome,
            RunOutcome::InstallFailed {
                failed: vec!["zsh".to_string()]
            }
        );
        assert_eq!(launcher.launched().len(), 2);
        assert!(!ui.has_success("All software/commands are ready."));
    }

    #[test]
    fn declined_install_is_a_recorded_failure() {
        let probe = FakeProbe::with(&["brew"]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_git", "n");
        ui.set_prompt_response("install_wget", "y");
        let cfg = config(
            r#"{
                "git": {"installer": "brew", "cmd": "install git"},
                "wget": {"installer": "brew", "cmd": "install wget"}
            }"#,
        );

        let outcome = run_with(&Platform::MacOS, &probe, &launcher, false, &cfg, &mut ui);

        assert_eq!(
            outcome,
            RunOutcome::InstallFailed {
                failed: vec!["git".to_string()]
            }
        );
        assert_eq!(launcher.launched().len(), 1);
        assert!(ui.has_warning("Installation cancelled."));
    }

    #[test]
    fn final_report_lists_still_missing_without_changing_result() {
        // Installer exits 0 but the command never shows up on PATH.
        let probe = FakeProbe::with(&["brew"]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(r#"{"git": {"installer": "brew", "cmd": "install git"}}"#);

        let outcome = run_with(&Platform::MacOS, &probe, &launcher, true, &cfg, &mut ui);

        assert_eq!(outcome, RunOutcome::Ready);
        assert!(ui.has_error("Find and install git failed."));
        assert!(ui.has_success("All software/commands are ready."));
    }

    #[test]
    fn final_report_is_quiet_after_successful_installs() {
        let probe = FakeProbe::with(&["brew"]);
        let launcher = FakeLauncher::installing_into(&probe);
        let mut ui = MockUI::new();
        let cfg = config(
            r#"{
                "git": {"installer": "brew", "cmd": "install git"},
                "wget": {"installer": "brew", "cmd": "install wget"}
            }"#,
        );

        let outcome = run_with(&Platform::MacOS, &probe, &launcher, true, &cfg, &mut ui);

        assert_eq!(outcome, RunOutcome::Ready);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn entries_are_processed_in_document_order() {
        let probe = FakeProbe::with(&["brew"]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(
            r#"{
                "zsh": {"installer": "brew", "cmd": "install zsh"},
                "awk": {"installer": "brew", "cmd": "install awk"},
                "make": {"installer": "brew", "cmd": "install make"}
            }"#,
        );

        run_with(&Platform::MacOS, &probe, &launcher, true, &cfg, &mut ui);

        let order: Vec<String> = launcher
            .launched()
            .iter()
            .map(|i| i.args[1].clone())
            .collect();
        assert_eq!(order, vec!["zsh", "awk", "make"]);
    }

    #[test]
    fn other_platform_uses_raw_identifier() {
        let probe = FakeProbe::with(&[]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();
        let cfg = config(r#"{"git": {"freebsd": {"support": false}}}"#);

        let outcome = run_with(
            &Platform::Other("freebsd".into()),
            &probe,
            &launcher,
            true,
            &cfg,
            &mut ui,
        );

        assert!(ui.has_error("git is not supported on freebsd."));
        assert!(!outcome.is_success());
    }

    #[test]
    fn empty_config_is_ready() {
        let probe = FakeProbe::with(&[]);
        let launcher = FakeLauncher::ok();
        let mut ui = MockUI::new();

        let outcome = run_with(
            &Platform::Linux,
            &probe,
            &launcher,
            false,
            &ReadyMateConfig::default(),
            &mut ui,
        );

        assert_eq!(outcome, RunOutcome::Ready);
    }

    #[test]
    fn outcome_display() {
        assert_eq!(RunOutcome::Ready.to_string(), "ready");
        assert_eq!(
            RunOutcome::InstallFailed {
                failed: vec!["a".into(), "b".into()]
            }
            .to_string(),
            "failed to install a, b"
        );
        assert_eq!(
            RunOutcome::Aborted {
                software: "git".into(),
                reason: AbortReason::InstallerNotFound {
                    installer: "brew".into()
                },
            }
            .to_string(),
            "aborted: Installer brew not found."
        );
    }
}
