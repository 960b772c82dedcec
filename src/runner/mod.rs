//! Readiness run orchestration.

pub mod check;

pub use check::{AbortReason, CheckRunner, RunOutcome};

use std::path::Path;

use crate::config::load_config;
use crate::error::Result;
use crate::platform::Platform;
use crate::requirements::{CommandProbe, Installer, SystemLauncher};
use crate::ui::UserInterface;

/// Load `config_path` and make sure everything it lists is installed.
///
/// Returns `Ok(false)` when the run aborted or an installation failed.
/// Errors are reserved for config problems.
pub fn run(config_path: &Path, skip_confirm: bool, ui: &mut dyn UserInterface) -> Result<bool> {
    let config = load_config(config_path)?;

    let platform = Platform::current();
    let probe = CommandProbe::from_env();
    let launcher = SystemLauncher;

    tracing::debug!(
        "Checking {} entries from {} on {}",
        config.len(),
        config_path.display(),
        platform
    );

    let installer = Installer::new(&platform, &launcher, skip_confirm);
    let outcome = CheckRunner::new(&platform, &probe, installer).run(&config, ui);

    tracing::debug!("Run finished: {}", outcome);
    Ok(outcome.is_success())
}
