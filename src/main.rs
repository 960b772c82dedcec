//! readymate CLI entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use readymate::cli::Cli;
use readymate::runner;
use readymate::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so they never mix with the status lines.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("readymate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("readymate=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("readymate starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    // Prompts need a keyboard; piped stdin gets the line-based UI.
    let is_interactive = std::io::stdin().is_terminal();
    let mut ui = create_ui(is_interactive, output_mode);

    match runner::run(&cli.config_file, cli.yes, ui.as_mut()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            ui.fatal(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
