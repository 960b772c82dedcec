//! Shell and child process execution.

pub mod command;

pub use command::{run_inherited, run_shell_inherited, CommandResult};
