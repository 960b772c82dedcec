//! Requirement probing and installation.
//!
//! # Modules
//!
//! - [`probe`] - PATH lookup answering "is this command available?"
//! - [`installer`] - Confirmation, invocation building, and installer spawning

pub mod installer;
pub mod probe;

pub use installer::{
    InstallRequest, Installer, Invocation, ProcessLauncher, SystemLauncher, ELEVATION_WRAPPER,
};
pub use probe::{CommandLookup, CommandProbe};
