//! `kamel` - Camel K command-line client library
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`error`] - Error types and handling
//! - [`logging`] - tracing subscriber setup
//!
//! Settings file resolution and persistence live in the `kamel-settings`
//! workspace crate.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod error;
pub mod logging;

pub use error::{KamelError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
