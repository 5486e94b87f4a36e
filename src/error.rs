//! Error types for the `kamel` binary.

use kamel_settings::SettingsError;
use thiserror::Error;

/// Errors surfaced by kamel commands.
#[derive(Error, Debug)]
pub enum KamelError {
    /// Resolving, reading or writing the settings file failed.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type using `KamelError`.
pub type Result<T> = std::result::Result<T, KamelError>;
