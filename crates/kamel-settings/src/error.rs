//! Error types for `kamel-settings`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for settings resolution and persistence.
#[derive(Error, Debug)]
pub enum SettingsError {
    // === Resolution Errors ===
    /// `--folder` received a value outside `used|sub|home|env`.
    #[error("Invalid folder '{value}': must be one of used, sub, home, env")]
    InvalidFolder { value: String },

    /// A required environment variable was unset or empty.
    #[error("Environment variable {var} must be set when using --folder env")]
    MissingEnv { var: &'static str },

    /// The working directory could not be read.
    #[error("Unable to determine the current working directory")]
    CwdUnavailable,

    /// The user's home directory could not be determined.
    #[error("Unable to determine the home directory")]
    HomeDirUnavailable,

    // === File Errors ===
    /// The settings file exists but is not a flat YAML mapping of strings.
    #[error("Invalid settings file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type using `SettingsError`.
pub type Result<T> = std::result::Result<T, SettingsError>;
