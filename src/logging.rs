//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing-subscriber`, leaving stdout to
//! command output. The level comes from `-v`/`-q`, and `KAMEL_LOG` (an
//! `EnvFilter` directive string) overrides it.

use tracing_subscriber::EnvFilter;

use crate::error::{KamelError, Result};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "KAMEL_LOG";

/// Map `-v` count and `-q` to a default filter level.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `filter` takes precedence over `KAMEL_LOG`, which takes precedence over
/// the level derived from `verbose`/`quiet`.
///
/// # Errors
///
/// Returns `Logging` if `filter` is invalid or a subscriber is already set.
pub fn init_logging(verbose: u8, quiet: bool, filter: Option<&str>) -> Result<()> {
    let env_filter = match filter {
        Some(directive) => {
            EnvFilter::try_new(directive).map_err(|e| KamelError::Logging(e.to_string()))?
        }
        None => EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| KamelError::Logging(e.to_string()))
}
