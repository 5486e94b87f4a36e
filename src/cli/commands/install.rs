//! Install command implementation.
//!
//! Only namespace selection is wired up here: the `--namespace` flag falls
//! back to the `default-namespace` setting written by `kamel config`, read
//! from wherever the settings file is discovered.

use std::io::Write;

use kamel_settings::{DEFAULT_NAMESPACE_KEY, ResolveContext, SettingsStore, discover_location};
use tracing::debug;

use crate::cli::InstallArgs;
use crate::error::Result;

/// Namespace used when neither the flag nor the settings name one.
pub const FALLBACK_NAMESPACE: &str = "default";

/// Execute the install command.
///
/// # Errors
///
/// Returns an error if the settings file exists but cannot be read.
pub fn execute<W: Write>(args: &InstallArgs, ctx: &ResolveContext, out: &mut W) -> Result<()> {
    let namespace = resolve_namespace(args.namespace.as_deref(), ctx)?;
    writeln!(out, "Target namespace: {namespace}")?;
    Ok(())
}

/// Pick the install namespace: explicit flag, then the configured default,
/// then [`FALLBACK_NAMESPACE`].
///
/// # Errors
///
/// Returns an error if the settings file exists but cannot be read.
pub fn resolve_namespace(flag: Option<&str>, ctx: &ResolveContext) -> Result<String> {
    if let Some(namespace) = flag {
        return Ok(namespace.to_string());
    }

    let store = SettingsStore::open(discover_location(ctx).path())?;
    let namespace = store
        .get(DEFAULT_NAMESPACE_KEY)
        .unwrap_or(FALLBACK_NAMESPACE)
        .to_string();
    debug!(namespace = %namespace, path = %store.path().display(), "Namespace from settings");
    Ok(namespace)
}
