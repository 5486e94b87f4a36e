//! Config command implementation.

use std::io::Write;

use kamel_settings::{
    DEFAULT_NAMESPACE_KEY, ResolveContext, SettingsStore, resolve_location,
};
use tracing::info;

use crate::cli::ConfigArgs;
use crate::error::Result;

/// Execute the config command.
///
/// Writes `--default-namespace` first, then lists if `--list` was given, so
/// both together show the updated file.
///
/// # Errors
///
/// Returns an error if the location cannot be resolved, or the settings
/// file cannot be read or written.
pub fn execute<W: Write>(args: &ConfigArgs, ctx: &ResolveContext, out: &mut W) -> Result<()> {
    let location = resolve_location(args.folder, ctx)?;
    let mut store = SettingsStore::open(location.path())?;

    if let Some(namespace) = &args.default_namespace {
        store.set(DEFAULT_NAMESPACE_KEY, namespace.as_str());
        store.save()?;
        info!(
            namespace = %namespace,
            path = %store.path().display(),
            "Default namespace updated"
        );
        writeln!(out, "Default namespace set to {namespace}")?;
    }

    if args.list {
        writeln!(
            out,
            "The configuration file is read from {}",
            store.path().display()
        )?;
        write_settings(&store, out)?;
    }

    Ok(())
}

fn write_settings<W: Write>(store: &SettingsStore, out: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "No settings")?;
        return Ok(());
    }
    for (key, value) in store.list() {
        writeln!(out, "{key}: {value}")?;
    }
    Ok(())
}
