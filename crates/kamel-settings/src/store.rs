//! File-backed key-value settings store.
//!
//! Settings live in memory as a sorted map. Use `open()` to load from a
//! YAML file and `save()` to persist back.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SettingsError};

/// Setting read by `install` to default its namespace.
pub const DEFAULT_NAMESPACE_KEY: &str = "default-namespace";

/// Key-value settings bound to a YAML file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: BTreeMap<String, String>,
}

impl SettingsStore {
    /// Create an empty store bound to `path` without touching the disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            settings: BTreeMap::new(),
        }
    }

    /// Open the store at `path`, loading it if the file exists.
    ///
    /// A missing or blank file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the file is not a flat string mapping, or `Io`
    /// if it exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Reload the settings from disk, discarding in-memory changes.
    ///
    /// # Errors
    ///
    /// Same as [`SettingsStore::open`].
    pub fn load(&mut self) -> Result<()> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Settings file not found");
                self.settings.clear();
                return Ok(());
            }
            Err(e) => return Err(SettingsError::Io(e)),
        };

        self.settings = if contents.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| SettingsError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
            })?
        };

        debug!(
            path = %self.path.display(),
            count = self.settings.len(),
            "Loaded settings"
        );
        Ok(())
    }

    /// Write the settings to disk, creating parent directories as needed.
    ///
    /// Uses write-to-temp + rename.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory or file cannot be written.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&self.settings)?;
        let tmp_path = self.path.with_extension("yaml.tmp");
        if let Err(e) = write_then_rename(&tmp_path, &self.path, yaml.as_bytes()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SettingsError::Io(e));
        }

        debug!(
            path = %self.path.display(),
            count = self.settings.len(),
            "Saved settings"
        );
        Ok(())
    }

    /// Get a setting.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Set a setting. Not persisted until [`SettingsStore::save`].
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.insert(key.into(), value.into());
    }

    /// All settings in key order.
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.settings
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_then_rename(tmp_path: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    file.write_all(contents)?;
    file.flush()?;
    drop(file);
    fs::rename(tmp_path, path)
}
