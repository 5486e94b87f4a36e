//! Config file location resolution.
//!
//! The settings file can live in one of several places, selected by the
//! `--folder` flag:
//!
//! - `used` - the working directory
//! - `sub` / `home` - `~/.kamel/`
//! - `env` - the directory named by `KAMEL_CONFIG_PATH`, with an optional
//!   base name from `KAMEL_CONFIG_NAME`
//!
//! Without a folder flag the location is discovered, first match wins:
//!
//! 1. `KAMEL_CONFIG_PATH` (and `KAMEL_CONFIG_NAME`) when set
//! 2. `./kamel-config.yaml` if it exists
//! 3. `~/.kamel/kamel-config.yaml` if it exists
//! 4. [`DEFAULT_CONFIG_LOCATION`]
//!
//! Everything the resolver needs from the process environment is captured
//! in a [`ResolveContext`], so [`resolve_location`] never reads environment
//! variables itself.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, SettingsError};

/// Base name of the settings file.
pub const DEFAULT_CONFIG_NAME: &str = "kamel-config";

/// Extension of the settings file.
pub const CONFIG_EXTENSION: &str = "yaml";

/// Settings file used when nothing else is found.
pub const DEFAULT_CONFIG_LOCATION: &str = "kamel-config.yaml";

/// Directory under the user's home that holds the settings file.
pub const HOME_SUBDIR: &str = ".kamel";

/// Directory override.
pub const CONFIG_PATH_ENV: &str = "KAMEL_CONFIG_PATH";

/// Base name override, paired with `KAMEL_CONFIG_PATH`.
pub const CONFIG_NAME_ENV: &str = "KAMEL_CONFIG_NAME";

/// Strategy for locating the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folder {
    /// The current working directory.
    Used,
    /// `~/.kamel/`.
    Sub,
    /// `~/.kamel/`, same as [`Folder::Sub`].
    Home,
    /// `$KAMEL_CONFIG_PATH`.
    Env,
}

impl Folder {
    /// All folder values, in the order they are documented.
    pub const ALL: [Self; 4] = [Self::Used, Self::Sub, Self::Home, Self::Env];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Used => "used",
            Self::Sub => "sub",
            Self::Home => "home",
            Self::Env => "env",
        }
    }
}

impl FromStr for Folder {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|folder| folder.as_str() == s)
            .ok_or_else(|| SettingsError::InvalidFolder {
                value: s.to_string(),
            })
    }
}

/// Inputs to [`resolve_location`] that would otherwise come from the
/// process environment.
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    pub cwd: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub config_path: Option<String>,
    pub config_name: Option<String>,
}

impl ResolveContext {
    /// Capture the working directory, home directory and `KAMEL_CONFIG_*`
    /// variables of the running process.
    ///
    /// An unreadable working directory is recorded as `None`; only
    /// `--folder used` needs it.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            cwd: std::env::current_dir().ok(),
            home: dirs::home_dir(),
            config_path: std::env::var(CONFIG_PATH_ENV).ok(),
            config_name: std::env::var(CONFIG_NAME_ENV).ok(),
        }
    }

    fn env_location(&self) -> Option<ConfigLocation> {
        let dir = non_empty(self.config_path.as_deref())?;
        let name = non_empty(self.config_name.as_deref()).unwrap_or(DEFAULT_CONFIG_NAME);
        Some(ConfigLocation::new(dir, name))
    }

    fn home_location(&self) -> Option<ConfigLocation> {
        self.home
            .as_ref()
            .map(|home| ConfigLocation::new(home.join(HOME_SUBDIR), DEFAULT_CONFIG_NAME))
    }
}

/// Where the settings file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    dir: PathBuf,
    name: String,
}

impl ConfigLocation {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// The default location, relative to the working directory.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(PathBuf::new(), DEFAULT_CONFIG_NAME)
    }

    /// File base name, without extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path of the settings file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.{CONFIG_EXTENSION}", self.name))
    }
}

impl Default for ConfigLocation {
    fn default() -> Self {
        Self::default_location()
    }
}

/// Resolve where the settings file lives.
///
/// `None` runs [`discover_location`].
///
/// # Errors
///
/// Returns `CwdUnavailable` for `used` without a working directory,
/// `HomeDirUnavailable` for `sub`/`home` without a home directory, or
/// `MissingEnv` for `env` without `KAMEL_CONFIG_PATH`.
pub fn resolve_location(folder: Option<Folder>, ctx: &ResolveContext) -> Result<ConfigLocation> {
    let location = match folder {
        None => discover_location(ctx),
        Some(Folder::Used) => {
            let cwd = ctx.cwd.as_ref().ok_or(SettingsError::CwdUnavailable)?;
            ConfigLocation::new(cwd, DEFAULT_CONFIG_NAME)
        }
        Some(Folder::Sub | Folder::Home) => ctx
            .home_location()
            .ok_or(SettingsError::HomeDirUnavailable)?,
        Some(Folder::Env) => ctx.env_location().ok_or(SettingsError::MissingEnv {
            var: CONFIG_PATH_ENV,
        })?,
    };

    debug!(
        folder = folder.map_or("default", Folder::as_str),
        path = %location.path().display(),
        "Resolved config location"
    );
    Ok(location)
}

/// Find the settings file when no folder flag is given.
///
/// The environment override wins even if its file does not exist yet, so a
/// first write lands there. Otherwise an existing working-directory file,
/// then an existing `~/.kamel` file, then [`DEFAULT_CONFIG_LOCATION`].
#[must_use]
pub fn discover_location(ctx: &ResolveContext) -> ConfigLocation {
    if let Some(location) = ctx.env_location() {
        return location;
    }

    let local = ctx.cwd.as_ref().map_or_else(ConfigLocation::default_location, |cwd| {
        ConfigLocation::new(cwd, DEFAULT_CONFIG_NAME)
    });
    if local.path().is_file() {
        return local;
    }

    ctx.home_location()
        .filter(|location| location.path().is_file())
        .unwrap_or_default()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn ctx() -> ResolveContext {
        ResolveContext {
            cwd: Some(PathBuf::from("/work/project")),
            home: Some(PathBuf::from("/home/alice")),
            config_path: None,
            config_name: None,
        }
    }

    fn scratch_ctx(dir: &Path) -> ResolveContext {
        let cwd = dir.join("work");
        let home = dir.join("home");
        fs::create_dir_all(&cwd).unwrap();
        fs::create_dir_all(home.join(HOME_SUBDIR)).unwrap();
        ResolveContext {
            cwd: Some(cwd),
            home: Some(home),
            config_path: None,
            config_name: None,
        }
    }

    #[test]
    fn test_no_folder_falls_back_to_default_location() {
        let location = resolve_location(None, &ctx()).unwrap();
        assert_eq!(location.path(), PathBuf::from(DEFAULT_CONFIG_LOCATION));
    }

    #[test]
    fn test_discover_prefers_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = scratch_ctx(dir.path());
        fs::write(ctx.cwd.as_ref().unwrap().join(DEFAULT_CONFIG_LOCATION), "").unwrap();
        ctx.config_path = Some("/foo/bar".to_string());
        ctx.config_name = Some("config".to_string());

        let location = resolve_location(None, &ctx).unwrap();
        assert_eq!(location.path(), PathBuf::from("/foo/bar/config.yaml"));
    }

    #[test]
    fn test_discover_prefers_cwd_file_over_home() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = scratch_ctx(dir.path());
        let local = ctx.cwd.as_ref().unwrap().join(DEFAULT_CONFIG_LOCATION);
        fs::write(&local, "").unwrap();
        let home_file = ctx.home.as_ref().unwrap().join(HOME_SUBDIR).join(DEFAULT_CONFIG_LOCATION);
        fs::write(&home_file, "").unwrap();

        assert_eq!(discover_location(&ctx).path(), local);
    }

    #[test]
    fn test_discover_finds_home_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = scratch_ctx(dir.path());
        let home_file = ctx.home.as_ref().unwrap().join(HOME_SUBDIR).join(DEFAULT_CONFIG_LOCATION);
        fs::write(&home_file, "").unwrap();

        assert_eq!(discover_location(&ctx).path(), home_file);
    }

    #[test]
    fn test_discover_without_files_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = scratch_ctx(dir.path());
        assert_eq!(discover_location(&ctx), ConfigLocation::default_location());
    }

    #[test]
    fn test_used_resolves_to_cwd() {
        let location = resolve_location(Some(Folder::Used), &ctx()).unwrap();
        assert_eq!(
            location.path(),
            PathBuf::from("/work/project/kamel-config.yaml")
        );
    }

    #[test]
    fn test_used_without_cwd() {
        let mut ctx = ctx();
        ctx.cwd = None;
        let result = resolve_location(Some(Folder::Used), &ctx);
        assert!(matches!(result, Err(SettingsError::CwdUnavailable)));
    }

    #[test]
    fn test_home_and_env_do_not_need_cwd() {
        let mut ctx = ctx();
        ctx.cwd = None;
        ctx.config_path = Some("/foo/bar".to_string());
        assert!(resolve_location(Some(Folder::Home), &ctx).is_ok());
        assert!(resolve_location(Some(Folder::Env), &ctx).is_ok());
    }

    #[test]
    fn test_sub_and_home_resolve_identically() {
        let sub = resolve_location(Some(Folder::Sub), &ctx()).unwrap();
        let home = resolve_location(Some(Folder::Home), &ctx()).unwrap();
        assert_eq!(sub, home);
        assert_eq!(
            sub.path(),
            PathBuf::from("/home/alice/.kamel/kamel-config.yaml")
        );
    }

    #[test]
    fn test_home_without_home_dir() {
        let mut ctx = ctx();
        ctx.home = None;
        let result = resolve_location(Some(Folder::Home), &ctx);
        assert!(matches!(result, Err(SettingsError::HomeDirUnavailable)));
    }

    #[test]
    fn test_env_uses_default_name() {
        let mut ctx = ctx();
        ctx.config_path = Some("/foo/bar".to_string());
        let location = resolve_location(Some(Folder::Env), &ctx).unwrap();
        assert_eq!(location.path(), PathBuf::from("/foo/bar/kamel-config.yaml"));
    }

    #[test]
    fn test_env_with_config_name() {
        let mut ctx = ctx();
        ctx.config_path = Some("/foo/bar".to_string());
        ctx.config_name = Some("config".to_string());
        let location = resolve_location(Some(Folder::Env), &ctx).unwrap();
        assert_eq!(location.path(), PathBuf::from("/foo/bar/config.yaml"));
        assert_eq!(location.name(), "config");
    }

    #[test]
    fn test_env_ignores_empty_config_name() {
        let mut ctx = ctx();
        ctx.config_path = Some("/foo/bar".to_string());
        ctx.config_name = Some(String::new());
        let location = resolve_location(Some(Folder::Env), &ctx).unwrap();
        assert_eq!(location.name(), DEFAULT_CONFIG_NAME);
    }

    #[test]
    fn test_env_without_config_path() {
        let result = resolve_location(Some(Folder::Env), &ctx());
        assert!(matches!(
            result,
            Err(SettingsError::MissingEnv {
                var: CONFIG_PATH_ENV
            })
        ));
    }

    #[test]
    fn test_folder_from_str() {
        for folder in Folder::ALL {
            assert_eq!(folder.as_str().parse::<Folder>().unwrap(), folder);
        }
        let result = "HOME".parse::<Folder>();
        assert!(matches!(result, Err(SettingsError::InvalidFolder { .. })));
    }
}
