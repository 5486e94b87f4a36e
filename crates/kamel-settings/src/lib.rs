//! `kamel-settings` — where kamel keeps its user settings, and how it reads them.
//!
//! # Quick Start
//!
//! ```no_run
//! use kamel_settings::{DEFAULT_NAMESPACE_KEY, Folder, ResolveContext, SettingsStore, resolve_location};
//!
//! let ctx = ResolveContext::from_process();
//! let location = resolve_location(Some(Folder::Home), &ctx).unwrap();
//!
//! let mut store = SettingsStore::open(location.path()).unwrap();
//! store.set(DEFAULT_NAMESPACE_KEY, "camel");
//! store.save().unwrap();
//! ```

pub mod error;
pub mod location;
pub mod store;

pub use error::{Result, SettingsError};
pub use location::{
    CONFIG_NAME_ENV, CONFIG_PATH_ENV, ConfigLocation, DEFAULT_CONFIG_LOCATION,
    DEFAULT_CONFIG_NAME, Folder, ResolveContext, discover_location, resolve_location,
};
pub use store::{DEFAULT_NAMESPACE_KEY, SettingsStore};
