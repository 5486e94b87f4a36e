//! Command implementations.
//!
//! Each command writes its user-facing output to the supplied writer.

pub mod config;
pub mod install;
