//! Configuration loading.
//!
//! Read-only: the application never writes configuration back to disk.

pub mod config;

pub use config::{load_settings, Settings};
