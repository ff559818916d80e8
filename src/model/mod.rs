//! Application domain model.
//!
//! Pure Rust (no windowing dependencies): the window configuration record
//! and the constants it defaults from. Loading the record from disk lives
//! in `storage`.

pub mod constants;
pub mod window_config;

pub use constants::*;
pub use window_config::{ContentIsolation, WindowConfig};
