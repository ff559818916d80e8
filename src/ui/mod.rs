//! User interface module.
//!
//! The overlay window's contents; everything egui lives here.

pub mod overlay;

pub use overlay::OverlayApp;
