//! Lifecycle event plumbing.
//!
//! The windowing host owns the event loop; this crate only registers
//! behavior for two lifecycle events, delivered as plain values over a
//! small mpsc bus and drained on the main thread.
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`LifecycleEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

// Re-export main types for convenient access
pub use bus::{EventBus, EventPublisher};
pub use types::LifecycleEvent;
