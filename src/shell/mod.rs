//! Host shell boundary.
//!
//! The launcher consumes exactly four operations from the windowing host:
//! create a window, load a document into it, make its pointer input
//! transparent, and quit the process. The trait keeps the launcher testable
//! against a recording implementation; [`native::NativeShell`] is the
//! production implementation.

use std::path::Path;

use anyhow::Result;

use crate::model::WindowConfig;

pub mod native;

pub use native::NativeShell;

/// Handle to a window created by the shell.
///
/// An owned id scoped to the process lifetime; there is no global window
/// registry behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(u32);

impl WindowId {
    /// Wrap a raw id. Shells assign these; nothing else mints them.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// The operations this application consumes from its windowing host.
pub trait Shell {
    /// Request creation of one window with the given configuration.
    fn create_window(&mut self, config: &WindowConfig) -> Result<WindowId>;

    /// Request that the window load the document at `path`.
    ///
    /// Ownership of the document passes to the shell; a missing or invalid
    /// document is the shell's failure to surface (or not) as it sees fit.
    fn load_document(&mut self, window: WindowId, path: &Path) -> Result<()>;

    /// Make all pointer events pass through the window to whatever is
    /// beneath it.
    fn set_input_passthrough(&mut self, window: WindowId, enabled: bool) -> Result<()>;

    /// Terminate the application process unconditionally.
    fn quit(&mut self);
}
