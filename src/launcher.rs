//! Overlay window launcher.
//!
//! Owns the application's answer to the two lifecycle events: on ready,
//! build the window configuration, create the window, load the document,
//! and make the window click-through; on all-windows-closed, quit. Exactly
//! one window per process lifetime.

use std::path::PathBuf;

use anyhow::Result;

use crate::events::LifecycleEvent;
use crate::model::WindowConfig;
use crate::shell::{Shell, WindowId};

/// Launcher lifecycle: idle until ready fires, then the window stays open
/// until all windows close, which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherState {
    Idle,
    WindowOpen,
    Terminated,
}

/// Drives the shell through the overlay's lifecycle.
pub struct Launcher {
    config: WindowConfig,
    document: PathBuf,
    state: LauncherState,
    window: Option<WindowId>,
}

impl Launcher {
    pub fn new(config: WindowConfig, document: PathBuf) -> Self {
        Self {
            config,
            document,
            state: LauncherState::Idle,
            window: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LauncherState {
        self.state
    }

    /// Handle of the open window, if any.
    pub fn window(&self) -> Option<WindowId> {
        self.window
    }

    /// Dispatch one lifecycle event against the shell.
    pub fn handle_event(&mut self, event: LifecycleEvent, shell: &mut dyn Shell) -> Result<()> {
        log::debug!("lifecycle: {}", event.description());
        match event {
            LifecycleEvent::Ready => self.initialize(shell),
            LifecycleEvent::AllWindowsClosed => {
                self.shutdown(shell);
                Ok(())
            }
        }
    }

    /// Create the overlay window, point it at the document, and make it
    /// click-through. Runs at most once; repeat ready events are ignored.
    fn initialize(&mut self, shell: &mut dyn Shell) -> Result<()> {
        if self.state != LauncherState::Idle {
            log::warn!("ready fired again; the overlay window is created once per process");
            return Ok(());
        }

        let window = shell.create_window(&self.config)?;
        // Record the window first: even if the document load fails below,
        // the one-window-per-process guarantee must hold.
        self.window = Some(window);
        self.state = LauncherState::WindowOpen;

        shell.load_document(window, &self.document)?;
        shell.set_input_passthrough(window, true)?;

        log::info!("overlay open, document {}", self.document.display());
        Ok(())
    }

    /// Quit the process. Idempotent: a second all-windows-closed event does
    /// nothing.
    fn shutdown(&mut self, shell: &mut dyn Shell) {
        if self.state == LauncherState::Terminated {
            return;
        }
        self.window = None;
        self.state = LauncherState::Terminated;
        shell.quit();
    }
}
