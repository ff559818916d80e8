//! eframe-backed shell.
//!
//! eframe owns the event loop, so the launcher's requests are staged here
//! and realized in one blocking [`NativeShell::run`]: the staged window
//! configuration becomes the viewport, the staged document becomes the
//! face, and the staged passthrough flag makes the window click-through.

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use eframe::egui;

use crate::face::FaceDocument;
use crate::model::{WindowConfig, WINDOW_TITLE};
use crate::shell::{Shell, WindowId};
use crate::ui::OverlayApp;

struct Staged {
    id: WindowId,
    config: WindowConfig,
    face: Option<FaceDocument>,
    passthrough: bool,
}

/// Production shell: stages requests, then runs the eframe event loop.
#[derive(Default)]
pub struct NativeShell {
    staged: Option<Staged>,
}

impl NativeShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Realize the staged window and block until it closes.
    ///
    /// With nothing staged (the ready event never produced a window) this
    /// returns immediately: the observable symptom is an absent window, not
    /// an error dialog.
    pub fn run(&mut self) -> Result<()> {
        let Some(staged) = self.staged.take() else {
            log::warn!("no window was staged; nothing to show");
            return Ok(());
        };

        let face = staged.face.unwrap_or_else(|| {
            log::warn!("no document was loaded; using the built-in face");
            FaceDocument::default()
        });

        let options = eframe::NativeOptions {
            viewport: viewport_for(&staged.config, staged.passthrough),
            ..Default::default()
        };

        log::info!(
            "opening {}x{} overlay (passthrough: {})",
            staged.config.width,
            staged.config.height,
            staged.passthrough
        );

        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(move |cc| Ok(Box::new(OverlayApp::new(cc, face)))),
        )
        .map_err(|err| anyhow!("windowing backend failed: {err}"))
    }
}

impl Shell for NativeShell {
    fn create_window(&mut self, config: &WindowConfig) -> Result<WindowId> {
        if self.staged.is_some() {
            bail!("a window has already been created");
        }
        if config.isolation.host_api_access {
            // This shell has no host bridge; the flag cannot be honored.
            log::warn!("host_api_access requested, but loaded documents are inert data here");
        }
        let id = WindowId::new(1);
        self.staged = Some(Staged {
            id,
            config: config.clone(),
            face: None,
            passthrough: false,
        });
        Ok(id)
    }

    fn load_document(&mut self, window: WindowId, path: &Path) -> Result<()> {
        let staged = self
            .staged
            .as_mut()
            .ok_or_else(|| anyhow!("no window exists"))?;
        if staged.id != window {
            bail!("unknown window {:?}", window);
        }
        staged.face = Some(FaceDocument::load(path));
        Ok(())
    }

    fn set_input_passthrough(&mut self, window: WindowId, enabled: bool) -> Result<()> {
        let staged = self
            .staged
            .as_mut()
            .ok_or_else(|| anyhow!("no window exists"))?;
        if staged.id != window {
            bail!("unknown window {:?}", window);
        }
        staged.passthrough = enabled;
        Ok(())
    }

    fn quit(&mut self) {
        log::info!("all windows closed, terminating");
        std::process::exit(0);
    }
}

/// Translate the window configuration into an egui viewport.
fn viewport_for(config: &WindowConfig, passthrough: bool) -> egui::ViewportBuilder {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([config.width as f32, config.height as f32])
        .with_decorations(config.frame)
        .with_transparent(config.transparent)
        .with_resizable(config.resizable)
        .with_taskbar(!config.skip_taskbar)
        .with_mouse_passthrough(passthrough);
    if config.always_on_top {
        viewport = viewport.with_always_on_top();
    }
    viewport
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_window_is_refused() {
        let mut shell = NativeShell::new();
        let config = WindowConfig::default();
        shell.create_window(&config).unwrap();
        assert!(shell.create_window(&config).is_err());
    }

    #[test]
    fn operations_require_a_window() {
        let mut shell = NativeShell::new();
        assert!(shell
            .load_document(WindowId::new(1), Path::new("/tmp/clock.json"))
            .is_err());
        assert!(shell
            .set_input_passthrough(WindowId::new(1), true)
            .is_err());
    }

    #[test]
    fn operations_check_the_window_id() {
        let mut shell = NativeShell::new();
        let id = shell.create_window(&WindowConfig::default()).unwrap();
        let wrong = WindowId::new(id.raw() + 1);
        assert!(shell
            .load_document(wrong, Path::new("/tmp/clock.json"))
            .is_err());
        assert!(shell.set_input_passthrough(wrong, true).is_err());
    }
}
