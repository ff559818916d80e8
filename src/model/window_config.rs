//! Window configuration record (pure Rust, no windowing dependencies).
//!
//! Built once from defaults plus config-file overrides, consumed once by
//! the shell's window-creation operation, never mutated afterwards.

use super::constants::*;

/// Security attributes governing whether loaded content may reach host APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentIsolation {
    /// Loaded content may call into the host when true.
    pub host_api_access: bool,
    /// Loaded content runs in its own context, sealed off from the host.
    pub context_isolation: bool,
}

impl Default for ContentIsolation {
    fn default() -> Self {
        Self {
            host_api_access: DEFAULT_HOST_API_ACCESS,
            context_isolation: DEFAULT_CONTEXT_ISOLATION,
        }
    }
}

/// Complete display configuration for the overlay window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Window chrome (title bar, borders).
    pub frame: bool,
    /// Transparent background.
    pub transparent: bool,
    /// Float above normal windows.
    pub always_on_top: bool,
    /// Hide from the taskbar and window switcher.
    pub skip_taskbar: bool,
    /// Allow the user to resize the window.
    pub resizable: bool,
    /// Content isolation attributes.
    pub isolation: ContentIsolation,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frame: DEFAULT_FRAME,
            transparent: DEFAULT_TRANSPARENT,
            always_on_top: DEFAULT_ALWAYS_ON_TOP,
            skip_taskbar: DEFAULT_SKIP_TASKBAR,
            resizable: DEFAULT_RESIZABLE,
            isolation: ContentIsolation::default(),
        }
    }
}

impl WindowConfig {
    /// Validates and clamps all values to valid ranges.
    ///
    /// Dimensions must stay positive; a zero from a hand-edited config file
    /// becomes the minimum rather than a creation failure.
    pub fn validate(&mut self) {
        self.width = self.width.clamp(MIN_WINDOW_DIM, MAX_WINDOW_DIM);
        self.height = self.height.clamp(MIN_WINDOW_DIM, MAX_WINDOW_DIM);
    }

    /// Returns true if the window is configured as a decorative overlay:
    /// frameless and transparent.
    pub fn is_overlay(&self) -> bool {
        !self.frame && self.transparent
    }
}
