//! Configuration constants and default values.
//!
//! This module contains all application constants including the window
//! defaults, the clock face defaults, environment variable names, and
//! validation limits.

// === Window Defaults ===

/// Default window width in pixels.
pub const DEFAULT_WIDTH: u32 = 1920;

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Whether the window carries chrome (title bar, borders) by default.
pub const DEFAULT_FRAME: bool = false;

/// Whether the window background is transparent by default.
pub const DEFAULT_TRANSPARENT: bool = true;

/// Whether the window floats above normal windows by default.
pub const DEFAULT_ALWAYS_ON_TOP: bool = false;

/// Whether the window is hidden from the taskbar by default.
pub const DEFAULT_SKIP_TASKBAR: bool = true;

/// Whether the window is resizable by default.
pub const DEFAULT_RESIZABLE: bool = false;

/// Whether loaded content may reach host APIs by default.
pub const DEFAULT_HOST_API_ACCESS: bool = false;

/// Whether loaded content runs in an isolated context by default.
pub const DEFAULT_CONTEXT_ISOLATION: bool = true;

/// Title used for the overlay window (taskbar and switcher never show it
/// while `skip_taskbar` holds).
pub const WINDOW_TITLE: &str = "Desktop Clock";

// === Face Defaults ===
//
// The built-in face mirrors the original widget: a large day-of-week
// banner, the time beneath it with a per-second alpha pulse, the date last.

/// strftime format of the day-of-week banner.
pub const DEFAULT_BANNER_FORMAT: &str = "%A";

/// strftime format of the time line.
pub const DEFAULT_TIME_FORMAT: &str = "%I:%M:%S %p";

/// strftime format of the date line.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Banner point size.
pub const DEFAULT_BANNER_SIZE: f32 = 120.0;

/// Time line point size.
pub const DEFAULT_TIME_SIZE: f32 = 48.0;

/// Date line point size.
pub const DEFAULT_DATE_SIZE: f32 = 32.0;

/// Banner color (white at 90% alpha).
pub const DEFAULT_BANNER_COLOR: &str = "#FFFFFFE6";

/// Time line color (85% alpha).
pub const DEFAULT_TIME_COLOR: &str = "#F0F0F0D9";

/// Date line color (80% alpha).
pub const DEFAULT_DATE_COLOR: &str = "#B0B0B0CC";

/// Vertical gap between face lines in pixels.
pub const DEFAULT_LINE_SPACING: f32 = 15.0;

/// Alpha multiplier applied on odd seconds by pulsing lines.
pub const PULSE_DIM: f64 = 0.88;

/// How often the face repaints, in milliseconds.
pub const FACE_REFRESH_MS: u64 = 250;

// === Environment Variables ===

/// Overrides the config file location.
pub const ENV_CONFIG_PATH: &str = "RELOJ_CONFIG";

/// Overrides the face document location.
pub const ENV_DOCUMENT_PATH: &str = "RELOJ_DOCUMENT";

// === File Locations ===

/// Directory under the user config root holding our files.
pub const CONFIG_DIR_NAME: &str = "reloj";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default face document name inside [`CONFIG_DIR_NAME`].
pub const DOCUMENT_FILE_NAME: &str = "clock.json";

// === Validation Limits ===

/// Minimum window dimension in pixels.
pub const MIN_WINDOW_DIM: u32 = 1;

/// Maximum window dimension in pixels (8K wide).
pub const MAX_WINDOW_DIM: u32 = 7680;

/// Minimum face line point size.
pub const MIN_FACE_SIZE: f32 = 6.0;

/// Maximum face line point size.
pub const MAX_FACE_SIZE: f32 = 400.0;

/// Maximum vertical gap between face lines in pixels.
pub const MAX_LINE_SPACING: f32 = 200.0;
