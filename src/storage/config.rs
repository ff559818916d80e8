//! JSON configuration file.
//!
//! Reads settings from `$RELOJ_CONFIG`, falling back to
//! `$XDG_CONFIG_HOME/reloj/config.json` (then `~/.config/...`). Every field
//! is optional; a missing or invalid file means defaults. The file is never
//! written back.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::constants::*;
use crate::model::{ContentIsolation, WindowConfig};

/// Serializable config structure mirrored from the JSON file.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
struct ConfigFile {
    width: u32,
    height: u32,
    frame: bool,
    transparent: bool,
    always_on_top: bool,
    skip_taskbar: bool,
    resizable: bool,
    host_api_access: bool,
    context_isolation: bool,
    /// Face document path; `None` means the default location.
    document: Option<PathBuf>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frame: DEFAULT_FRAME,
            transparent: DEFAULT_TRANSPARENT,
            always_on_top: DEFAULT_ALWAYS_ON_TOP,
            skip_taskbar: DEFAULT_SKIP_TASKBAR,
            resizable: DEFAULT_RESIZABLE,
            host_api_access: DEFAULT_HOST_API_ACCESS,
            context_isolation: DEFAULT_CONTEXT_ISOLATION,
            document: None,
        }
    }
}

/// Everything the launcher needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The validated window configuration record.
    pub window: WindowConfig,
    /// Where the face document lives.
    pub document: PathBuf,
}

/// Per-user config directory: `$XDG_CONFIG_HOME/reloj` or `~/.config/reloj`.
fn config_dir() -> PathBuf {
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
            home.join(".config")
        });
    base.join(CONFIG_DIR_NAME)
}

/// Config file path, honoring the `$RELOJ_CONFIG` override.
fn config_path() -> PathBuf {
    env::var_os(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|| config_dir().join(CONFIG_FILE_NAME))
}

/// Default face document path next to the config file.
fn default_document_path() -> PathBuf {
    config_dir().join(DOCUMENT_FILE_NAME)
}

/// Load config from the JSON file, returning defaults if missing or invalid.
fn load_config_from_disk(path: &Path) -> ConfigFile {
    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config {} did not parse: {err}", path.display());
                ConfigFile::default()
            }
        },
        Err(_) => {
            log::debug!("no config at {}, using defaults", path.display());
            ConfigFile::default()
        }
    }
}

/// Assemble validated settings from the config file and environment.
pub fn load_settings() -> Settings {
    let config = load_config_from_disk(&config_path());
    let mut window = WindowConfig {
        width: config.width,
        height: config.height,
        frame: config.frame,
        transparent: config.transparent,
        always_on_top: config.always_on_top,
        skip_taskbar: config.skip_taskbar,
        resizable: config.resizable,
        isolation: ContentIsolation {
            host_api_access: config.host_api_access,
            context_isolation: config.context_isolation,
        },
    };
    window.validate();

    let document = env::var_os(ENV_DOCUMENT_PATH)
        .map(PathBuf::from)
        .or(config.document)
        .unwrap_or_else(default_document_path);

    Settings { window, document }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_matches_window_defaults() {
        let config = ConfigFile::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert!(!config.frame);
        assert!(config.transparent);
        assert!(!config.always_on_top);
        assert!(config.skip_taskbar);
        assert!(!config.resizable);
        assert!(!config.host_api_access);
        assert!(config.context_isolation);
        assert!(config.document.is_none());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: ConfigFile =
            serde_json::from_str(r#"{"width": 2560, "always_on_top": true}"#).unwrap();
        assert_eq!(config.width, 2560);
        assert!(config.always_on_top);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert!(config.skip_taskbar);
    }

    #[test]
    fn document_entry_parses_as_path() {
        let config: ConfigFile =
            serde_json::from_str(r#"{"document": "/home/user/clock.json"}"#).unwrap();
        assert_eq!(config.document, Some(PathBuf::from("/home/user/clock.json")));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config_from_disk(Path::new("/nonexistent/config.json"));
        assert_eq!(config.width, DEFAULT_WIDTH);
    }
}
