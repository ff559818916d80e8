//! Tests for the model layer (WindowConfig).

use reloj::model::constants::*;
use reloj::model::{ContentIsolation, WindowConfig};

// === Default Values Tests ===

#[test]
fn window_config_default_dimensions() {
    let config = WindowConfig::default();
    assert_eq!(config.width, 1920);
    assert_eq!(config.height, 1080);
}

#[test]
fn window_config_default_is_frameless_and_transparent() {
    let config = WindowConfig::default();
    assert!(!config.frame);
    assert!(config.transparent);
    assert!(config.is_overlay());
}

#[test]
fn window_config_default_stays_out_of_the_way() {
    let config = WindowConfig::default();
    assert!(!config.always_on_top);
    assert!(config.skip_taskbar);
    assert!(!config.resizable);
}

#[test]
fn content_isolation_default_seals_off_the_host() {
    let isolation = ContentIsolation::default();
    assert!(!isolation.host_api_access);
    assert!(isolation.context_isolation);
}

// === Validation Tests ===

#[test]
fn validate_keeps_dimensions_positive() {
    let mut config = WindowConfig {
        width: 0,
        height: 0,
        ..WindowConfig::default()
    };
    config.validate();
    assert_eq!(config.width, MIN_WINDOW_DIM);
    assert_eq!(config.height, MIN_WINDOW_DIM);
}

#[test]
fn validate_caps_oversized_dimensions() {
    let mut config = WindowConfig {
        width: 1_000_000,
        height: 1_000_000,
        ..WindowConfig::default()
    };
    config.validate();
    assert_eq!(config.width, MAX_WINDOW_DIM);
    assert_eq!(config.height, MAX_WINDOW_DIM);
}

#[test]
fn validate_leaves_valid_dimensions_alone() {
    let mut config = WindowConfig::default();
    config.validate();
    assert_eq!(config.width, DEFAULT_WIDTH);
    assert_eq!(config.height, DEFAULT_HEIGHT);
}

#[test]
fn framed_opaque_window_is_not_an_overlay() {
    let config = WindowConfig {
        frame: true,
        transparent: false,
        ..WindowConfig::default()
    };
    assert!(!config.is_overlay());
}
