//! Tests for the pure helpers in the crate root.

use reloj::{clamp, parse_hex_color};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn parse_hex_rgb() {
    let (r, g, b, a) = parse_hex_color("#FF0080").expect("valid rgb hex");
    assert_eq!((r, g, b, a), (255, 0, 128, 255));
}

#[test]
fn parse_hex_rgba() {
    let (r, g, b, a) = parse_hex_color("#33669980").expect("valid rgba hex");
    assert_eq!((r, g, b, a), (51, 102, 153, 128));
}

#[test]
fn parse_hex_without_hash_prefix() {
    let (r, g, b, a) = parse_hex_color("ff00FF80").expect("valid without prefix, mixed case");
    assert_eq!((r, g, b, a), (255, 0, 255, 128));
}

#[test]
fn parse_hex_trims_whitespace() {
    assert!(parse_hex_color("  #FFFFFF  ").is_some());
}

#[test]
fn parse_hex_rejects_garbage() {
    assert!(parse_hex_color("").is_none());
    assert!(parse_hex_color("#FFF").is_none());
    assert!(parse_hex_color("#GGHHII").is_none());
    assert!(parse_hex_color("#1234567").is_none());
}
