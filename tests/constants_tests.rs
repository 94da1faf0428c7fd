// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(TILE_DELAY_MAX > 0.0);
    assert!(TILE_ROTATE_DURATION > 0.0);
    assert!(TILE_THROW_DURATION > 0.0);
    assert!(TILE_FADE_DURATION > 0.0);
    assert!(ICON_FLY_DURATION > 0.0);
    assert!(ICON_FADE_OUT_DURATION > 0.0);
    assert!(HEADER_SHOW_DELAY_MS > 0 && HEADER_FADE_DELAY_MS > 0);
    assert!(MAX_FRAME_DT_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_scene() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    // Tiles are thrown past the camera; icons stop in front of it
    assert!(TILE_THROW_Z > CAMERA_Z);
    assert!(ICON_TARGET_Z < CAMERA_Z);
    assert!(POINT_POSITION.z > CAMERA_Z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn icon_delay_window_is_ordered() {
    assert!(ICON_DELAY_MIN < ICON_DELAY_MAX);
    assert!(ICON_START.z < ICON_TARGET_Z);
}

#[test]
fn hex_colors_unpack() {
    assert_eq!(rgb_from_hex(0xffffff), [1.0, 1.0, 1.0]);
    assert_eq!(rgb_from_hex(0x000000), [0.0, 0.0, 0.0]);
    let [r, g, b] = rgb_from_hex(TILE_COLOR_HEX);
    assert!((r - 166.0 / 255.0).abs() < 1e-6);
    assert!((g - 74.0 / 255.0).abs() < 1e-6);
    assert!((b - 68.0 / 255.0).abs() < 1e-6);
}

#[test]
fn one_url_per_icon_slot() {
    assert_eq!(ICON_URLS.len(), 5);
    for url in ICON_URLS {
        assert!(url.starts_with("https://"));
    }
}
