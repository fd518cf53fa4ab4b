// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use morph_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn cluster_ranges_are_ordered() {
    assert!(CLUSTER_POINTS_MIN > 1 && CLUSTER_POINTS_MIN <= CLUSTER_POINTS_MAX);
    assert!(CLUSTER_RADIUS_MIN > 0.0 && CLUSTER_RADIUS_MIN <= CLUSTER_RADIUS_MAX);
    assert!(ROTATION_SPEED_MIN <= ROTATION_SPEED_MAX);
    assert!(PULSE_PEAK_MIN >= 1.0 && PULSE_PEAK_MIN <= PULSE_PEAK_MAX);
    assert!(PULSE_HALF_PERIOD_MIN > 0.0 && PULSE_HALF_PERIOD_MIN <= PULSE_HALF_PERIOD_MAX);
    for axis in 0..3 {
        assert!(ANCHOR_MIN[axis] < ANCHOR_MAX[axis]);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_and_smoothing_are_fractions() {
    for o in LAYER_BASE_OPACITIES
        .iter()
        .chain(CLUSTER_POINT_OPACITY.iter())
        .chain(CLUSTER_LINE_OPACITY.iter())
    {
        assert!((0.0..=1.0).contains(o));
    }
    for f in [OPACITY_SMOOTHING, DEPTH_SMOOTHING, CORE_SMOOTHING] {
        assert!(f > 0.0 && f < 1.0);
    }
    // Assembled clusters fade behind the crest.
    assert!(CLUSTER_POINT_OPACITY[1] < CLUSTER_POINT_OPACITY[0]);
    assert!(CLUSTER_LINE_OPACITY[1] < CLUSTER_LINE_OPACITY[0]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layers_are_back_to_front() {
    assert_eq!(LAYER_DEPTHS.len(), LAYER_BASE_OPACITIES.len());
    assert!(LAYER_DEPTHS.windows(2).all(|w| w[0] < w[1]));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_is_sane() {
    assert!(FIXED_STEP_SEC > 0.0);
    assert!(MAX_FRAME_DELTA_SEC >= FIXED_STEP_SEC);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_Z < CAMERA_FAR);
}

#[test]
fn pixel_ratio_is_capped_and_sanitised() {
    assert_eq!(clamp_pixel_ratio(3.0), MAX_DEVICE_PIXEL_RATIO);
    assert_eq!(clamp_pixel_ratio(1.5), 1.5);
    assert_eq!(clamp_pixel_ratio(f64::NAN), 1.0);
    assert_eq!(clamp_pixel_ratio(0.0), 1.0);
}

#[test]
fn backing_size_scales_css_box_and_never_hits_zero() {
    assert_eq!(backing_size(100.0, 50.0, 3.0), (200, 100));
    assert_eq!(backing_size(100.0, 50.0, 1.0), (100, 50));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, 20.0, 1.0), (1, 20));
}
