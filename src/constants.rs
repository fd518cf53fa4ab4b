// Browser-side settings for the morph component.
//
// Kept free of web-sys types so host tests can include this file directly.

// DOM targets
pub const CANVAS_ID: &str = "aegisCanvas";
pub const SECTION_ID: &str = "about";

// Canvas backing store
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Frame clear colour (#0a0a0a)
pub const CLEAR_COLOR: [f64; 3] = [0.039, 0.039, 0.039];

// Exponential-squared fog applied to every drawable by view depth
pub const FOG_DENSITY: f32 = 0.065;

// Initial vertex buffer capacities (grown on demand)
pub const POINT_BUFFER_INITIAL: usize = 4096;
pub const LINE_BUFFER_INITIAL: usize = 8192;

#[inline]
pub fn clamp_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing-store size for a CSS box at a given device pixel ratio, at least 1px.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = clamp_pixel_ratio(dpr);
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}
