//! Analytic crest outline used to clip the hex lattice.
//!
//! In normalised units the outline is a circular cap sitting on a shoulder
//! line, with straight flanks running from the ends of the shoulder down to a
//! point. The widest row is the shoulder; every row below it is narrower.

use crate::constants::SILHOUETTE_SCALE;

/// Height of the shoulder line, which is also the centre of the top arc.
pub const ARC_CENTER_Y: f32 = 0.1;
pub const ARC_RADIUS: f32 = 0.62;
/// Bottom point of the crest.
pub const TIP_Y: f32 = -0.85;

/// Half-width of the outline at normalised height `ny`, or `None` outside its
/// vertical extent.
pub fn half_width(ny: f32) -> Option<f32> {
    if ny.is_nan() || ny < TIP_Y || ny > ARC_CENTER_Y + ARC_RADIUS {
        return None;
    }
    if ny >= ARC_CENTER_Y {
        let dy = ny - ARC_CENTER_Y;
        return Some((ARC_RADIUS * ARC_RADIUS - dy * dy).max(0.0).sqrt());
    }
    Some(ARC_RADIUS * (ny - TIP_Y) / (ARC_CENTER_Y - TIP_Y))
}

/// Whether the normalised point `(nx, ny)` lies inside the crest.
#[inline]
pub fn inside_shield(nx: f32, ny: f32) -> bool {
    match half_width(ny) {
        Some(w) => nx.abs() <= w,
        None => false,
    }
}

/// The crest outline at a given world scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Silhouette {
    pub scale: f32,
}

impl Default for Silhouette {
    fn default() -> Self {
        Self {
            scale: SILHOUETTE_SCALE,
        }
    }
}

impl Silhouette {
    pub fn new(scale: f32) -> Self {
        Self {
            scale: scale.abs().max(f32::EPSILON),
        }
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        inside_shield(x / self.scale, y / self.scale)
    }
}
