//! Axial hex grid clipped to the crest silhouette.

use crate::silhouette::Silhouette;
use glam::Vec2;

const SQRT_3: f32 = 1.732_050_8;

/// One kept lattice cell: axial coordinates plus its Cartesian position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLatticeEntry {
    pub q: i32,
    pub r: i32,
    pub position: Vec2,
}

impl HexLatticeEntry {
    #[inline]
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }
}

/// Pointy-top axial -> Cartesian conversion.
#[inline]
pub fn axial_to_cartesian(q: i32, r: i32, spacing: f32) -> Vec2 {
    Vec2::new(
        spacing * SQRT_3 * (q as f32 + r as f32 / 2.0),
        spacing * 1.5 * r as f32,
    )
}

/// Enumerate every valid cell of a hex of `radius` in (q, r) row-major order
/// and keep those inside `silhouette`.
///
/// The order is fixed by the loops alone, so equal inputs always give the same
/// sequence. Shield layers and their edge lists index into it.
pub fn hex_lattice(radius: i32, spacing: f32, silhouette: &Silhouette) -> Vec<HexLatticeEntry> {
    let radius = radius.max(0);
    let mut out = Vec::new();
    for q in -radius..=radius {
        for r in -radius..=radius {
            let s = -q - r;
            if s.abs() > radius {
                continue;
            }
            let position = axial_to_cartesian(q, r, spacing);
            if silhouette.contains(position.x, position.y) {
                out.push(HexLatticeEntry { q, r, position });
            }
        }
    }
    log::debug!(
        "[lattice] radius={} spacing={:.3} kept={}",
        radius,
        spacing,
        out.len()
    );
    out
}
