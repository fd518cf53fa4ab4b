//! Layered hex-lattice crest with its pulsing core: the assembled end of the morph.

use crate::config::ShieldConfig;
use crate::constants::*;
use crate::easing::lerp;
use crate::edges::{build_edges, Edge};
use crate::geometry::{ring_outline, wire_sphere};
use crate::lattice::{hex_lattice, HexLatticeEntry};
use crate::silhouette::Silhouette;
use glam::Vec3;
use rand::Rng;

/// One depth slice of the crest. All layers share the lattice ordering.
#[derive(Clone, Debug)]
pub struct ShieldLayer {
    pub points: Vec<Vec3>,
    /// Lattice positions used as chord endpoints.
    pub line_points: Vec<Vec3>,
    pub edges: Vec<Edge>,
    pub depth: f32,
    pub base_opacity: f32,
    pub point_size: f32,

    pub points_opacity: f32,
    pub lines_opacity: f32,
    pub current_depth: f32,
    pub rotation_z: f32,
}

/// Wireframe decoration drawn with the crest: the core sphere and the halo ring.
#[derive(Clone, Debug)]
pub struct Accent {
    pub segments: Vec<[Vec3; 2]>,
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Clone, Debug)]
pub struct Shield {
    pub lattice: Vec<HexLatticeEntry>,
    pub layers: Vec<ShieldLayer>,
    /// Group wobble about Y and Z.
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub core: Accent,
    /// Flat halo ring behind the core.
    pub glow: Accent,
}

#[inline]
fn layer_fraction(index: usize, count: usize) -> f32 {
    if count > 1 {
        index as f32 / (count - 1) as f32
    } else {
        0.0
    }
}

pub fn build_shield<R: Rng + ?Sized>(rng: &mut R, cfg: &ShieldConfig) -> Shield {
    let silhouette = Silhouette::new(cfg.silhouette_scale);
    let lattice = hex_lattice(cfg.hex_radius, cfg.hex_spacing, &silhouette);
    let count = cfg.layers.len();

    let layers = cfg
        .layers
        .iter()
        .enumerate()
        .map(|(l, layer)| {
            let f = layer_fraction(l, count);
            let sx = lerp(LAYER_SCALE_X[0], LAYER_SCALE_X[1], f);
            let sy = lerp(LAYER_SCALE_Y[0], LAYER_SCALE_Y[1], f);
            let points: Vec<Vec3> = lattice
                .iter()
                .map(|e| Vec3::new(e.position.x * sx, e.position.y * sy, 0.0))
                .collect();
            let line_points: Vec<Vec3> = lattice
                .iter()
                .map(|e| e.position.extend(0.0) * cfg.line_scale)
                .collect();
            let edges = build_edges(rng, &line_points, cfg.edges);
            ShieldLayer {
                points,
                line_points,
                edges,
                depth: layer.depth,
                base_opacity: layer.base_opacity,
                point_size: lerp(LAYER_POINT_SIZE[0], LAYER_POINT_SIZE[1], f),
                points_opacity: 0.0,
                lines_opacity: 0.0,
                current_depth: layer.depth,
                rotation_z: 0.0,
            }
        })
        .collect::<Vec<_>>();

    log::info!(
        "[shield] lattice points={} layers={} edges/layer={}",
        lattice.len(),
        layers.len(),
        layers.first().map(|l| l.edges.len()).unwrap_or(0)
    );

    Shield {
        lattice,
        layers,
        rotation_y: 0.0,
        rotation_z: 0.0,
        core: Accent {
            segments: wire_sphere(CORE_RADIUS, CORE_SEGMENTS),
            opacity: 0.0,
            scale: 0.95,
        },
        glow: Accent {
            segments: ring_outline(GLOW_INNER_RADIUS, GLOW_OUTER_RADIUS, GLOW_SEGMENTS),
            opacity: 0.0,
            scale: 1.1,
        },
    }
}
