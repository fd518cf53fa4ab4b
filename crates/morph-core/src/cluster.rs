//! Floating point-cloud clusters: the dispersed "network" end of the morph.

use crate::config::ClusterConfig;
use crate::easing::{lerp, pulse};
use crate::edges::{build_edges, Edge};
use crate::geometry::Transform;
use crate::silhouette::{ARC_CENTER_Y, ARC_RADIUS};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Inner and outer radial bands for assembled cluster slots, in arc radii.
const SLOT_BANDS: [f32; 2] = [1.2, 1.5];
/// Angular overhang of the slot arc below the shoulder on each side.
const SLOT_OVERHANG: f32 = 0.35;

/// Breathing oscillator of one cluster, evaluated on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub peak: f32,
    /// Full rest -> peak -> rest cycle in seconds.
    pub period: f32,
    pub delay: f32,
}

impl Pulse {
    #[inline]
    pub fn value(&self, t: f32) -> f32 {
        pulse(t, self.delay, self.period, 1.0, self.peak)
    }
}

#[derive(Clone, Debug)]
pub struct Cluster {
    pub base_points: Vec<Vec3>,
    pub edges: Vec<Edge>,
    pub base_position: Vec3,
    pub drift: Vec3,
    pub rotation_axis: Vec3,
    pub rotation_speed: f32,
    pub pulse: Pulse,
    /// Phase offset decorrelating this cluster's drift from the others.
    pub seed: f32,
    pub point_size: f32,
    /// Where the cluster settles on the crest arc once assembled.
    pub slot: Vec3,

    pub transform: Transform,
    pub points_opacity: f32,
    pub lines_opacity: f32,
}

impl Cluster {
    pub fn point_count(&self) -> usize {
        self.base_points.len()
    }
}

/// Sample a point in a squashed spherical shell.
///
/// Latitude uses inverse-cosine sampling so points are spread evenly over the
/// sphere; the radius is biased outward by `shell_bias`.
pub fn sample_shell_point<R: Rng + ?Sized>(
    rng: &mut R,
    radius: f32,
    shell_bias: f32,
    vertical_squash: f32,
) -> Vec3 {
    let phi = lerp(-1.0, 1.0, rng.gen::<f32>()).clamp(-1.0, 1.0).acos();
    let theta = rng.gen::<f32>() * TAU;
    let bias = shell_bias.clamp(0.0, 1.0);
    let r = radius * (bias + rng.gen::<f32>() * (1.0 - bias));
    Vec3::new(
        phi.sin() * theta.cos() * r,
        phi.cos() * r * vertical_squash,
        phi.sin() * theta.sin() * r,
    )
}

/// Target slot of cluster `index` out of `count`, spread over the crest arc
/// and alternating between two radial bands.
pub fn slot_position(index: usize, count: usize, silhouette_scale: f32, depth: f32) -> Vec3 {
    let count = count.max(1);
    let t = (index as f32 + 0.5) / count as f32;
    let angle = lerp(-SLOT_OVERHANG, PI + SLOT_OVERHANG, t);
    let radius = silhouette_scale * ARC_RADIUS * SLOT_BANDS[index % SLOT_BANDS.len()];
    Vec3::new(
        angle.cos() * radius,
        ARC_CENTER_Y * silhouette_scale + angle.sin() * radius,
        depth,
    )
}

fn sample_in_box<R: Rng + ?Sized>(rng: &mut R, min: Vec3, max: Vec3) -> Vec3 {
    Vec3::new(
        lerp(min.x, max.x, rng.gen::<f32>()),
        lerp(min.y, max.y, rng.gen::<f32>()),
        lerp(min.z, max.z, rng.gen::<f32>()),
    )
}

pub fn generate_cluster<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &ClusterConfig,
    slot: Vec3,
) -> Cluster {
    let point_total = cfg.points.sample(rng);
    let radius = cfg.radius.sample(rng);
    let base_points: Vec<Vec3> = (0..point_total)
        .map(|_| sample_shell_point(rng, radius, cfg.shell_bias, cfg.vertical_squash))
        .collect();
    let edges = build_edges(rng, &base_points, cfg.edges);

    let base_position = sample_in_box(rng, cfg.anchor_min, cfg.anchor_max);
    let drift = sample_in_box(rng, -cfg.drift_extent, cfg.drift_extent);
    let rotation_axis = Vec3::new(rng.gen(), rng.gen(), rng.gen())
        .try_normalize()
        .unwrap_or(Vec3::Y);
    let rotation_speed = cfg.rotation_speed.sample(rng);
    let pulse = Pulse {
        peak: cfg.pulse_peak.sample(rng),
        period: 2.0 * cfg.pulse_half_period.sample(rng),
        delay: rng.gen::<f32>() * cfg.pulse_delay_max.max(0.0),
    };

    Cluster {
        base_points,
        edges,
        base_position,
        drift,
        rotation_axis,
        rotation_speed,
        pulse,
        seed: rng.gen::<f32>() * TAU,
        point_size: cfg.point_size.sample(rng),
        slot,
        transform: Transform::from_translation(base_position),
        points_opacity: 0.0,
        lines_opacity: 0.0,
    }
}

/// Build `cfg.count` independent clusters with slots on the crest arc.
pub fn generate_clusters<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &ClusterConfig,
    silhouette_scale: f32,
    assembled_depth: f32,
) -> Vec<Cluster> {
    let clusters: Vec<Cluster> = (0..cfg.count)
        .map(|i| {
            let slot = slot_position(i, cfg.count, silhouette_scale, assembled_depth);
            generate_cluster(rng, cfg, slot)
        })
        .collect();
    log::info!(
        "[clusters] count={} points={} edges={}",
        clusters.len(),
        clusters.iter().map(|c| c.base_points.len()).sum::<usize>(),
        clusters.iter().map(|c| c.edges.len()).sum::<usize>()
    );
    clusters
}
