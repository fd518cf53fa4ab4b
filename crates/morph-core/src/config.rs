//! Named options for the morph.
//!
//! Every knob has a default taken from `constants.rs`; a page embedding the
//! component can override individual fields before handing the config to
//! `MorphDriver::new`, which validates it first.

use crate::constants::*;
use crate::easing::{lerp, Easing};
use crate::error::{MorphError, Result};
use crate::scroll::ScrollTrigger;
use glam::Vec3;
use rand::Rng;

/// Closed real interval sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        lerp(self.min, self.max, rng.gen::<f32>())
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    fn check(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(MorphError::InvalidConfig(format!(
                "{name}: expected finite min <= max, got {}..{}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Inclusive integer interval sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountSpan {
    pub min: usize,
    pub max: usize,
}

impl CountSpan {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.min..=self.max)
    }
}

/// How edges between the points of one drawable are chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeStrategy {
    /// `floor(points * density)` random chords. Self-edges are never produced
    /// and duplicates are rejected, with a capped number of attempts.
    Random { density: f32 },
    /// Undirected k-nearest-neighbour links.
    Nearest { k: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClusterConfig {
    pub count: usize,
    pub points: CountSpan,
    pub radius: Span,
    pub shell_bias: f32,
    pub vertical_squash: f32,
    pub edges: EdgeStrategy,
    pub point_size: Span,
    pub anchor_min: Vec3,
    pub anchor_max: Vec3,
    pub drift_extent: Vec3,
    pub rotation_speed: Span,
    pub pulse_peak: Span,
    pub pulse_half_period: Span,
    pub pulse_delay_max: f32,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            count: CLUSTER_COUNT,
            points: CountSpan::new(CLUSTER_POINTS_MIN, CLUSTER_POINTS_MAX),
            radius: Span::new(CLUSTER_RADIUS_MIN, CLUSTER_RADIUS_MAX),
            shell_bias: CLUSTER_SHELL_BIAS,
            vertical_squash: CLUSTER_VERTICAL_SQUASH,
            edges: EdgeStrategy::Random {
                density: CLUSTER_EDGE_MULTIPLIER,
            },
            point_size: Span::new(CLUSTER_POINT_SIZE_MIN, CLUSTER_POINT_SIZE_MAX),
            anchor_min: Vec3::from_array(ANCHOR_MIN),
            anchor_max: Vec3::from_array(ANCHOR_MAX),
            drift_extent: Vec3::from_array(DRIFT_EXTENT),
            rotation_speed: Span::new(ROTATION_SPEED_MIN, ROTATION_SPEED_MAX),
            pulse_peak: Span::new(PULSE_PEAK_MIN, PULSE_PEAK_MAX),
            pulse_half_period: Span::new(PULSE_HALF_PERIOD_MIN, PULSE_HALF_PERIOD_MAX),
            pulse_delay_max: PULSE_DELAY_MAX,
        }
    }
}

/// Depth and peak opacity of one shield slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerConfig {
    pub depth: f32,
    pub base_opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShieldConfig {
    pub hex_radius: i32,
    pub hex_spacing: f32,
    pub silhouette_scale: f32,
    pub line_scale: f32,
    pub edges: EdgeStrategy,
    pub layers: Vec<LayerConfig>,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            hex_radius: HEX_RADIUS,
            hex_spacing: HEX_SPACING,
            silhouette_scale: SILHOUETTE_SCALE,
            line_scale: SHIELD_LINE_SCALE,
            edges: EdgeStrategy::Random {
                density: SHIELD_EDGE_RATIO,
            },
            layers: LAYER_DEPTHS
                .iter()
                .zip(LAYER_BASE_OPACITIES.iter())
                .map(|(&depth, &base_opacity)| LayerConfig {
                    depth,
                    base_opacity,
                })
                .collect(),
        }
    }
}

/// How strongly each visual quantity responds to eased progress.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub contraction: f32,
    pub assembled_depth: f32,
    pub pulse_damping: f32,
    pub slot_pull: f32,
    /// `[dispersed, assembled]`
    pub cluster_point_opacity: [f32; 2],
    pub cluster_line_opacity: [f32; 2],
    pub opacity_smoothing: f32,
    pub depth_smoothing: f32,
    pub core_smoothing: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            contraction: CONTRACTION_STRENGTH,
            assembled_depth: ASSEMBLED_DEPTH,
            pulse_damping: PULSE_DAMPING,
            slot_pull: SLOT_PULL,
            cluster_point_opacity: CLUSTER_POINT_OPACITY,
            cluster_line_opacity: CLUSTER_LINE_OPACITY,
            opacity_smoothing: OPACITY_SMOOTHING,
            depth_smoothing: DEPTH_SMOOTHING,
            core_smoothing: CORE_SMOOTHING,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MorphConfig {
    pub clusters: ClusterConfig,
    pub shield: ShieldConfig,
    pub motion: MotionConfig,
    pub easing: Easing,
    pub fixed_step: f64,
    pub max_frame_delta: f64,
    pub trigger: ScrollTrigger,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            clusters: ClusterConfig::default(),
            shield: ShieldConfig::default(),
            motion: MotionConfig::default(),
            easing: Easing::default(),
            fixed_step: FIXED_STEP_SEC,
            max_frame_delta: MAX_FRAME_DELTA_SEC,
            trigger: ScrollTrigger::default(),
        }
    }
}

impl MorphConfig {
    /// Reject settings that would produce NaN transforms or empty loops.
    pub fn validate(&self) -> Result<()> {
        let c = &self.clusters;
        if c.points.min > c.points.max {
            return Err(MorphError::InvalidConfig(format!(
                "clusters.points: min {} > max {}",
                c.points.min, c.points.max
            )));
        }
        c.radius.check("clusters.radius")?;
        c.point_size.check("clusters.point_size")?;
        c.rotation_speed.check("clusters.rotation_speed")?;
        c.pulse_peak.check("clusters.pulse_peak")?;
        c.pulse_half_period.check("clusters.pulse_half_period")?;
        if c.pulse_half_period.min <= 0.0 {
            return Err(MorphError::InvalidConfig(
                "clusters.pulse_half_period must be positive".into(),
            ));
        }
        if !c.anchor_min.is_finite()
            || !c.anchor_max.is_finite()
            || c.anchor_min.cmpgt(c.anchor_max).any()
        {
            return Err(MorphError::InvalidConfig(
                "clusters.anchor_min must not exceed anchor_max".into(),
            ));
        }
        check_unit("clusters.shell_bias", c.shell_bias)?;
        check_finite("clusters.vertical_squash", c.vertical_squash)?;
        if !c.drift_extent.is_finite() || c.drift_extent.cmplt(Vec3::ZERO).any() {
            return Err(MorphError::InvalidConfig(
                "clusters.drift_extent must be finite and >= 0".into(),
            ));
        }
        if !(c.pulse_delay_max.is_finite() && c.pulse_delay_max >= 0.0) {
            return Err(MorphError::InvalidConfig(
                "clusters.pulse_delay_max must be finite and >= 0".into(),
            ));
        }
        check_edges("clusters.edges", c.edges)?;

        let s = &self.shield;
        if s.hex_radius < 0 {
            return Err(MorphError::InvalidConfig(
                "shield.hex_radius must be >= 0".into(),
            ));
        }
        if !(s.hex_spacing.is_finite() && s.hex_spacing > 0.0) {
            return Err(MorphError::InvalidConfig(
                "shield.hex_spacing must be positive".into(),
            ));
        }
        if !(s.silhouette_scale.is_finite() && s.silhouette_scale > 0.0) {
            return Err(MorphError::InvalidConfig(
                "shield.silhouette_scale must be positive".into(),
            ));
        }
        if s.layers.is_empty() {
            return Err(MorphError::InvalidConfig(
                "shield.layers must not be empty".into(),
            ));
        }
        if s
            .layers
            .iter()
            .any(|l| !l.depth.is_finite() || !(0.0..=1.0).contains(&l.base_opacity))
        {
            return Err(MorphError::InvalidConfig(
                "shield.layers need finite depth and opacity in [0, 1]".into(),
            ));
        }
        check_finite("shield.line_scale", s.line_scale)?;
        check_edges("shield.edges", s.edges)?;

        let m = &self.motion;
        check_unit("motion.contraction", m.contraction)?;
        check_unit("motion.slot_pull", m.slot_pull)?;
        check_unit("motion.pulse_damping", m.pulse_damping)?;
        check_finite("motion.assembled_depth", m.assembled_depth)?;
        for (name, ends) in [
            ("motion.cluster_point_opacity", m.cluster_point_opacity),
            ("motion.cluster_line_opacity", m.cluster_line_opacity),
        ] {
            check_unit(name, ends[0])?;
            check_unit(name, ends[1])?;
        }
        check_smoothing("motion.opacity_smoothing", m.opacity_smoothing)?;
        check_smoothing("motion.depth_smoothing", m.depth_smoothing)?;
        check_smoothing("motion.core_smoothing", m.core_smoothing)?;

        if !(self.fixed_step.is_finite() && self.fixed_step > 0.0) {
            return Err(MorphError::InvalidConfig(
                "fixed_step must be positive".into(),
            ));
        }
        if !(self.max_frame_delta.is_finite() && self.max_frame_delta >= self.fixed_step) {
            return Err(MorphError::InvalidConfig(
                "max_frame_delta must be at least one fixed step".into(),
            ));
        }
        if !self.trigger.start.is_finite() || !self.trigger.end.is_finite() {
            return Err(MorphError::InvalidConfig(
                "trigger fractions must be finite".into(),
            ));
        }
        Ok(())
    }
}

fn check_finite(name: &str, v: f32) -> Result<()> {
    if !v.is_finite() {
        return Err(MorphError::InvalidConfig(format!(
            "{name}: expected a finite value, got {v}"
        )));
    }
    Ok(())
}

fn check_unit(name: &str, v: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&v) {
        return Err(MorphError::InvalidConfig(format!(
            "{name}: expected a value in [0, 1], got {v}"
        )));
    }
    Ok(())
}

/// Exponential smoothing factor; 0 never reaches the target.
fn check_smoothing(name: &str, v: f32) -> Result<()> {
    if !(v > 0.0 && v <= 1.0) {
        return Err(MorphError::InvalidConfig(format!(
            "{name}: expected a factor in (0, 1], got {v}"
        )));
    }
    Ok(())
}

fn check_edges(name: &str, edges: EdgeStrategy) -> Result<()> {
    match edges {
        EdgeStrategy::Random { density } if !(density.is_finite() && density >= 0.0) => Err(
            MorphError::InvalidConfig(format!("{name}: density must be >= 0")),
        ),
        _ => Ok(()),
    }
}
