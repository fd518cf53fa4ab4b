//! Owned morph state and the per-step update.
//!
//! There is no discrete state machine: every drawable is a continuous function
//! of eased progress and simulation time, so scrolling back simply runs the
//! morph in reverse. Cluster rotation is the one integrated quantity; it
//! advances by `speed · dt` every step regardless of progress.
//!
//! Shield and accent opacities are smoothed toward their targets instead of
//! assigned, which keeps the rendered value continuous when progress jumps
//! between ticks (a fast scroll or a flick).

use crate::cluster::{generate_clusters, Cluster};
use crate::config::{MorphConfig, MotionConfig};
use crate::constants::*;
use crate::easing::{clamp01, lerp, pulse, smooth_toward, Easing};
use crate::geometry::FrameGeometry;
use crate::shield::{build_shield, Shield};
use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

pub struct MorphScene {
    pub clusters: Vec<Cluster>,
    pub shield: Shield,
    pub motion: MotionConfig,
    pub easing: Easing,
    progress: f32,
    eased: f32,
}

impl MorphScene {
    /// Generate all static geometry. `config` is assumed to be validated.
    pub fn new<R: Rng + ?Sized>(config: &MorphConfig, rng: &mut R) -> Self {
        let clusters = generate_clusters(
            rng,
            &config.clusters,
            config.shield.silhouette_scale,
            config.motion.assembled_depth,
        );
        let shield = build_shield(rng, &config.shield);
        let mut scene = Self {
            clusters,
            shield,
            motion: config.motion.clone(),
            easing: config.easing,
            progress: 0.0,
            eased: 0.0,
        };
        // Dispersed opacities from the start so the first frame is not blank.
        scene.apply_cluster_opacity();
        scene
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn eased(&self) -> f32 {
        self.eased
    }

    /// Advance one simulation step of `dt` seconds ending at time `t`.
    pub fn update(&mut self, dt: f32, t: f32, progress: f32) {
        self.progress = clamp01(progress);
        self.eased = self.easing.apply(self.progress);
        self.update_clusters(dt, t);
        self.update_shield(t);
        self.update_accents(t);
    }

    fn cluster_opacities(&self) -> (f32, f32) {
        let m = &self.motion;
        (
            lerp(m.cluster_point_opacity[0], m.cluster_point_opacity[1], self.eased),
            lerp(m.cluster_line_opacity[0], m.cluster_line_opacity[1], self.eased),
        )
    }

    fn apply_cluster_opacity(&mut self) {
        let (points, lines) = self.cluster_opacities();
        for c in &mut self.clusters {
            c.points_opacity = points;
            c.lines_opacity = lines;
        }
    }

    fn update_clusters(&mut self, dt: f32, t: f32) {
        let eased = self.eased;
        let m = &self.motion;
        let contraction = 1.0 - eased * m.contraction;
        let slot_weight = eased * m.slot_pull;
        let (points_opacity, lines_opacity) = self.cluster_opacities();

        for c in &mut self.clusters {
            let orbit = Vec3::new(
                c.base_position.x * contraction
                    + (t * 0.6 + c.seed).sin() * c.drift.x * 8.0 * contraction,
                c.base_position.y * contraction
                    + (t * 0.5 + c.seed).cos() * c.drift.y * 8.0 * contraction,
                lerp(c.base_position.z, m.assembled_depth, eased)
                    + (t * 0.4 + c.seed).sin() * c.drift.z * 6.0 * contraction,
            );
            c.transform.position = orbit.lerp(c.slot, slot_weight);

            if dt > 0.0 {
                let spin = Quat::from_axis_angle(c.rotation_axis, c.rotation_speed * dt);
                c.transform.rotation = (c.transform.rotation * spin).normalize();
            }

            c.transform.scale = lerp(1.0, c.pulse.value(t), 1.0 - eased * m.pulse_damping);
            c.points_opacity = points_opacity;
            c.lines_opacity = lines_opacity;
        }
    }

    fn update_shield(&mut self, t: f32) {
        let eased = self.eased;
        let m = &self.motion;
        let shield = &mut self.shield;

        shield.rotation_z = lerp(-0.1, 0.12, (t * 0.2).sin() * 0.5 + 0.5);
        shield.rotation_y = lerp(-0.08, 0.08, (t * 0.3).sin() * 0.5 + 0.5);

        for (idx, layer) in shield.layers.iter_mut().enumerate() {
            let target = layer.base_opacity * eased;
            layer.points_opacity =
                smooth_toward(layer.points_opacity, target, m.opacity_smoothing);
            layer.lines_opacity = smooth_toward(
                layer.lines_opacity,
                target * LAYER_LINE_OPACITY_RATIO,
                m.opacity_smoothing,
            );
            layer.current_depth = smooth_toward(
                layer.current_depth,
                layer.depth * (1.0 - eased * LAYER_DEPTH_COLLAPSE),
                m.depth_smoothing,
            );
            let i = idx as f32;
            layer.rotation_z = (t * 0.35 + i).sin() * 0.08 * (1.0 + i * 0.3);
        }
    }

    fn update_accents(&mut self, t: f32) {
        let eased = self.eased;
        let m = &self.motion;
        let intensity = pulse(t, 0.0, CORE_PULSE_PERIOD, 0.0, 1.0);

        let core = &mut self.shield.core;
        core.opacity = smooth_toward(
            core.opacity,
            0.35 * eased + 0.15 * intensity * eased,
            m.core_smoothing,
        );
        core.scale = smooth_toward(
            core.scale,
            lerp(0.95, 1.25, intensity * eased),
            m.core_smoothing,
        );

        let glow = &mut self.shield.glow;
        glow.opacity = smooth_toward(glow.opacity, 0.25 * eased, m.opacity_smoothing);
        glow.scale = lerp(1.1, 1.32, 0.5 + 0.5 * (t * 0.6).sin());
    }

    pub fn root_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(ROOT_TILT_X)
    }

    pub fn shield_matrix(&self) -> Mat4 {
        self.root_matrix()
            * Mat4::from_translation(Vec3::new(0.0, 0.0, SHIELD_GROUP_DEPTH))
            * Mat4::from_rotation_y(self.shield.rotation_y)
            * Mat4::from_rotation_z(self.shield.rotation_z)
    }

    /// Emit world-space vertices for everything visible into `out`.
    pub fn write_geometry(&self, out: &mut FrameGeometry) {
        out.clear();
        let root = self.root_matrix();
        for c in &self.clusters {
            let model = root * c.transform.matrix();
            out.push_points(&model, &c.base_points, c.point_size, POINT_COLOR, c.points_opacity);
            out.push_edges(&model, &c.base_points, &c.edges, LINE_COLOR, c.lines_opacity);
        }

        let shield = self.shield_matrix();
        for layer in &self.shield.layers {
            let model = shield
                * Mat4::from_translation(Vec3::new(0.0, 0.0, layer.current_depth))
                * Mat4::from_rotation_z(layer.rotation_z);
            out.push_points(
                &model,
                &layer.points,
                layer.point_size,
                POINT_COLOR,
                layer.points_opacity,
            );
            out.push_edges(
                &model,
                &layer.line_points,
                &layer.edges,
                LINE_COLOR,
                layer.lines_opacity,
            );
        }

        let core = &self.shield.core;
        out.push_segments(
            &(shield * Mat4::from_scale(Vec3::splat(core.scale))),
            &core.segments,
            POINT_COLOR,
            core.opacity,
        );
        let glow = &self.shield.glow;
        let glow_model = shield
            * Mat4::from_translation(Vec3::new(0.0, 0.0, GLOW_DEPTH))
            * Mat4::from_rotation_x(FRAC_PI_2)
            * Mat4::from_scale(Vec3::splat(glow.scale));
        out.push_segments(&glow_model, &glow.segments, LINE_COLOR, glow.opacity);
    }
}
