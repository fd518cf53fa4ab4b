//! Transforms, vertex formats and the per-frame vertex stream handed to the
//! render surface.

use crate::edges::Edge;
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::{PI, TAU};

/// Drawables fainter than this are not emitted at all.
pub const OPACITY_EPSILON: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn from_translation(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }
}

/// World-space point sprite. `size` uses the same attenuated units as the
/// shader: pixels at unit view distance per pixel of half viewport height.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Everything one rendered frame draws, already in world space.
///
/// Buffers are reused between frames; `clear` keeps their capacity.
#[derive(Clone, Debug, Default)]
pub struct FrameGeometry {
    pub points: Vec<PointVertex>,
    /// Consecutive pairs form one segment.
    pub lines: Vec<LineVertex>,
}

#[inline]
fn rgba(color: [f32; 3], opacity: f32) -> [f32; 4] {
    [color[0], color[1], color[2], opacity.clamp(0.0, 1.0)]
}

impl FrameGeometry {
    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
    }

    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }

    pub fn push_points(
        &mut self,
        model: &Mat4,
        points: &[Vec3],
        size: f32,
        color: [f32; 3],
        opacity: f32,
    ) {
        if opacity <= OPACITY_EPSILON {
            return;
        }
        let color = rgba(color, opacity);
        self.points.extend(points.iter().map(|p| PointVertex {
            position: model.transform_point3(*p).to_array(),
            size,
            color,
        }));
    }

    /// Segments between indexed points; edges pointing past `points` are skipped.
    pub fn push_edges(
        &mut self,
        model: &Mat4,
        points: &[Vec3],
        edges: &[Edge],
        color: [f32; 3],
        opacity: f32,
    ) {
        if opacity <= OPACITY_EPSILON {
            return;
        }
        let color = rgba(color, opacity);
        for &(a, b) in edges {
            let (Some(pa), Some(pb)) = (points.get(a as usize), points.get(b as usize)) else {
                continue;
            };
            self.lines.push(LineVertex {
                position: model.transform_point3(*pa).to_array(),
                color,
            });
            self.lines.push(LineVertex {
                position: model.transform_point3(*pb).to_array(),
                color,
            });
        }
    }

    pub fn push_segments(
        &mut self,
        model: &Mat4,
        segments: &[[Vec3; 2]],
        color: [f32; 3],
        opacity: f32,
    ) {
        if opacity <= OPACITY_EPSILON {
            return;
        }
        let color = rgba(color, opacity);
        for seg in segments {
            for p in seg {
                self.lines.push(LineVertex {
                    position: model.transform_point3(*p).to_array(),
                    color,
                });
            }
        }
    }
}

fn circle_segments(radius: f32, segments: usize, out: &mut Vec<[Vec3; 2]>) {
    let n = segments.max(3);
    for i in 0..n {
        let a0 = TAU * i as f32 / n as f32;
        let a1 = TAU * (i + 1) as f32 / n as f32;
        out.push([
            Vec3::new(a0.cos() * radius, a0.sin() * radius, 0.0),
            Vec3::new(a1.cos() * radius, a1.sin() * radius, 0.0),
        ]);
    }
}

/// Latitude/longitude wireframe of a sphere.
pub fn wire_sphere(radius: f32, segments: usize) -> Vec<[Vec3; 2]> {
    let n = segments.max(3);
    let mut out = Vec::new();
    let point = |lat: usize, lon: usize| {
        let phi = PI * lat as f32 / n as f32;
        let theta = TAU * lon as f32 / n as f32;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };
    for lat in 1..n {
        for lon in 0..n {
            out.push([point(lat, lon), point(lat, lon + 1)]);
        }
    }
    for lon in 0..n {
        for lat in 0..n {
            out.push([point(lat, lon), point(lat + 1, lon)]);
        }
    }
    out
}

/// Flat annulus outline in the XY plane: both rims plus radial spokes.
pub fn ring_outline(inner: f32, outer: f32, segments: usize) -> Vec<[Vec3; 2]> {
    let n = segments.max(3);
    let mut out = Vec::with_capacity(n * 3);
    circle_segments(inner, n, &mut out);
    circle_segments(outer, n, &mut out);
    for i in 0..n {
        let a = TAU * i as f32 / n as f32;
        let dir = Vec3::new(a.cos(), a.sin(), 0.0);
        out.push([dir * inner, dir * outer]);
    }
    out
}
