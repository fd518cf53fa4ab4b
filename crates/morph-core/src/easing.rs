use std::f32::consts::{PI, TAU};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp into \[0, 1\]. NaN maps to 0 so it cannot leak into interpolation.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

#[inline]
pub fn cubic_in_out(t: f32) -> f32 {
    let t = clamp01(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
pub fn sine_in_out(t: f32) -> f32 {
    let t = clamp01(t);
    -((PI * t).cos() - 1.0) / 2.0
}

/// Curve applied to scroll progress before any visual interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
    SineInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => clamp01(t),
            Easing::CubicInOut => cubic_in_out(t),
            Easing::SineInOut => sine_in_out(t),
        }
    }
}

/// One exponential smoothing step: move `current` a `factor` of the way to `target`.
///
/// A non-finite `current` snaps to `target`; NaN is sticky under lerp otherwise.
#[inline]
pub fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    if !current.is_finite() {
        return target;
    }
    lerp(current, target, factor.clamp(0.0, 1.0))
}

/// Mirrored sine oscillator between `min` and `max`.
///
/// Holds `min` until `delay` has elapsed, reaches `max` after half a `period`
/// and returns to `min` at the end of it. This is the closed form of a
/// repeating yoyo tween with sine in/out easing, evaluated on demand instead
/// of being driven by a timer.
pub fn pulse(t: f32, delay: f32, period: f32, min: f32, max: f32) -> f32 {
    let local = t - delay;
    if local.is_nan() || local <= 0.0 || period.is_nan() || period <= 0.0 {
        return min;
    }
    let phase = (local / period).fract();
    min + (max - min) * 0.5 * (1.0 - (TAU * phase).cos())
}
