// Default tuning for the network -> shield morph.
//
// These are the values `MorphConfig::default()` is built from. They describe
// intended behaviour (ranges, time constants, opacity end points) and keep
// magic numbers out of the update code.

// Clusters (dispersed network)
pub const CLUSTER_COUNT: usize = 13;
pub const CLUSTER_POINTS_MIN: usize = 40;
pub const CLUSTER_POINTS_MAX: usize = 59; // inclusive
pub const CLUSTER_RADIUS_MIN: f32 = 1.2;
pub const CLUSTER_RADIUS_MAX: f32 = 2.1;
pub const CLUSTER_SHELL_BIAS: f32 = 0.35; // inner fraction of the radius left empty
pub const CLUSTER_VERTICAL_SQUASH: f32 = 0.9;
pub const CLUSTER_EDGE_MULTIPLIER: f32 = 2.0; // edges per point
pub const CLUSTER_POINT_SIZE_MIN: f32 = 0.06;
pub const CLUSTER_POINT_SIZE_MAX: f32 = 0.11;

// Anchor box and motion
pub const ANCHOR_MIN: [f32; 3] = [-12.0, -7.0, -6.0];
pub const ANCHOR_MAX: [f32; 3] = [12.0, 7.0, 4.0];
pub const DRIFT_EXTENT: [f32; 3] = [0.15, 0.1, 0.12];
pub const ROTATION_SPEED_MIN: f32 = 0.08;
pub const ROTATION_SPEED_MAX: f32 = 0.18;

// Cluster breathing
pub const PULSE_PEAK_MIN: f32 = 1.05;
pub const PULSE_PEAK_MAX: f32 = 1.16;
pub const PULSE_HALF_PERIOD_MIN: f32 = 2.2; // seconds from rest to peak
pub const PULSE_HALF_PERIOD_MAX: f32 = 3.6;
pub const PULSE_DELAY_MAX: f32 = 1.2;

// Cluster morph response
pub const CONTRACTION_STRENGTH: f32 = 0.85;
pub const ASSEMBLED_DEPTH: f32 = -1.2;
pub const PULSE_DAMPING: f32 = 0.8;
pub const SLOT_PULL: f32 = 0.35;
pub const CLUSTER_POINT_OPACITY: [f32; 2] = [0.85, 0.12]; // dispersed, assembled
pub const CLUSTER_LINE_OPACITY: [f32; 2] = [0.32, 0.1];

// Shield lattice
pub const HEX_RADIUS: i32 = 7;
pub const HEX_SPACING: f32 = 0.42;
pub const SILHOUETTE_SCALE: f32 = 5.5;
pub const SHIELD_LINE_SCALE: f32 = 1.02;
pub const SHIELD_EDGE_RATIO: f32 = 0.35;
pub const SHIELD_GROUP_DEPTH: f32 = -2.2;

// Shield layers (back to front)
pub const LAYER_DEPTHS: [f32; 3] = [-0.9, 0.0, 0.9];
pub const LAYER_BASE_OPACITIES: [f32; 3] = [0.25, 0.32, 0.4];
pub const LAYER_SCALE_X: [f32; 2] = [0.9, 1.05];
pub const LAYER_SCALE_Y: [f32; 2] = [0.95, 1.1];
pub const LAYER_POINT_SIZE: [f32; 2] = [0.075, 0.11];
pub const LAYER_LINE_OPACITY_RATIO: f32 = 0.65;
pub const LAYER_DEPTH_COLLAPSE: f32 = 0.5;

// Exponential smoothing factors (per fixed step)
pub const OPACITY_SMOOTHING: f32 = 0.12;
pub const DEPTH_SMOOTHING: f32 = 0.08;
pub const CORE_SMOOTHING: f32 = 0.15;

// Core and glow accents
pub const CORE_RADIUS: f32 = 0.55;
pub const CORE_SEGMENTS: usize = 16;
pub const CORE_PULSE_PERIOD: f32 = 5.6; // full yoyo cycle
pub const GLOW_INNER_RADIUS: f32 = 1.6;
pub const GLOW_OUTER_RADIUS: f32 = 2.2;
pub const GLOW_SEGMENTS: usize = 48;
pub const GLOW_DEPTH: f32 = -0.2;

// Scene root
pub const ROOT_TILT_X: f32 = -0.2;

// Timing
pub const FIXED_STEP_SEC: f64 = 1.0 / 60.0;
pub const MAX_FRAME_DELTA_SEC: f64 = 0.25;

// Scroll trigger: morph starts when the section top reaches `START` of the
// viewport height and ends once `END` of the section height has scrolled past.
pub const SCROLL_TRIGGER_START: f32 = 1.0;
pub const SCROLL_TRIGGER_END: f32 = 0.5;

// Palette
pub const POINT_COLOR: [f32; 3] = [0.0, 0.961, 0.627]; // #00f5a0
pub const LINE_COLOR: [f32; 3] = [0.545, 0.361, 1.0]; // #8b5cff

// Camera
pub const CAMERA_Z: f32 = 28.0;
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
