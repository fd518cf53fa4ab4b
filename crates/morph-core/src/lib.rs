//! Procedural geometry and scroll-driven morph engine.
//!
//! Platform-free: the web front end feeds it scroll layout and frame deltas
//! and supplies a `RenderSurface`; everything in between lives here.

pub mod camera;
pub mod cluster;
pub mod config;
pub mod constants;
pub mod driver;
pub mod easing;
pub mod edges;
pub mod error;
pub mod geometry;
pub mod lattice;
pub mod neighbors;
pub mod scene;
pub mod scroll;
pub mod shield;
pub mod silhouette;
pub mod stepper;

pub use camera::Camera;
pub use config::{EdgeStrategy, MorphConfig};
pub use driver::{MorphDriver, RenderSurface};
pub use easing::{cubic_in_out, Easing};
pub use error::MorphError;
pub use geometry::{FrameGeometry, LineVertex, PointVertex};
pub use scroll::{ProgressTracker, ScrollTrigger, SectionRect};
