use crate::config::MorphConfig;
use crate::error::Result;
use crate::geometry::FrameGeometry;
use crate::scene::MorphScene;
use crate::stepper::FixedStepper;
use rand::Rng;

/// Capability the driver draws through. Implemented by the WebGPU renderer in
/// the web front end and by recording mocks in tests.
pub trait RenderSurface {
    type Error: std::fmt::Debug;

    fn render(&mut self, frame: &FrameGeometry) -> std::result::Result<(), Self::Error>;
}

/// Fixed-step morph loop: owns the scene, the accumulator and the reusable
/// vertex buffers.
///
/// Typical usage:
/// - Construct with `MorphDriver::new(config, rng)`
/// - Call `render_now` once before the first animation frame
/// - Call `tick(frame_dt, progress, surface)` once per display refresh
pub struct MorphDriver {
    scene: MorphScene,
    stepper: FixedStepper,
    geometry: FrameGeometry,
    sim_time: f64,
    last_progress: f32,
}

impl MorphDriver {
    pub fn new<R: Rng + ?Sized>(config: MorphConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let scene = MorphScene::new(&config, rng);
        Ok(Self {
            scene,
            stepper: FixedStepper::new(config.fixed_step, config.max_frame_delta),
            geometry: FrameGeometry::default(),
            sim_time: 0.0,
            last_progress: 0.0,
        })
    }

    #[inline]
    pub fn scene(&self) -> &MorphScene {
        &self.scene
    }

    #[inline]
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    #[inline]
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    #[inline]
    pub fn stepper(&self) -> &FixedStepper {
        &self.stepper
    }

    /// Apply `progress` without advancing time and draw one frame. Used at
    /// startup so the first frame already reflects the scroll position.
    pub fn render_now<S: RenderSurface>(
        &mut self,
        progress: f32,
        surface: &mut S,
    ) -> std::result::Result<(), S::Error> {
        let progress = sanitize_progress(progress, self.last_progress);
        self.last_progress = progress;
        self.scene.update(0.0, self.sim_time as f32, progress);
        self.scene.write_geometry(&mut self.geometry);
        surface.render(&self.geometry)
    }

    /// Drain whole fixed steps out of `frame_dt`, then render exactly once.
    /// Returns the number of simulation steps taken (possibly zero).
    pub fn tick<S: RenderSurface>(
        &mut self,
        frame_dt: f64,
        progress: f32,
        surface: &mut S,
    ) -> std::result::Result<usize, S::Error> {
        let progress = sanitize_progress(progress, self.last_progress);
        self.last_progress = progress;
        let steps = self.step(frame_dt, progress);
        self.scene.write_geometry(&mut self.geometry);
        surface.render(&self.geometry)?;
        Ok(steps)
    }

    /// Advance the simulation without rendering.
    pub fn step(&mut self, frame_dt: f64, progress: f32) -> usize {
        let scene = &mut self.scene;
        let sim_time = &mut self.sim_time;
        self.stepper.advance(frame_dt, |dt| {
            *sim_time += dt;
            scene.update(dt as f32, *sim_time as f32, progress);
        })
    }
}

/// Progress is a sampled input; a non-finite sample keeps the previous value.
#[inline]
fn sanitize_progress(progress: f32, previous: f32) -> f32 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        previous
    }
}
