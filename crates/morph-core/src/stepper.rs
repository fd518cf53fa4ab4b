/// Fixed-timestep accumulator decoupling simulation rate from display rate.
///
/// Each frame adds its real delta; whole steps are drained and the remainder
/// carries over. Deltas are clamped to `max_frame_delta` so a long stall (a
/// backgrounded tab) does not turn into hundreds of catch-up steps.
#[derive(Clone, Debug)]
pub struct FixedStepper {
    step: f64,
    max_frame_delta: f64,
    accumulator: f64,
}

/// Tolerance absorbing float drift when deltas sum to an exact multiple of the step.
const STEP_EPSILON: f64 = 1e-9;

impl FixedStepper {
    pub fn new(step: f64, max_frame_delta: f64) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            1.0 / 60.0
        };
        Self {
            step,
            max_frame_delta: max_frame_delta.max(step),
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[inline]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Add `frame_dt` and call `update(step)` once per whole step. Returns the
    /// number of steps taken.
    pub fn advance(&mut self, frame_dt: f64, mut update: impl FnMut(f64)) -> usize {
        let dt = if frame_dt.is_finite() && frame_dt > 0.0 {
            frame_dt
        } else {
            0.0
        };
        if dt > self.max_frame_delta {
            log::debug!(
                "[stepper] clamped frame delta {:.3}s to {:.3}s",
                dt,
                self.max_frame_delta
            );
        }
        self.accumulator += dt.min(self.max_frame_delta);
        let mut steps = 0;
        while self.accumulator + STEP_EPSILON >= self.step {
            update(self.step);
            self.accumulator = (self.accumulator - self.step).max(0.0);
            steps += 1;
        }
        steps
    }
}
