use morph_core::config::MorphConfig;
use morph_core::stepper::FixedStepper;
use morph_core::{FrameGeometry, MorphDriver, MorphError, RenderSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct RecordingSurface {
    renders: usize,
    points: usize,
    segments: usize,
}

impl RenderSurface for RecordingSurface {
    type Error = ();

    fn render(&mut self, frame: &FrameGeometry) -> Result<(), ()> {
        self.renders += 1;
        self.points = frame.points.len();
        self.segments = frame.segment_count();
        Ok(())
    }
}

struct FailingSurface;

impl RenderSurface for FailingSurface {
    type Error = &'static str;

    fn render(&mut self, _frame: &FrameGeometry) -> Result<(), &'static str> {
        Err("lost")
    }
}

fn driver(seed: u64) -> MorphDriver {
    let mut rng = StdRng::seed_from_u64(seed);
    MorphDriver::new(MorphConfig::default(), &mut rng).expect("default config is valid")
}

/// Run `frames` display frames of exactly one fixed step each.
fn run(d: &mut MorphDriver, surface: &mut RecordingSurface, progress: f32, frames: usize) {
    let step = d.stepper().step();
    for _ in 0..frames {
        d.tick(step, progress, surface).unwrap();
    }
}

#[test]
fn irregular_deltas_drain_exact_step_count() {
    let step = 1.0 / 64.0;
    let mut stepper = FixedStepper::new(step, 0.25);
    let deltas = [0.0078125, 0.0234375, 0.046875, 0.015625, 0.0625];
    assert_eq!(deltas.iter().sum::<f64>(), 10.0 * step);
    let mut calls = 0;
    for dt in deltas {
        stepper.advance(dt, |s| {
            assert_eq!(s, step);
            calls += 1;
        });
    }
    assert_eq!(calls, 10);
    assert!(stepper.accumulator() < step);
}

#[test]
fn sixtieth_steps_survive_float_drift() {
    let step = 1.0 / 60.0;
    let mut stepper = FixedStepper::new(step, 0.25);
    let mut deltas = vec![0.005, 0.031, 0.0123, 0.0419, 0.007, 0.02];
    let partial: f64 = deltas.iter().sum();
    deltas.push(10.0 * step - partial);
    let mut calls = 0;
    for dt in deltas {
        calls += stepper.advance(dt, |_| {});
    }
    assert_eq!(calls, 10);
    assert!(stepper.accumulator() < step);
}

#[test]
fn stalls_are_clamped_and_bad_deltas_ignored() {
    let mut stepper = FixedStepper::new(1.0 / 60.0, 0.25);
    assert_eq!(stepper.advance(10.0, |_| {}), 15);
    assert_eq!(stepper.advance(f64::NAN, |_| {}), 0);
    assert_eq!(stepper.advance(-1.0, |_| {}), 0);
    assert_eq!(stepper.advance(f64::INFINITY, |_| {}), 0);
}

#[test]
fn every_tick_renders_exactly_once() {
    let mut d = driver(1);
    let mut surface = RecordingSurface::default();
    let step = d.stepper().step();

    assert_eq!(d.tick(step * 0.25, 0.0, &mut surface).unwrap(), 0);
    assert_eq!(surface.renders, 1);
    assert_eq!(d.tick(step * 2.5, 0.0, &mut surface).unwrap(), 2);
    assert_eq!(surface.renders, 2);
    d.render_now(0.0, &mut surface).unwrap();
    assert_eq!(surface.renders, 3);
}

#[test]
fn surface_errors_propagate() {
    let mut d = driver(1);
    assert_eq!(d.tick(0.1, 0.5, &mut FailingSurface), Err("lost"));
}

#[test]
fn dispersed_state_at_zero_progress() {
    let mut d = driver(2);
    let mut surface = RecordingSurface::default();
    run(&mut d, &mut surface, 0.0, 90);

    let scene = d.scene();
    assert_eq!(scene.eased(), 0.0);
    for c in &scene.clusters {
        // No contraction: only the sinusoidal drift separates pose from anchor.
        let off = c.transform.position - c.base_position;
        assert!(off.x.abs() <= c.drift.x.abs() * 8.0 + 1e-4);
        assert!(off.y.abs() <= c.drift.y.abs() * 8.0 + 1e-4);
        assert!(off.z.abs() <= c.drift.z.abs() * 6.0 + 1e-4);
        assert!((c.points_opacity - 0.85).abs() < 1e-6);
        assert!((c.lines_opacity - 0.32).abs() < 1e-6);
        assert!(c.transform.scale >= 1.0 && c.transform.scale <= c.pulse.peak + 1e-5);
    }
    for layer in &scene.shield.layers {
        assert_eq!(layer.points_opacity, 0.0);
        assert_eq!(layer.lines_opacity, 0.0);
    }
    assert_eq!(scene.shield.core.opacity, 0.0);
    assert_eq!(scene.shield.glow.opacity, 0.0);

    // Only cluster drawables are emitted.
    let points: usize = scene.clusters.iter().map(|c| c.point_count()).sum();
    let segments: usize = scene.clusters.iter().map(|c| c.edges.len()).sum();
    assert_eq!(surface.points, points);
    assert_eq!(surface.segments, segments);
}

#[test]
fn assembled_state_at_full_progress() {
    let mut d = driver(3);
    let mut surface = RecordingSurface::default();
    run(&mut d, &mut surface, 1.0, 600);

    let scene = d.scene();
    assert_eq!(scene.eased(), 1.0);
    for layer in &scene.shield.layers {
        assert!((layer.points_opacity - layer.base_opacity).abs() < 1e-4);
        assert!((layer.lines_opacity - layer.base_opacity * 0.65).abs() < 1e-4);
        assert!((layer.current_depth - layer.depth * 0.5).abs() < 1e-4);
    }
    for c in &scene.clusters {
        assert!((c.points_opacity - 0.12).abs() < 1e-5);
        assert!((c.lines_opacity - 0.1).abs() < 1e-5);
    }
    assert!(scene.shield.core.opacity > 0.3 && scene.shield.core.opacity < 0.51);
    assert!((scene.shield.glow.opacity - 0.25).abs() < 1e-3);

    let cluster_points: usize = scene.clusters.iter().map(|c| c.point_count()).sum();
    let shield_points = scene.shield.layers.len() * scene.shield.lattice.len();
    assert_eq!(surface.points, cluster_points + shield_points);
}

#[test]
fn shield_reveal_lags_a_progress_jump() {
    let mut d = driver(4);
    let mut surface = RecordingSurface::default();
    run(&mut d, &mut surface, 0.0, 10);
    run(&mut d, &mut surface, 1.0, 1);
    for layer in &d.scene().shield.layers {
        assert!(layer.points_opacity > 0.0);
        assert!(layer.points_opacity <= layer.base_opacity * 0.12 + 1e-6);
    }
}

#[test]
fn scrolling_back_reverses_the_morph() {
    let mut d = driver(5);
    let mut surface = RecordingSurface::default();
    run(&mut d, &mut surface, 1.0, 300);
    run(&mut d, &mut surface, 0.0, 600);
    for layer in &d.scene().shield.layers {
        assert!(layer.points_opacity < 1e-4);
        assert!((layer.current_depth - layer.depth).abs() < 1e-4);
    }
    for c in &d.scene().clusters {
        assert!((c.points_opacity - 0.85).abs() < 1e-6);
    }
}

#[test]
fn rotation_is_integrated_independently_of_progress() {
    let mut a = driver(6);
    let mut b = driver(6);
    let mut surface = RecordingSurface::default();
    run(&mut a, &mut surface, 0.0, 120);
    run(&mut b, &mut surface, 1.0, 120);
    for (ca, cb) in a.scene().clusters.iter().zip(b.scene().clusters.iter()) {
        assert!(ca.transform.rotation.abs_diff_eq(cb.transform.rotation, 1e-5));
        assert!((ca.transform.rotation.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn non_finite_progress_keeps_last_sample() {
    let mut d = driver(7);
    let mut surface = RecordingSurface::default();
    run(&mut d, &mut surface, 0.75, 5);
    run(&mut d, &mut surface, f32::NAN, 5);
    assert_eq!(d.scene().progress(), 0.75);
    for c in &d.scene().clusters {
        assert!(c.transform.position.is_finite());
    }
}

#[test]
fn sim_time_advances_by_whole_steps() {
    let mut d = driver(8);
    let mut surface = RecordingSurface::default();
    run(&mut d, &mut surface, 0.0, 30);
    assert!((d.sim_time() - 30.0 * d.stepper().step()).abs() < 1e-9);
}

#[test]
fn invalid_config_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut cfg = MorphConfig::default();
    cfg.fixed_step = 0.0;
    assert!(matches!(
        MorphDriver::new(cfg, &mut rng),
        Err(MorphError::InvalidConfig(_))
    ));
}
