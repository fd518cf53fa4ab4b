use morph_core::cluster::{generate_clusters, sample_shell_point, slot_position};
use morph_core::config::{ClusterConfig, CountSpan, EdgeStrategy};
use morph_core::constants::{
    ASSEMBLED_DEPTH, CLUSTER_POINTS_MAX, CLUSTER_POINTS_MIN, SILHOUETTE_SCALE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn make(cfg: &ClusterConfig, seed: u64) -> Vec<morph_core::cluster::Cluster> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_clusters(&mut rng, cfg, SILHOUETTE_SCALE, ASSEMBLED_DEPTH)
}

#[test]
fn clusters_respect_configured_bounds() {
    let cfg = ClusterConfig::default();
    for seed in 0..5 {
        let clusters = make(&cfg, seed);
        assert_eq!(clusters.len(), cfg.count);
        for c in &clusters {
            let n = c.point_count();
            assert!(n >= cfg.points.min && n <= cfg.points.max, "n={n}");
            assert!((c.rotation_axis.length() - 1.0).abs() < 1e-5);
            assert!(cfg.rotation_speed.contains(c.rotation_speed));
            assert!(cfg.point_size.contains(c.point_size));
            assert!(c.pulse.peak >= cfg.pulse_peak.min && c.pulse.peak <= cfg.pulse_peak.max);
            assert!(c.pulse.period > 0.0);
            assert!(c.base_position.cmpge(cfg.anchor_min).all());
            assert!(c.base_position.cmple(cfg.anchor_max).all());
            assert!(c.drift.abs().cmple(cfg.drift_extent).all());
            for p in &c.base_points {
                assert!(p.length() <= cfg.radius.max + 1e-4);
            }
        }
    }
}

#[test]
fn cluster_edges_index_their_own_points() {
    let cfg = ClusterConfig::default();
    for c in make(&cfg, 42) {
        let n = c.point_count() as u32;
        let mut seen = HashSet::new();
        assert!(!c.edges.is_empty());
        assert!(c.edges.len() <= 2 * c.point_count());
        for &(a, b) in &c.edges {
            assert!(a < b && b < n, "edge ({a}, {b}) over {n} points");
            assert!(seen.insert((a, b)));
        }
    }
}

#[test]
fn nearest_strategy_links_every_point() {
    let cfg = ClusterConfig {
        count: 3,
        edges: EdgeStrategy::Nearest { k: 3 },
        ..Default::default()
    };
    for c in make(&cfg, 9) {
        let mut degree = vec![0usize; c.point_count()];
        for &(a, b) in &c.edges {
            degree[a as usize] += 1;
            degree[b as usize] += 1;
        }
        assert!(degree.iter().all(|&d| d >= 3));
    }
}

#[test]
fn tiny_clusters_do_not_hang() {
    let cfg = ClusterConfig {
        count: 4,
        points: CountSpan::new(0, 2),
        ..Default::default()
    };
    for c in make(&cfg, 1) {
        assert!(c.point_count() <= 2);
        assert!(c.edges.len() <= 1);
    }
}

#[test]
fn shell_points_are_squashed_and_biased_outward() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..500 {
        let p = sample_shell_point(&mut rng, 2.0, 0.35, 0.9);
        assert!(p.y.abs() <= 2.0 * 0.9 + 1e-5);
        // The radial bias is applied before vertical squashing.
        let unsquashed = glam::Vec3::new(p.x, p.y / 0.9, p.z).length();
        assert!(unsquashed >= 2.0 * 0.35 - 1e-4 && unsquashed <= 2.0 + 1e-4);
    }
}

#[test]
fn slots_sit_around_the_crest_at_assembled_depth() {
    let count = 13;
    for i in 0..count {
        let s = slot_position(i, count, SILHOUETTE_SCALE, ASSEMBLED_DEPTH);
        assert_eq!(s.z, ASSEMBLED_DEPTH);
        assert!(s.is_finite());
    }
    let left = slot_position(0, count, SILHOUETTE_SCALE, 0.0);
    let right = slot_position(count - 1, count, SILHOUETTE_SCALE, 0.0);
    assert!(left.x > 0.0 && right.x < 0.0);
    assert!(slot_position(0, 0, SILHOUETTE_SCALE, 0.0).is_finite());
}

#[test]
fn default_point_counts_cover_the_inclusive_range() {
    let cfg = ClusterConfig::default();
    assert_eq!(cfg.points, CountSpan::new(CLUSTER_POINTS_MIN, CLUSTER_POINTS_MAX));
    let mut rng = StdRng::seed_from_u64(9);
    let seen: HashSet<usize> = (0..4000).map(|_| cfg.points.sample(&mut rng)).collect();
    assert_eq!(seen.len(), CLUSTER_POINTS_MAX - CLUSTER_POINTS_MIN + 1);
    assert!(seen.contains(&CLUSTER_POINTS_MAX));
    assert!(!seen.contains(&(CLUSTER_POINTS_MAX + 1)));
}
