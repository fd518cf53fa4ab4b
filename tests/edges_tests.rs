use glam::Vec3;
use morph_core::edges::{canonical, random_edges};
use morph_core::neighbors::{knn_edges, nearest_of};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn grid_5x2() -> Vec<Vec3> {
    (0..10)
        .map(|i| Vec3::new((i % 5) as f32, (i / 5) as f32 * 1.7, 0.0))
        .collect()
}

#[test]
fn random_edges_are_valid_and_unique() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 50;
    let edges = random_edges(&mut rng, n, 100);
    assert!(!edges.is_empty() && edges.len() <= 100);
    let mut seen = HashSet::new();
    for &(a, b) in &edges {
        assert!(a < b, "not canonical or self-edge: ({a}, {b})");
        assert!((b as usize) < n);
        assert!(seen.insert((a, b)), "duplicate ({a}, {b})");
    }
}

#[test]
fn random_edges_handle_tiny_sets() {
    let mut rng = StdRng::seed_from_u64(3);
    assert!(random_edges(&mut rng, 0, 10).is_empty());
    assert!(random_edges(&mut rng, 1, 10).is_empty());
    assert!(random_edges(&mut rng, 5, 0).is_empty());

    // Only one possible pair; the request is capped rather than looping.
    let two = random_edges(&mut rng, 2, 10);
    assert!(two.len() <= 1);
    assert!(two.iter().all(|&e| e == (0, 1)));

    // Asking for more than exist yields at most all of them.
    let four = random_edges(&mut rng, 4, 1000);
    assert!(four.len() <= 6);
}

#[test]
fn canonical_orders_pairs() {
    assert_eq!(canonical(5, 2), (2, 5));
    assert_eq!(canonical(2, 5), (2, 5));
}

#[test]
fn knn_pairs_are_unique_and_cover_every_point() {
    let points = grid_5x2();
    let k = 3;
    let edges = knn_edges(&points, k);
    let mut seen = HashSet::new();
    let mut degree = vec![0usize; points.len()];
    for &(a, b) in &edges {
        assert!(a < b);
        assert!(seen.insert((a, b)));
        degree[a as usize] += 1;
        degree[b as usize] += 1;
    }
    for (i, d) in degree.iter().enumerate() {
        assert!(*d >= k, "point {i} only in {d} pairs");
    }
}

#[test]
fn knn_on_a_line_links_nearest() {
    let points: Vec<Vec3> = [0.0, 1.0, 3.0, 7.0]
        .iter()
        .map(|&x| Vec3::new(x, 0.0, 0.0))
        .collect();
    assert_eq!(knn_edges(&points, 1), vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn nearest_prefers_lower_index_on_ties() {
    let points = vec![Vec3::ZERO, Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];
    let best = nearest_of(&points, 0, 1);
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].1, 1);
}

#[test]
fn knn_degenerate_inputs() {
    assert!(knn_edges(&[], 3).is_empty());
    assert!(knn_edges(&[Vec3::ONE], 3).is_empty());
    assert!(knn_edges(&grid_5x2(), 0).is_empty());
    // k larger than the set links everything once.
    let all = knn_edges(&grid_5x2()[..4], 10);
    assert_eq!(all.len(), 6);
}
