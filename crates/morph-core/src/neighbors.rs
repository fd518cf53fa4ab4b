//! Brute-force k-nearest-neighbour links.
//!
//! Point sets here are a few hundred entries at most, so the all-pairs scan is
//! fine and keeps the result independent of any spatial index.

use crate::edges::{canonical, Edge};
use fnv::FnvHashSet;
use glam::Vec3;
use smallvec::SmallVec;

type Candidates = SmallVec<[(f32, u32); 8]>;

/// Indices of the `k` points closest to `points[i]` (excluding itself), nearest first.
///
/// Equal distances keep the lower index first.
pub fn nearest_of(points: &[Vec3], i: usize, k: usize) -> Candidates {
    let mut best = Candidates::new();
    if k == 0 {
        return best;
    }
    let p = points[i];
    for (j, q) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        let d = p.distance_squared(*q);
        if best.len() == k && best.last().is_some_and(|w| d >= w.0) {
            continue;
        }
        let at = best.partition_point(|c| c.0 <= d);
        best.insert(at, (d, j as u32));
        if best.len() > k {
            best.pop();
        }
    }
    best
}

/// Undirected k-NN edge set: every point linked to its `k` nearest others,
/// each pair reported once as `(min, max)`, sorted.
pub fn knn_edges(points: &[Vec3], k: usize) -> Vec<Edge> {
    let mut seen: FnvHashSet<Edge> = FnvHashSet::default();
    for i in 0..points.len() {
        for &(_, j) in nearest_of(points, i, k).iter() {
            seen.insert(canonical(i as u32, j));
        }
    }
    let mut out: Vec<Edge> = seen.into_iter().collect();
    out.sort_unstable();
    out
}
