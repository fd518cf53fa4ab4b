use crate::config::EdgeStrategy;
use crate::neighbors::knn_edges;
use fnv::FnvHashSet;
use glam::Vec3;
use rand::Rng;

/// Undirected link between two point indices, stored as `(min, max)`.
pub type Edge = (u32, u32);

/// Attempts allowed per requested edge before `random_edges` gives up.
pub const RANDOM_EDGE_ATTEMPTS_PER_EDGE: usize = 8;

#[inline]
pub fn canonical(a: u32, b: u32) -> Edge {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Pick up to `count` distinct random chords over `n` points.
///
/// Self-edges are never returned. Duplicates are redrawn, but the number of
/// draws is capped, so tiny point sets may yield fewer edges than requested.
pub fn random_edges<R: Rng + ?Sized>(rng: &mut R, n: usize, count: usize) -> Vec<Edge> {
    if n < 2 || count == 0 {
        return Vec::new();
    }
    let possible = n * (n - 1) / 2;
    let wanted = count.min(possible);
    let max_attempts = wanted.saturating_mul(RANDOM_EDGE_ATTEMPTS_PER_EDGE);

    let mut seen = FnvHashSet::default();
    let mut out = Vec::with_capacity(wanted);
    let mut attempts = 0;
    while out.len() < wanted && attempts < max_attempts {
        attempts += 1;
        let a = rng.gen_range(0..n) as u32;
        let b = rng.gen_range(0..n) as u32;
        if a == b {
            continue;
        }
        let e = canonical(a, b);
        if seen.insert(e) {
            out.push(e);
        }
    }
    if out.len() < wanted {
        log::debug!(
            "[edges] settled for {}/{} random edges over {} points",
            out.len(),
            wanted,
            n
        );
    }
    out
}

/// Build the edge list for `points` according to `strategy`.
pub fn build_edges<R: Rng + ?Sized>(
    rng: &mut R,
    points: &[Vec3],
    strategy: EdgeStrategy,
) -> Vec<Edge> {
    match strategy {
        EdgeStrategy::Random { density } => {
            let count = (points.len() as f32 * density).floor() as usize;
            random_edges(rng, points.len(), count)
        }
        EdgeStrategy::Nearest { k } => knn_edges(points, k),
    }
}
