//! Deterministic image batches for unit tests.

use ndarray::Array3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// Batch of `n` images of `height`x`width` where every pixel equals `value`.
pub fn uniform_batch(n: usize, height: usize, width: usize, value: f64) -> Array3<f64> {
    Array3::from_elem((n, height, width), value)
}

/// Batch of expected photon counts spread around `mean_counts`.
///
/// Pixels are drawn uniformly from `[0.5, 1.5) * mean_counts` with a seeded
/// RNG so repeated calls with the same seed produce identical batches.
pub fn poisson_mean_batch(
    n: usize,
    height: usize,
    width: usize,
    mean_counts: f64,
    seed: u64,
) -> Array3<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(0.5 * mean_counts, 1.5 * mean_counts);
    Array3::from_shape_fn((n, height, width), |_| dist.sample(&mut rng))
}
