//! Common interface for measurement noise models.
//!
//! A noise model describes how a noisy reading Y is produced from a clean
//! signal X and knows how to estimate the conditional entropy H(Y|X) per
//! pixel, in nats. Callers pick the model matching their detector and treat
//! it through [`NoiseModel`].

use std::f64::consts::{E, LN_2, PI};
use std::fmt::Debug;

use ndarray::ArrayView3;

use crate::error::EntropyError;

/// A noise process with a conditional entropy estimator.
pub trait NoiseModel: Send + Sync + Debug {
    /// Short identifier used in logs and configs.
    fn name(&self) -> &'static str;

    /// Estimate H(Y|X) per pixel in nats.
    ///
    /// `images` is a batch of clean reference images with shape `(N, H, W)`.
    /// Data-independent models ignore it; data-dependent models return
    /// [`EntropyError::InvalidInput`] when it is `None`.
    fn estimate_conditional_entropy(
        &self,
        images: Option<ArrayView3<'_, f64>>,
    ) -> Result<f64, EntropyError>;
}

/// Differential entropy in nats of a Gaussian with the given variance.
///
/// Evaluates `0.5 * (ln(2*pi*e) + ln(variance))`. Non-positive variances
/// yield `-inf` or NaN; callers are responsible for masking them.
pub fn gaussian_differential_entropy(variance: f64) -> f64 {
    0.5 * ((2.0 * PI * E).ln() + variance.ln())
}

/// Convert an entropy from nats to bits.
pub fn nats_to_bits(nats: f64) -> f64 {
    nats / LN_2
}
