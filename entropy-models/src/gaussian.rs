//! Analytic conditional entropy for additive Gaussian noise.
//!
//! When every pixel reading is the clean value plus independent
//! N(0, sigma^2) noise, H(Y|X=x) is the same for every x, so H(Y|X) is the
//! closed form `0.5 * ln(2*pi*e*sigma^2)` regardless of the signal.

use ndarray::ArrayView3;

use crate::error::EntropyError;
use crate::model::{gaussian_differential_entropy, NoiseModel};

/// Additive, signal-independent Gaussian noise with known standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticGaussianNoiseModel {
    sigma: f64,
}

impl AnalyticGaussianNoiseModel {
    /// Create a model for noise with standard deviation `sigma`.
    ///
    /// `sigma` is in the same units as pixel intensity.
    ///
    /// # Errors
    /// [`EntropyError::InvalidParameter`] unless `sigma` is finite and positive.
    pub fn new(sigma: f64) -> Result<Self, EntropyError> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(EntropyError::InvalidParameter {
                name: "sigma",
                value: sigma,
            });
        }
        Ok(Self { sigma })
    }

    /// Noise standard deviation
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Conditional entropy per pixel in nats.
    pub fn conditional_entropy(&self) -> f64 {
        gaussian_differential_entropy(self.sigma * self.sigma)
    }
}

impl NoiseModel for AnalyticGaussianNoiseModel {
    fn name(&self) -> &'static str {
        "gaussian"
    }

    fn estimate_conditional_entropy(
        &self,
        _images: Option<ArrayView3<'_, f64>>,
    ) -> Result<f64, EntropyError> {
        Ok(self.conditional_entropy())
    }
}
