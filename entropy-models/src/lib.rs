//! entropy-models - Conditional entropy estimators for measurement noise
//!
//! Estimates H(Y|X), the entropy of a noisy reading Y given the clean signal
//! X, in nats per pixel. Combined with a separately estimated H(Y) this gives
//! the mutual information I(X;Y) of an imaging pipeline.
//!
//! - **gaussian** - closed form for additive Gaussian noise of known sigma
//! - **poisson** - shot noise, from a batch of clean images via a per-pixel
//!   Gaussian approximation
//! - **config** - JSON-selectable model configuration
//!
//! # Example
//!
//! ```
//! use entropy_models::{AnalyticGaussianNoiseModel, NoiseModel, PoissonNoiseModel};
//! use ndarray::Array3;
//!
//! let gaussian = AnalyticGaussianNoiseModel::new(1.0).unwrap();
//! let h_gauss = gaussian.conditional_entropy();
//!
//! let clean = Array3::from_elem((4, 16, 16), 100.0);
//! let h_shot = PoissonNoiseModel
//!     .estimate_conditional_entropy(Some(clean.view()))
//!     .unwrap();
//!
//! assert!(h_shot > h_gauss);
//! ```

pub mod config;
pub mod error;
pub mod gaussian;
pub mod model;
pub mod poisson;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::NoiseModelConfig;
pub use error::EntropyError;
pub use gaussian::AnalyticGaussianNoiseModel;
pub use model::{gaussian_differential_entropy, nats_to_bits, NoiseModel};
pub use poisson::PoissonNoiseModel;
