//! Empirical conditional entropy for Poisson (shot) noise.
//!
//! A pixel with expected photon count `v` reads as Poisson(v). For moderate
//! counts this is close to a Gaussian with variance `v`, whose differential
//! entropy is `0.5 * (ln(2*pi*e) + ln(v))`. Averaging that over every pixel of
//! a batch of clean reference images gives H(Y|X) per pixel.
//!
//! # Masking
//!
//! The approximation is undefined for `v <= 0`. Such pixels (dark background,
//! bias-subtracted negatives, `-inf`) contribute exactly zero entropy instead
//! of `-inf`/NaN. True entropy is underestimated for batches with many of
//! them.
//!
//! # Non-finite input
//!
//! NaN and `+inf` pixels are not trapped: they poison the estimate the same
//! way they would poison any floating-point sum.
//!
//! # Input
//!
//! Pass clean (noise-free) images. Feeding noisy readings biases the result
//! because the noise itself is then treated as signal.

use log::{debug, warn};
use ndarray::{stack, Array1, Array3, ArrayView2, ArrayView3, Axis};
use rayon::prelude::*;

use crate::error::EntropyError;
use crate::model::{gaussian_differential_entropy, NoiseModel};

/// Shot-noise model estimated from a batch of clean images.
///
/// Parameterless: every call derives its estimate from the supplied batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoissonNoiseModel;

/// Entropy contribution of a single pixel with expected count `value`.
fn pixel_entropy(value: f64) -> f64 {
    if value <= 0.0 {
        0.0
    } else {
        gaussian_differential_entropy(value)
    }
}

impl PoissonNoiseModel {
    pub fn new() -> Self {
        Self
    }

    /// Average per-pixel entropy of each sample in the batch, in nats.
    ///
    /// Element `i` is the mean of the masked Gaussian-approximation entropy
    /// over the pixels of `images[i]`. The batch is flattened to
    /// `(N, H*W)` and samples are reduced in parallel.
    ///
    /// # Errors
    /// [`EntropyError::InvalidInput`] if the batch has no samples or the
    /// images have no pixels.
    pub fn per_sample_entropies(
        &self,
        images: &ArrayView3<'_, f64>,
    ) -> Result<Array1<f64>, EntropyError> {
        let (n_samples, height, width) = images.dim();
        let n_pixels = height * width;

        if n_samples == 0 {
            return Err(EntropyError::InvalidInput(
                "image batch contains no samples".to_string(),
            ));
        }
        if n_pixels == 0 {
            return Err(EntropyError::InvalidInput(format!(
                "images have zero pixels (shape {height}x{width})"
            )));
        }

        let flat = images
            .to_shape((n_samples, n_pixels))
            .map_err(|e| EntropyError::InvalidInput(format!("cannot flatten batch: {e}")))?;

        let per_sample: Vec<f64> = flat
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(|row| row.mapv(pixel_entropy).sum() / n_pixels as f64)
            .collect();

        Ok(Array1::from_vec(per_sample))
    }

    /// Conditional entropy H(Y|X) per pixel in nats for a batch `(N, H, W)`.
    ///
    /// # Errors
    /// [`EntropyError::InvalidInput`] if the batch has no samples or the
    /// images have no pixels.
    pub fn conditional_entropy(&self, images: &ArrayView3<'_, f64>) -> Result<f64, EntropyError> {
        let per_sample = self.per_sample_entropies(images)?;
        let estimate = per_sample
            .mean()
            .ok_or_else(|| EntropyError::InvalidInput("image batch contains no samples".into()))?;

        let (n_samples, height, width) = images.dim();
        if estimate.is_finite() {
            debug!(
                "Poisson H(Y|X) over {n_samples} samples of {height}x{width}: {estimate:.6} nats/pixel"
            );
        } else {
            warn!(
                "Poisson H(Y|X) over {n_samples} samples of {height}x{width} is non-finite ({estimate}); input contains NaN or +inf pixels"
            );
        }

        Ok(estimate)
    }

    /// Conditional entropy for a list of individual frames.
    ///
    /// All frames must share the same shape; they are stacked into a single
    /// `(N, H, W)` batch before estimation.
    ///
    /// # Errors
    /// [`EntropyError::InvalidInput`] for an empty list, frames with no
    /// pixels, or frames whose shapes differ.
    pub fn conditional_entropy_from_frames(
        &self,
        frames: &[ArrayView2<'_, f64>],
    ) -> Result<f64, EntropyError> {
        let batch = stack_frames(frames)?;
        self.conditional_entropy(&batch.view())
    }
}

/// Stack equally sized frames into an `(N, H, W)` batch.
fn stack_frames(frames: &[ArrayView2<'_, f64>]) -> Result<Array3<f64>, EntropyError> {
    let first = frames
        .first()
        .ok_or_else(|| EntropyError::InvalidInput("frame list is empty".to_string()))?;
    let expected = first.dim();

    if let Some((idx, frame)) = frames
        .iter()
        .enumerate()
        .find(|(_, frame)| frame.dim() != expected)
    {
        return Err(EntropyError::InvalidInput(format!(
            "frame {idx} has shape {:?}, expected {:?}",
            frame.dim(),
            expected
        )));
    }

    stack(Axis(0), frames)
        .map_err(|e| EntropyError::InvalidInput(format!("cannot stack frames: {e}")))
}

impl NoiseModel for PoissonNoiseModel {
    fn name(&self) -> &'static str {
        "poisson"
    }

    fn estimate_conditional_entropy(
        &self,
        images: Option<ArrayView3<'_, f64>>,
    ) -> Result<f64, EntropyError> {
        let images = images.ok_or_else(|| {
            EntropyError::InvalidInput(
                "Poisson noise model needs a batch of clean reference images".to_string(),
            )
        })?;
        self.conditional_entropy(&images)
    }
}
