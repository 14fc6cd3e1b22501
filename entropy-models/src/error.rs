//! Error types shared by all noise models.

use thiserror::Error;

/// Errors produced while constructing noise models or estimating entropy.
///
/// Non-finite pixel values are not an error: they propagate into the
/// returned estimate following ordinary floating-point rules.
#[derive(Error, Debug)]
pub enum EntropyError {
    /// A model parameter is outside its valid domain.
    #[error("invalid parameter {name}={value}: must be finite and > 0")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The image batch cannot be used for estimation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Reading or writing a model config failed.
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A model config could not be parsed or serialized.
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
