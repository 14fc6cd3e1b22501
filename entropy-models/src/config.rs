//! Serializable noise model selection.
//!
//! Lets a pipeline pick its noise assumption from JSON instead of code:
//!
//! ```json
//! { "model": "gaussian", "sigma": 2.5 }
//! { "model": "poisson" }
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::EntropyError;
use crate::gaussian::AnalyticGaussianNoiseModel;
use crate::model::NoiseModel;
use crate::poisson::PoissonNoiseModel;

/// Which noise model to build, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum NoiseModelConfig {
    /// Additive Gaussian noise with standard deviation `sigma`.
    Gaussian { sigma: f64 },
    /// Shot noise estimated from clean reference images.
    Poisson,
}

impl NoiseModelConfig {
    /// Build the configured model.
    ///
    /// # Errors
    /// [`EntropyError::InvalidParameter`] if the parameters are out of range.
    pub fn build(&self) -> Result<Box<dyn NoiseModel>, EntropyError> {
        match *self {
            NoiseModelConfig::Gaussian { sigma } => {
                Ok(Box::new(AnalyticGaussianNoiseModel::new(sigma)?))
            }
            NoiseModelConfig::Poisson => Ok(Box::new(PoissonNoiseModel)),
        }
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, EntropyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, EntropyError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!("Loaded noise model config {config:?} from {}", path.display());
        Ok(config)
    }

    /// Save as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> Result<(), EntropyError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
