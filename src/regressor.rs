//! Trained lead-scoring regressor, fitted by the external training
//! pipeline. The only contract with it here is feature vector shape and
//! order; everything else about the model is opaque.

use serde::Deserialize;
use std::path::Path;

/// An externally trained model that maps a canonical feature vector to a
/// raw score prediction.
pub trait Regressor: Send + Sync {
    /// Expanded column names the model was trained against, in order.
    fn columns(&self) -> &[String];

    /// Predict a raw (unrounded, unclamped) score for one feature vector.
    /// `features.len()` always equals `self.columns().len()`; the service
    /// verifies alignment at startup.
    fn predict(&self, features: &[f64]) -> f64;
}

/// Coefficient dump exported by the training pipeline as a JSON artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearRegressor {
    /// Expanded feature columns, in training order.
    pub columns: Vec<String>,
    /// One coefficient per column.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearRegressor {
    /// Load and validate a model artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read model artifact '{}': {}", path.display(), e))?;
        let model: LinearRegressor = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("invalid model artifact '{}': {}", path.display(), e))?;

        if model.columns.is_empty() {
            anyhow::bail!("model artifact has no columns");
        }
        if model.coefficients.len() != model.columns.len() {
            anyhow::bail!(
                "model artifact has {} columns but {} coefficients",
                model.columns.len(),
                model.coefficients.len()
            );
        }

        tracing::info!(
            "Loaded model artifact: {} ({} feature columns)",
            path.display(),
            model.columns.len()
        );
        Ok(model)
    }
}

impl Regressor for LinearRegressor {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn predict(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}
