//! Fitted numeric scaler, owned and versioned by the external training
//! pipeline. The encoder only applies it, never fits it.

use serde::Deserialize;
use std::path::Path;

/// Transform over the numeric sub-vector of a feature vector.
///
/// Implementations are fitted elsewhere; at inference time they are loaded
/// once at startup and treated as immutable for the process lifetime.
pub trait NumericScaler: Send + Sync {
    /// Column names the scaler was fitted against, in order. The encoder
    /// compares this against the schema before any transform is applied.
    fn columns(&self) -> &[String];

    /// Scale `values` in place. `values.len()` always equals
    /// `self.columns().len()`; the encoder guarantees alignment up front.
    fn transform(&self, values: &mut [f64]);
}

/// Zero-mean/unit-variance scaler with parameters exported by the training
/// pipeline as a JSON artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    /// Numeric columns the parameters were fitted on, in order.
    pub columns: Vec<String>,
    /// Per-column mean.
    pub mean: Vec<f64>,
    /// Per-column standard deviation.
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Load and validate a scaler artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read scaler artifact '{}': {}", path.display(), e))?;
        let scaler: StandardScaler = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("invalid scaler artifact '{}': {}", path.display(), e))?;
        scaler.validate()?;

        tracing::info!(
            "Loaded scaler artifact: {} ({} numeric columns)",
            path.display(),
            scaler.columns.len()
        );
        Ok(scaler)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.columns.is_empty() {
            anyhow::bail!("scaler artifact has no columns");
        }
        if self.mean.len() != self.columns.len() || self.scale.len() != self.columns.len() {
            anyhow::bail!(
                "scaler artifact parameter lengths disagree: {} columns, {} means, {} scales",
                self.columns.len(),
                self.mean.len(),
                self.scale.len()
            );
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            anyhow::bail!("scaler artifact contains a zero or non-finite scale entry");
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            anyhow::bail!("scaler artifact contains a non-finite mean entry");
        }
        Ok(())
    }
}

impl NumericScaler for StandardScaler {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn transform(&self, values: &mut [f64]) {
        for (i, value) in values.iter_mut().enumerate() {
            *value = (*value - self.mean[i]) / self.scale[i];
        }
    }
}
