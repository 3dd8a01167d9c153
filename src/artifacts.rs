use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::CoreError;

/// File name of the standardization artifact inside the model directory.
pub const SCALER_FILE: &str = "scaler.json";
/// File name of the linear model artifact inside the model directory.
pub const MODEL_FILE: &str = "model.json";

/// Per-feature mean and scale fitted during training.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardizationParams {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardizationParams {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    pub fn mean_at(&self, i: usize) -> f64 {
        self.mean[i]
    }

    pub fn scale_at(&self, i: usize) -> f64 {
        self.scale[i]
    }

    pub fn feature_count(&self) -> usize {
        self.mean.len()
    }
}

/// Ridge-regression weights and intercept fitted during training.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModelParams {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearModelParams {
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    pub fn weight_at(&self, i: usize) -> f64 {
        self.weights[i]
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn feature_count(&self) -> usize {
        self.weights.len()
    }
}

/// Immutable handle over the two training artifacts.
///
/// Loaded once at startup and shared read-only across requests. Every
/// structural invariant (matching feature counts, strictly positive finite
/// scales, finite weights) is checked here so the request path never has to.
#[derive(Debug)]
pub struct ArtifactStore {
    scaler: StandardizationParams,
    model: LinearModelParams,
}

impl ArtifactStore {
    /// Validates a scaler/model pair and wraps it into a store.
    ///
    /// # Errors
    /// Returns `ArtifactCorrupt` when the two artifacts disagree on feature
    /// count, any `scale` entry is non-positive or non-finite, or any mean,
    /// weight or the intercept is non-finite.
    pub fn new(
        scaler: StandardizationParams,
        model: LinearModelParams,
    ) -> Result<Self, CoreError> {
        if scaler.mean.len() != scaler.scale.len() {
            return Err(CoreError::ArtifactCorrupt(format!(
                "scaler has {} means but {} scales",
                scaler.mean.len(),
                scaler.scale.len()
            )));
        }
        if model.weights.len() != scaler.mean.len() {
            return Err(CoreError::ArtifactCorrupt(format!(
                "model has {} weights but scaler covers {} features",
                model.weights.len(),
                scaler.mean.len()
            )));
        }
        for (i, &s) in scaler.scale.iter().enumerate() {
            if !(s.is_finite() && s > 0.0) {
                return Err(CoreError::ArtifactCorrupt(format!(
                    "scale[{i}] = {s} must be a positive finite number"
                )));
            }
        }
        for (i, &m) in scaler.mean.iter().enumerate() {
            if !m.is_finite() {
                return Err(CoreError::ArtifactCorrupt(format!(
                    "mean[{i}] = {m} is not finite"
                )));
            }
        }
        for (i, &w) in model.weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(CoreError::ArtifactCorrupt(format!(
                    "weight[{i}] = {w} is not finite"
                )));
            }
        }
        if !model.intercept.is_finite() {
            return Err(CoreError::ArtifactCorrupt(format!(
                "intercept = {} is not finite",
                model.intercept
            )));
        }
        Ok(Self { scaler, model })
    }

    /// Loads `scaler.json` and `model.json` from `dir`.
    ///
    /// # Errors
    /// Returns `ArtifactMissing` when either file is absent and
    /// `ArtifactCorrupt` when a file cannot be read, parsed or validated.
    pub fn load(dir: &Path) -> Result<Self, CoreError> {
        let scaler_path = dir.join(SCALER_FILE);
        let model_path = dir.join(MODEL_FILE);

        for path in [&scaler_path, &model_path] {
            if !path.is_file() {
                return Err(CoreError::ArtifactMissing { path: path.clone() });
            }
        }

        let scaler: StandardizationParams = read_json(&scaler_path)?;
        let model: LinearModelParams = read_json(&model_path)?;
        Self::new(scaler, model)
    }

    pub fn scaler(&self) -> &StandardizationParams {
        &self.scaler
    }

    pub fn model(&self) -> &LinearModelParams {
        &self.model
    }

    pub fn mean_at(&self, i: usize) -> f64 {
        self.scaler.mean_at(i)
    }

    pub fn scale_at(&self, i: usize) -> f64 {
        self.scaler.scale_at(i)
    }

    pub fn weight_at(&self, i: usize) -> f64 {
        self.model.weight_at(i)
    }

    pub fn intercept(&self) -> f64 {
        self.model.intercept()
    }

    pub fn feature_count(&self) -> usize {
        self.model.feature_count()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = std::fs::read_to_string(path)
        .map_err(|e| CoreError::ArtifactCorrupt(format!("cannot read {name}: {e}")))?;
    serde_json::from_str(&content)
        .map_err(|e| CoreError::ArtifactCorrupt(format!("invalid JSON in {name}: {e}")))
}
