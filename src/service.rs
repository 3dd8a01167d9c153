use std::path::Path;

use serde_json::{json, Map, Value};

use crate::artifacts::ArtifactStore;
use crate::error::CoreError;
use crate::features::build_vector;
use crate::format::{format_prediction, PredictionResult};
use crate::predictor::predict;
use crate::schema::FeatureSchema;
use crate::standardize::standardize;

/// The serving boundary of the inference core.
///
/// Holds the feature schema and the artifact store loaded at startup; every
/// request-path method borrows `&self`, so one service can sit behind an
/// `Arc` and answer arbitrarily many concurrent calls.
#[derive(Debug)]
pub struct PriceService {
    schema: FeatureSchema,
    store: Option<ArtifactStore>,
    load_error: Option<CoreError>,
}

impl PriceService {
    /// A ready service over an already validated store.
    pub fn new(store: ArtifactStore, schema: FeatureSchema) -> Self {
        Self {
            schema,
            store: Some(store),
            load_error: None,
        }
    }

    /// A service with no model; every prediction fails with `ModelUnavailable`.
    pub fn degraded(schema: FeatureSchema) -> Self {
        Self {
            schema,
            store: None,
            load_error: None,
        }
    }

    /// Loads artifacts from `dir` with the California schema.
    ///
    /// A load failure does not abort: the service comes up degraded and keeps
    /// rejecting predictions with `ModelUnavailable`. The underlying error
    /// stays available through [`load_error`](Self::load_error) for callers
    /// that prefer to treat it as fatal.
    pub fn load(dir: &Path) -> Self {
        let schema = FeatureSchema::california();
        match ArtifactStore::load(dir) {
            Ok(store) => {
                log::info!(
                    "model artifacts loaded ({} features)",
                    store.feature_count()
                );
                Self::new(store, schema)
            }
            Err(e) => {
                log::warn!("model artifacts unavailable: {e}; predictions will be rejected");
                Self {
                    schema,
                    store: None,
                    load_error: Some(e),
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_some()
    }

    pub fn load_error(&self) -> Option<&CoreError> {
        self.load_error.as_ref()
    }

    pub fn feature_schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Runs the full pipeline: build, standardize, predict, format.
    ///
    /// # Errors
    /// `ModelUnavailable` when no artifacts are loaded, otherwise whatever
    /// the pipeline stages return for this input.
    pub fn predict_price(
        &self,
        input: &Map<String, Value>,
    ) -> Result<PredictionResult, CoreError> {
        let store = self.store.as_ref().ok_or(CoreError::ModelUnavailable)?;
        let raw = build_vector(input, &self.schema)?;
        let standardized = standardize(&raw, store.scaler())?;
        let prediction = predict(&standardized, store.model())?;
        format_prediction(prediction)
    }

    /// The feature-ranges document served to UIs, keyed by feature name.
    pub fn feature_ranges(&self) -> Value {
        let mut ranges = Map::new();
        for slot in self.schema.slots() {
            ranges.insert(
                slot.name.to_string(),
                json!({
                    "label": slot.label,
                    "unit": slot.unit,
                    "min": slot.min,
                    "max": slot.max,
                    "step": slot.step,
                    "default": slot.ui_default,
                }),
            );
        }
        Value::Object(ranges)
    }
}
