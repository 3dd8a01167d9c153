//! Inference core for the house price prediction service.
//!
//! Loads a fitted standardizer and ridge-regression model once at startup,
//! then answers predictions over eight neighborhood features: build the
//! vector in schema order, standardize, take the weighted sum, format the
//! price. Every request-path operation is pure and borrow-only, so a single
//! [`PriceService`] serves concurrent callers without synchronization.

pub mod artifacts;
pub mod error;
pub mod features;
pub mod format;
pub mod predictor;
pub mod schema;
pub mod service;
pub mod standardize;

pub use artifacts::{ArtifactStore, LinearModelParams, StandardizationParams};
pub use error::CoreError;
pub use format::PredictionResult;
pub use schema::{FeatureSchema, FeatureSlot};
pub use service::PriceService;
