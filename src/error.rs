use std::fmt;
use std::path::PathBuf;

/// All errors the inference core can produce.
#[derive(Debug)]
pub enum CoreError {
    /// An artifact file is absent from the model directory.
    ArtifactMissing { path: PathBuf },
    /// An artifact was read but its contents are unusable.
    ArtifactCorrupt(String),
    /// Artifact loading failed at startup; predictions are rejected.
    ModelUnavailable,
    /// A supplied feature value could not be coerced to a number.
    InvalidFeatureValue { name: String },
    /// A vector length does not match the fitted feature count.
    DimensionMismatch { expected: usize, got: usize },
    /// The model produced a non-finite value.
    InvalidPrediction,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArtifactMissing { path } => {
                write!(f, "artifact not found: {}", path.display())
            }
            Self::ArtifactCorrupt(msg) => write!(f, "corrupt artifact: {msg}"),
            Self::ModelUnavailable => {
                write!(f, "model not loaded; train and export artifacts first")
            }
            Self::InvalidFeatureValue { name } => {
                write!(f, "feature '{name}' is not a number")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "expected {expected} features, got {got}")
            }
            Self::InvalidPrediction => write!(f, "prediction is not a finite number"),
        }
    }
}

impl std::error::Error for CoreError {}
