use ndarray::{aview1, Array1};

use crate::artifacts::LinearModelParams;
use crate::error::CoreError;

/// Evaluates the linear model on an already standardized vector.
///
/// Plain `weights · x + intercept` in f64; the output is not clamped, so
/// negative or implausibly large predictions pass through to the caller.
///
/// # Errors
/// Returns `DimensionMismatch` when the vector length differs from the
/// model's weight count.
pub fn predict(standardized: &Array1<f64>, model: &LinearModelParams) -> Result<f64, CoreError> {
    if standardized.len() != model.feature_count() {
        return Err(CoreError::DimensionMismatch {
            expected: model.feature_count(),
            got: standardized.len(),
        });
    }

    Ok(aview1(model.weights()).dot(standardized) + model.intercept())
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn weighted_sum_plus_intercept() {
        let model = LinearModelParams::new(vec![0.5, -1.0, 2.0], 10.0);
        let raw = predict(&array![2.0, 3.0, 0.25], &model).unwrap();
        assert_eq!(raw, 10.0 + 1.0 - 3.0 + 0.5);
    }

    #[test]
    fn single_active_weight_passes_the_feature_through() {
        let mut weights = vec![0.0; 8];
        weights[0] = 1.0;
        let model = LinearModelParams::new(weights, 0.0);
        let mut input = Array1::zeros(8);
        input[0] = 3.5;
        assert_eq!(predict(&input, &model).unwrap(), 3.5);
    }

    #[test]
    fn output_is_not_clamped() {
        let model = LinearModelParams::new(vec![1.0], -100.0);
        assert_eq!(predict(&array![0.0], &model).unwrap(), -100.0);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let model = LinearModelParams::new(vec![1.0; 8], 0.0);
        let err = predict(&array![1.0], &model).unwrap_err();
        assert!(matches!(
            err,
            CoreError::DimensionMismatch {
                expected: 8,
                got: 1
            }
        ));
    }
}
