use ndarray::Array1;

use crate::artifacts::StandardizationParams;
use crate::error::CoreError;

/// Applies the fitted affine transform `(x - mean) / scale` per feature.
///
/// Index `i` of the input must be the same feature that `mean[i]`/`scale[i]`
/// were fitted on; any reordering produces silently wrong predictions, which
/// is why the vector is only ever built through the schema.
///
/// # Errors
/// Returns `DimensionMismatch` when the vector length differs from the
/// fitted feature count.
pub fn standardize(
    vector: &Array1<f64>,
    params: &StandardizationParams,
) -> Result<Array1<f64>, CoreError> {
    if vector.len() != params.feature_count() {
        return Err(CoreError::DimensionMismatch {
            expected: params.feature_count(),
            got: vector.len(),
        });
    }

    Ok(vector
        .iter()
        .enumerate()
        .map(|(i, &x)| (x - params.mean_at(i)) / params.scale_at(i))
        .collect())
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn identity_params_leave_the_vector_unchanged() {
        let params = StandardizationParams::new(vec![0.0; 3], vec![1.0; 3]);
        let raw = array![1.5, -2.0, 0.25];
        assert_eq!(standardize(&raw, &params).unwrap(), raw);
    }

    #[test]
    fn shifts_and_scales_per_feature() {
        let params = StandardizationParams::new(vec![1.0, 10.0], vec![2.0, 5.0]);
        let out = standardize(&array![3.0, 0.0], &params).unwrap();
        assert_eq!(out, array![1.0, -2.0]);
    }

    #[test]
    fn destandardize_recovers_the_input() {
        let params =
            StandardizationParams::new(vec![3.87, 28.6, 5.4, 1.1], vec![1.9, 12.6, 2.5, 0.47]);
        let raw = array![8.3252, 41.0, 6.9841, 1.0238];

        let standardized = standardize(&raw, &params).unwrap();
        for (i, &z) in standardized.iter().enumerate() {
            let back = z * params.scale_at(i) + params.mean_at(i);
            assert!((back - raw[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let params = StandardizationParams::new(vec![0.0; 8], vec![1.0; 8]);
        let err = standardize(&array![1.0, 2.0], &params).unwrap_err();
        assert!(matches!(
            err,
            CoreError::DimensionMismatch {
                expected: 8,
                got: 2
            }
        ));
    }
}
