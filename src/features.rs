use ndarray::Array1;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::schema::FeatureSchema;

/// Builds the raw feature vector from a JSON object, in schema order.
///
/// Missing keys take the slot's declared default; extra keys are ignored.
/// Numbers are used as-is and numeric strings are parsed, matching the
/// leniency of the original serving endpoint.
///
/// # Errors
/// Returns `InvalidFeatureValue` when a present value is neither a number
/// nor a string parseable as one.
pub fn build_vector(
    input: &Map<String, Value>,
    schema: &FeatureSchema,
) -> Result<Array1<f64>, CoreError> {
    let mut values = Vec::with_capacity(schema.len());
    for slot in schema.slots() {
        let value = match input.get(slot.name) {
            None => slot.default,
            Some(v) => coerce(v).ok_or_else(|| CoreError::InvalidFeatureValue {
                name: slot.name.to_string(),
            })?,
        };
        values.push(value);
    }
    Ok(Array1::from_vec(values))
}

fn coerce(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn empty_input_yields_all_defaults() {
        let schema = FeatureSchema::california();
        let vector = build_vector(&Map::new(), &schema).unwrap();
        assert_eq!(vector.len(), 8);
        assert!(vector.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn values_land_in_schema_order() {
        let schema = FeatureSchema::california();
        let input = as_map(json!({"HouseAge": 25, "MedInc": 3.5}));
        let vector = build_vector(&input, &schema).unwrap();
        assert_eq!(vector[0], 3.5);
        assert_eq!(vector[1], 25.0);
        assert_eq!(vector[2], 0.0);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let schema = FeatureSchema::california();
        let input = as_map(json!({"MedInc": " 4.25 "}));
        let vector = build_vector(&input, &schema).unwrap();
        assert_eq!(vector[0], 4.25);
    }

    #[test]
    fn non_numeric_text_is_rejected_by_name() {
        let schema = FeatureSchema::california();
        let input = as_map(json!({"Population": "a lot"}));
        let err = build_vector(&input, &schema).unwrap_err();
        match err {
            CoreError::InvalidFeatureValue { name } => assert_eq!(name, "Population"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn null_and_bool_are_rejected() {
        let schema = FeatureSchema::california();
        for bad in [json!({"MedInc": null}), json!({"MedInc": true})] {
            let err = build_vector(&as_map(bad), &schema).unwrap_err();
            assert!(matches!(err, CoreError::InvalidFeatureValue { .. }));
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let schema = FeatureSchema::california();
        let input = as_map(json!({"NotAFeature": "garbage"}));
        let vector = build_vector(&input, &schema).unwrap();
        assert_eq!(vector.len(), 8);
    }
}
