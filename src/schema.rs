use serde::Serialize;

/// One named feature slot: the build default plus range hints for a UI.
///
/// Only `name` and `default` participate in inference; the hint fields are
/// served to clients as-is and never enforced.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSlot {
    pub name: &'static str,
    pub default: f64,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub ui_default: f64,
}

/// Ordered description of the model's input features.
///
/// The slot order is the single source of truth binding the scaler, the model
/// weights and input construction together. Reordering slots silently changes
/// every prediction, so the schema is built once and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSchema {
    slots: Vec<FeatureSlot>,
}

impl FeatureSchema {
    pub fn new(slots: Vec<FeatureSlot>) -> Self {
        Self { slots }
    }

    /// The eight California-housing features, in training order.
    ///
    /// Build defaults are zero: a missing input key contributes `0.0` to the
    /// raw vector. The `ui_default` values are what a form should pre-fill.
    pub fn california() -> Self {
        let slot = |name, label, unit, min, max, step, ui_default| FeatureSlot {
            name,
            default: 0.0,
            label,
            unit,
            min,
            max,
            step,
            ui_default,
        };

        Self::new(vec![
            slot("MedInc", "Median Income", "$10,000s", 0.5, 15.0, 0.1, 3.5),
            slot("HouseAge", "House Age", "years", 1.0, 52.0, 1.0, 25.0),
            slot("AveRooms", "Average Rooms", "rooms", 1.0, 10.0, 0.1, 5.0),
            slot("AveBedrms", "Average Bedrooms", "rooms", 0.5, 5.0, 0.1, 1.0),
            slot("Population", "Population", "people", 100.0, 10000.0, 100.0, 1500.0),
            slot("AveOccup", "Average Occupancy", "people", 1.0, 10.0, 0.1, 3.0),
            slot("Latitude", "Latitude", "°N", 32.5, 42.0, 0.1, 35.5),
            slot("Longitude", "Longitude", "°W", -124.5, -114.0, 0.1, -119.5),
        ])
    }

    pub fn slots(&self) -> &[FeatureSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn california_has_eight_zero_default_slots() {
        let schema = FeatureSchema::california();
        assert_eq!(schema.len(), 8);
        assert!(schema.slots().iter().all(|s| s.default == 0.0));
    }

    #[test]
    fn california_order_matches_training() {
        let names: Vec<_> = FeatureSchema::california()
            .slots()
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            [
                "MedInc",
                "HouseAge",
                "AveRooms",
                "AveBedrms",
                "Population",
                "AveOccup",
                "Latitude",
                "Longitude"
            ]
        );
    }
}
