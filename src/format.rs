use serde::Serialize;

use crate::error::CoreError;

/// Model output in native units ($100K), full currency and display forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Prediction in the model's native unit, rounded to two decimals.
    pub price_units: f64,
    /// Prediction in whole currency units.
    pub price_currency: f64,
    /// `price_currency` with a currency sign and thousands separators.
    pub display: String,
}

/// Converts a raw model output into a [`PredictionResult`].
///
/// The model predicts in hundreds of thousands of currency units, per the
/// training convention.
///
/// # Errors
/// Returns `InvalidPrediction` when `raw` is NaN or infinite.
pub fn format_prediction(raw: f64) -> Result<PredictionResult, CoreError> {
    if !raw.is_finite() {
        return Err(CoreError::InvalidPrediction);
    }

    let price_units = (raw * 100.0).round() / 100.0;
    let price_currency = (raw * 100_000.0).round();

    Ok(PredictionResult {
        price_units,
        price_currency,
        display: format_currency(price_currency),
    })
}

fn format_currency(amount: f64) -> String {
    let digits = format!("{:.0}", amount.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("${sign}{grouped}")
}
