//! Nutrient profile
//!
//! Per-100g (or per-100ml) nutrient values of a product.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Nutrient values per 100g/100ml
///
/// Every numeric field reads as 0 when missing, `null` or not a number.
/// A product with no nutrient data at all is represented by `Option::None`
/// at the scoring boundary, never by a zeroed profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: f64,      // kcal
    #[serde(default, deserialize_with = "lenient_number")]
    pub sugar: f64,         // grams
    #[serde(default, deserialize_with = "lenient_number")]
    pub fat: f64,           // grams
    #[serde(default, alias = "saturatedFat", deserialize_with = "lenient_number")]
    pub saturated_fat: f64, // grams
    #[serde(default, deserialize_with = "lenient_number")]
    pub salt: f64,          // grams
    #[serde(default, deserialize_with = "lenient_number")]
    pub protein: f64,       // grams
    #[serde(default, deserialize_with = "lenient_number")]
    pub fiber: f64,         // grams
    #[serde(default, alias = "servingSize", deserialize_with = "lenient_optional_number")]
    pub serving_size: Option<f64>,
    #[serde(default, alias = "servingUnit")]
    pub serving_unit: Option<String>,
}

impl NutrientProfile {
    /// Create a profile with every nutrient at zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Attach descriptive serving metadata (not used in scoring)
    pub fn with_serving(mut self, size: f64, unit: impl Into<String>) -> Self {
        self.serving_size = Some(size);
        self.serving_unit = Some(unit.into());
        self
    }

    pub fn calories_for_scoring(&self) -> f64 {
        scoring_value(self.calories)
    }

    pub fn sugar_for_scoring(&self) -> f64 {
        scoring_value(self.sugar)
    }

    pub fn saturated_fat_for_scoring(&self) -> f64 {
        scoring_value(self.saturated_fat)
    }

    pub fn salt_for_scoring(&self) -> f64 {
        scoring_value(self.salt)
    }

    pub fn protein_for_scoring(&self) -> f64 {
        scoring_value(self.protein)
    }

    pub fn fiber_for_scoring(&self) -> f64 {
        scoring_value(self.fiber)
    }
}

/// NaN carries no information; it scores like a missing value
fn scoring_value(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Deserialize a number leniently: numeric strings are parsed, anything else is 0
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).unwrap_or(0.0))
}

fn lenient_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}
