//! Open Food Facts product record
//!
//! Only the fields the scorer and the scored output need are read.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{lenient_number, NutrientProfile};

/// Nutriment values per 100g as published in the feed
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OffNutriments {
    #[serde(rename = "energy-kcal_100g", default, deserialize_with = "lenient_number")]
    pub energy_kcal_100g: f64,
    #[serde(rename = "sugars_100g", default, deserialize_with = "lenient_number")]
    pub sugars_100g: f64,
    #[serde(rename = "fat_100g", default, deserialize_with = "lenient_number")]
    pub fat_100g: f64,
    #[serde(rename = "saturated-fat_100g", default, deserialize_with = "lenient_number")]
    pub saturated_fat_100g: f64,
    #[serde(rename = "salt_100g", default, deserialize_with = "lenient_number")]
    pub salt_100g: f64,
    #[serde(rename = "proteins_100g", default, deserialize_with = "lenient_number")]
    pub proteins_100g: f64,
    #[serde(rename = "fiber_100g", default, deserialize_with = "lenient_number")]
    pub fiber_100g: f64,
}

impl OffNutriments {
    /// Convert to a nutrient profile on a 100g serving basis
    pub fn to_profile(&self) -> NutrientProfile {
        NutrientProfile {
            calories: self.energy_kcal_100g,
            sugar: self.sugars_100g,
            fat: self.fat_100g,
            saturated_fat: self.saturated_fat_100g,
            salt: self.salt_100g,
            protein: self.proteins_100g,
            fiber: self.fiber_100g,
            ..NutrientProfile::zero()
        }
        .with_serving(100.0, "g")
    }
}

/// One product from an Open Food Facts export or API response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OffProduct {
    #[serde(default, deserialize_with = "non_empty_text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub product_name_en: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub brands: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub image_front_url: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub ingredients_text: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub ingredients_text_en: Option<String>,
    #[serde(default)]
    pub nutriments: Option<OffNutriments>,
    #[serde(default)]
    pub additives_tags: Option<Vec<String>>,
    #[serde(default)]
    pub labels_tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub nutriscore_grade: Option<String>,
}

/// Strings and numbers become text; empty strings, null and anything else are absent
///
/// Whitespace-only strings are kept: only a truly empty value counts as missing.
fn non_empty_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
