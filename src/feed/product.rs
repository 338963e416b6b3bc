//! Scored product
//!
//! A feed record with the health score, grade and category attached.

use serde::Serialize;

use super::record::OffProduct;
use crate::catalog::parse_additive_tags;
use crate::models::{Additive, Grade, HealthScore, NutrientProfile, ScoreCategory};
use crate::scoring::compute_score;

/// Source tag written on every product built from the feed
pub const FEED_SOURCE: &str = "OpenFoodFacts";

const UNKNOWN_BRAND: &str = "Unknown Brand";

/// A product ready to be stored or returned to a client
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProduct {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub image_url: Option<String>,
    pub ingredients: Option<String>,
    pub is_organic: bool,
    pub nutrition: Option<NutrientProfile>,
    pub additives: Vec<Additive>,
    pub score: HealthScore,
    /// Grade derived from our own score
    pub grade: Grade,
    /// Grade reported by the feed, falling back to `grade`
    pub nutri_score_grade: Grade,
    pub category: ScoreCategory,
    pub source: &'static str,
}

/// Whether any label marks the product as organic
pub fn is_organic_label<S: AsRef<str>>(labels: &[S]) -> bool {
    labels.iter().any(|label| {
        let lower = label.as_ref().to_lowercase();
        lower.contains("organic") || lower.contains("bio")
    })
}

impl ScoredProduct {
    /// Score a feed record
    ///
    /// Returns `None` when the record has no barcode or no product name.
    pub fn from_off(record: OffProduct) -> Option<Self> {
        let barcode = record.code?;
        let name = record.product_name.or(record.product_name_en)?;

        let nutrition = record.nutriments.as_ref().map(|n| n.to_profile());
        let additives = parse_additive_tags(record.additives_tags.as_deref().unwrap_or_default());
        let is_organic = is_organic_label(record.labels_tags.as_deref().unwrap_or_default());

        let score = compute_score(nutrition.as_ref(), &additives, is_organic);
        let grade = score.grade();
        let nutri_score_grade = record
            .nutriscore_grade
            .as_deref()
            .and_then(Grade::from_letter)
            .unwrap_or(grade);

        Some(Self {
            barcode,
            name,
            brand: record.brands.unwrap_or_else(|| UNKNOWN_BRAND.to_string()),
            image_url: record.image_front_url.or(record.image_url),
            ingredients: record.ingredients_text.or(record.ingredients_text_en),
            is_organic,
            nutrition,
            additives,
            score,
            grade,
            nutri_score_grade,
            category: score.category(),
            source: FEED_SOURCE,
        })
    }
}
