//! Nutritional quality sub-score (0-60)

use super::thresholds::{
    points, CALORIE_THRESHOLDS, FIBER_THRESHOLDS, PROTEIN_THRESHOLDS, SALT_THRESHOLDS,
    SATURATED_FAT_THRESHOLDS, SUGAR_THRESHOLDS,
};
use crate::models::NutrientProfile;

pub const MAX_NUTRITIONAL_SCORE: f64 = 60.0;

/// Sub-score used when a product has no nutrient data at all
pub const UNKNOWN_NUTRITION_SCORE: f64 = 30.0;

/// Largest possible negative point total (4 tables x 10)
const MAX_NEGATIVE_POINTS: f64 = 40.0;
/// Width of the raw score domain [-40, 13]
const RAW_SCORE_SPAN: f64 = 53.0;

/// Negative points: energy, sugar, saturated fat and salt
pub fn negative_points(profile: &NutrientProfile) -> u32 {
    points(profile.calories_for_scoring(), &CALORIE_THRESHOLDS)
        + points(profile.sugar_for_scoring(), &SUGAR_THRESHOLDS)
        + points(profile.saturated_fat_for_scoring(), &SATURATED_FAT_THRESHOLDS)
        + points(profile.salt_for_scoring(), &SALT_THRESHOLDS)
}

/// Positive points: protein and fiber
pub fn positive_points(profile: &NutrientProfile) -> u32 {
    points(profile.protein_for_scoring(), &PROTEIN_THRESHOLDS)
        + points(profile.fiber_for_scoring(), &FIBER_THRESHOLDS)
}

/// Calculate the nutritional quality sub-score
///
/// The raw score (positive minus negative points) is mapped linearly from
/// [-40, 13] onto [0, 60]. The result is left unrounded; rounding happens
/// once, when the final score is composed.
pub fn nutritional_score(profile: Option<&NutrientProfile>) -> f64 {
    let Some(profile) = profile else {
        return UNKNOWN_NUTRITION_SCORE;
    };

    let raw = positive_points(profile) as f64 - negative_points(profile) as f64;
    let normalized = ((raw + MAX_NEGATIVE_POINTS) / RAW_SCORE_SPAN) * MAX_NUTRITIONAL_SCORE;

    normalized.clamp(0.0, MAX_NUTRITIONAL_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_absent_profile_uses_midpoint() {
        assert_eq!(nutritional_score(None), 30.0);
    }

    #[test]
    fn test_zero_profile_differs_from_absent() {
        let score = nutritional_score(Some(&NutrientProfile::zero()));
        assert!(approx(score, 40.0 / 53.0 * 60.0));
        assert!((score - 45.283).abs() < 0.001);
    }

    #[test]
    fn test_worst_case_is_zero() {
        let profile = NutrientProfile {
            calories: 5000.0,
            sugar: 90.0,
            saturated_fat: 40.0,
            salt: 5.0,
            ..NutrientProfile::zero()
        };
        assert_eq!(negative_points(&profile), 40);
        assert_eq!(nutritional_score(Some(&profile)), 0.0);
    }

    #[test]
    fn test_best_case_stays_within_range() {
        let profile = NutrientProfile {
            protein: 30.0,
            fiber: 12.0,
            ..NutrientProfile::zero()
        };
        assert_eq!(positive_points(&profile), 10);
        let score = nutritional_score(Some(&profile));
        assert!(approx(score, 50.0 / 53.0 * 60.0));
        assert!(score <= MAX_NUTRITIONAL_SCORE);
    }

    #[test]
    fn test_mixed_profile() {
        // plain yogurt-like product
        let profile = NutrientProfile {
            calories: 60.0,
            sugar: 4.7,
            fat: 3.3,
            saturated_fat: 2.1,
            salt: 0.1,
            protein: 3.5,
            fiber: 0.0,
            ..NutrientProfile::zero()
        };
        assert_eq!(negative_points(&profile), 4);
        assert_eq!(positive_points(&profile), 2);
        assert!(approx(nutritional_score(Some(&profile)), 38.0 / 53.0 * 60.0));
    }

    #[test]
    fn test_fat_does_not_affect_score() {
        let lean = NutrientProfile::zero();
        let fatty = NutrientProfile {
            fat: 80.0,
            ..NutrientProfile::zero()
        };
        assert_eq!(nutritional_score(Some(&lean)), nutritional_score(Some(&fatty)));
    }
}
