//! Final score composition and score-derived labels

use serde::Serialize;

use super::additives::additive_penalty;
use super::nutritional::nutritional_score;
use crate::models::{Additive, Grade, HealthScore, NutrientProfile, ScoreCategory};

/// Flat bonus for products with an organic designation
pub const ORGANIC_BONUS: u32 = 10;

/// Intermediate values of one score composition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Unrounded nutritional sub-score, 0-60
    pub nutritional: f64,
    pub additive_penalty: u32,
    pub organic_bonus: u32,
    pub score: HealthScore,
}

impl ScoreBreakdown {
    pub fn grade(&self) -> Grade {
        self.score.grade()
    }

    pub fn category(&self) -> ScoreCategory {
        self.score.category()
    }
}

/// Compose the score and keep its parts
pub fn score_breakdown(
    profile: Option<&NutrientProfile>,
    additives: &[Additive],
    is_organic: bool,
) -> ScoreBreakdown {
    let nutritional = nutritional_score(profile);
    let penalty = additive_penalty(additives);
    let organic_bonus = if is_organic { ORGANIC_BONUS } else { 0 };

    let raw = nutritional - penalty as f64 + organic_bonus as f64;
    let score = HealthScore::from_raw(raw);

    tracing::trace!(
        nutritional,
        penalty,
        organic_bonus,
        score = score.value(),
        "composed health score"
    );

    ScoreBreakdown {
        nutritional,
        additive_penalty: penalty,
        organic_bonus,
        score,
    }
}

/// Calculate the final health score (0-100)
///
/// `None` for the profile means no nutrient data is known, which scores
/// differently from a profile whose nutrients are all zero.
pub fn compute_score(
    profile: Option<&NutrientProfile>,
    additives: &[Additive],
    is_organic: bool,
) -> HealthScore {
    score_breakdown(profile, additives, is_organic).score
}

pub fn grade_of(score: u8) -> Grade {
    Grade::from_score(score)
}

pub fn category_of(score: u8) -> ScoreCategory {
    ScoreCategory::from_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;
    use proptest::prelude::*;

    /// 36 negative points, no positive points: sub-score 4/53*60
    fn poor_profile() -> NutrientProfile {
        NutrientProfile {
            calories: 3350.0,
            sugar: 45.0,
            saturated_fat: 10.0,
            salt: 0.9,
            ..NutrientProfile::zero()
        }
    }

    #[test]
    fn test_absent_profile_scores_thirty() {
        assert_eq!(compute_score(None, &[], false).value(), 30);
    }

    #[test]
    fn test_zero_profile_scores_forty_five() {
        let score = compute_score(Some(&NutrientProfile::zero()), &[], false);
        assert_eq!(score.value(), 45);
        assert_eq!(score.grade(), Grade::C);
        assert_eq!(score.category(), ScoreCategory::POOR);
    }

    #[test]
    fn test_organic_bonus_crosses_d_e_boundary() {
        let profile = poor_profile();

        let plain = compute_score(Some(&profile), &[], false);
        assert_eq!(plain.value(), 5);
        assert_eq!(plain.grade(), Grade::E);

        let organic = compute_score(Some(&profile), &[], true);
        assert_eq!(organic.value(), 15);
        assert_eq!(organic.grade(), Grade::D);
    }

    #[test]
    fn test_additive_saturation_in_final_score() {
        let profile = NutrientProfile {
            protein: 10.0,
            fiber: 5.0,
            ..NutrientProfile::zero()
        };
        let hazardous = vec![Additive::with_risk(RiskLevel::Hazardous)];
        let moderates = vec![Additive::with_risk(RiskLevel::Moderate); 3];

        assert_eq!(
            compute_score(Some(&profile), &hazardous, false),
            compute_score(Some(&profile), &moderates, false)
        );
    }

    #[test]
    fn test_worst_case_clamps_to_zero() {
        let profile = NutrientProfile {
            calories: 9000.0,
            sugar: 100.0,
            saturated_fat: 60.0,
            salt: 20.0,
            ..NutrientProfile::zero()
        };
        let additives = vec![Additive::with_risk(RiskLevel::Hazardous)];

        let breakdown = score_breakdown(Some(&profile), &additives, false);
        assert_eq!(breakdown.nutritional, 0.0);
        assert_eq!(breakdown.additive_penalty, 30);
        assert_eq!(breakdown.score, HealthScore::MIN);
        assert_eq!(breakdown.grade(), Grade::E);
    }

    #[test]
    fn test_best_case_stays_under_hundred() {
        let profile = NutrientProfile {
            protein: 50.0,
            fiber: 50.0,
            ..NutrientProfile::zero()
        };
        let score = compute_score(Some(&profile), &[], true);
        // 50/53*60 + 10 = 66.6
        assert_eq!(score.value(), 67);
        assert!(score <= HealthScore::MAX);
    }

    #[test]
    fn test_breakdown_parts() {
        // yogurt-like: raw -2, sub-score 38/53*60 = 43.02
        let profile = NutrientProfile {
            calories: 60.0,
            sugar: 4.7,
            saturated_fat: 2.1,
            salt: 0.1,
            protein: 3.5,
            ..NutrientProfile::zero()
        };
        let additives = vec![Additive::new("E407", RiskLevel::Limited)];

        let breakdown = score_breakdown(Some(&profile), &additives, true);
        assert!((breakdown.nutritional - 43.018).abs() < 0.001);
        assert_eq!(breakdown.additive_penalty, 5);
        assert_eq!(breakdown.organic_bonus, 10);
        assert_eq!(breakdown.score.value(), 48);
        assert_eq!(breakdown.grade(), Grade::C);
        assert_eq!(breakdown.category(), ScoreCategory::POOR);
    }

    #[test]
    fn test_rounds_once_at_composition() {
        // sub-score 4.528 stays unrounded: 4.528 + 10 = 14.528 -> 15, not 5 + 10
        let breakdown = score_breakdown(Some(&poor_profile()), &[], true);
        assert!((breakdown.nutritional - 4.528).abs() < 0.001);
        assert_eq!(breakdown.score.value(), 15);
    }

    #[test]
    fn test_grade_and_category_helpers() {
        assert_eq!(grade_of(75), Grade::A);
        assert_eq!(grade_of(9), Grade::E);
        assert_eq!(category_of(50), ScoreCategory::GOOD);
        assert_eq!(category_of(10), ScoreCategory::BAD);
    }

    fn risk_strategy() -> impl Strategy<Value = RiskLevel> {
        prop_oneof![
            Just(RiskLevel::None),
            Just(RiskLevel::Limited),
            Just(RiskLevel::Moderate),
            Just(RiskLevel::Hazardous),
            Just(RiskLevel::Unknown),
        ]
    }

    fn profile_strategy() -> impl Strategy<Value = Option<NutrientProfile>> {
        proptest::option::of(
            (
                0.0..5000.0f64,
                0.0..100.0f64,
                0.0..100.0f64,
                0.0..10.0f64,
                0.0..50.0f64,
                0.0..30.0f64,
            )
                .prop_map(|(calories, sugar, saturated_fat, salt, protein, fiber)| {
                    NutrientProfile {
                        calories,
                        sugar,
                        saturated_fat,
                        salt,
                        protein,
                        fiber,
                        ..NutrientProfile::zero()
                    }
                }),
        )
    }

    proptest! {
        /// Property: score always lies within 0..=100.
        #[test]
        fn score_in_range(
            profile in profile_strategy(),
            levels in proptest::collection::vec(risk_strategy(), 0..8),
            organic in any::<bool>(),
        ) {
            let additives: Vec<Additive> = levels.into_iter().map(Additive::with_risk).collect();
            let score = compute_score(profile.as_ref(), &additives, organic);
            prop_assert!(score.value() <= 100);
        }

        /// Property: identical inputs give identical results.
        #[test]
        fn score_is_deterministic(
            profile in profile_strategy(),
            levels in proptest::collection::vec(risk_strategy(), 0..8),
            organic in any::<bool>(),
        ) {
            let additives: Vec<Additive> = levels.into_iter().map(Additive::with_risk).collect();
            let first = score_breakdown(profile.as_ref(), &additives, organic);
            let second = score_breakdown(profile.as_ref(), &additives, organic);
            prop_assert_eq!(first, second);
        }

        /// Property: additive order never changes the score.
        #[test]
        fn additive_order_irrelevant(
            profile in profile_strategy(),
            levels in proptest::collection::vec(risk_strategy(), 0..8),
        ) {
            let forward: Vec<Additive> = levels.iter().copied().map(Additive::with_risk).collect();
            let reversed: Vec<Additive> = forward.iter().rev().cloned().collect();
            prop_assert_eq!(
                compute_score(profile.as_ref(), &forward, false),
                compute_score(profile.as_ref(), &reversed, false)
            );
        }
    }
}
