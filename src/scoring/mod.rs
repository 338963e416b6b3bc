//! Health score calculation
//!
//! Score composition (0-100):
//! - Nutritional quality: up to 60 points
//! - Additive penalty: up to 30 points deducted
//! - Organic bonus: 10 points

pub mod additives;
pub mod composer;
pub mod nutritional;
pub mod thresholds;

pub use additives::{additive_penalty, MAX_ADDITIVE_PENALTY};
pub use composer::{
    category_of, compute_score, grade_of, score_breakdown, ScoreBreakdown, ORGANIC_BONUS,
};
pub use nutritional::{nutritional_score, MAX_NUTRITIONAL_SCORE, UNKNOWN_NUTRITION_SCORE};
pub use thresholds::points;
