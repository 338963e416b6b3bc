//! Data models
//!
//! Value types consumed and produced by the scoring engine.

mod additive;
mod grade;
mod nutrition;

pub use additive::{Additive, RiskLevel};
pub use grade::{Grade, HealthScore, ScoreCategory};
pub use nutrition::NutrientProfile;

pub(crate) use nutrition::lenient_number;
