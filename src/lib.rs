//! foodscore library
//!
//! Health scoring for food products: a 0-100 score from nutrients, additive
//! risk and organic status, with a letter grade and display category.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod feed;
pub mod models;
pub mod scoring;

pub use models::{Additive, Grade, HealthScore, NutrientProfile, RiskLevel, ScoreCategory};
pub use scoring::{category_of, compute_score, grade_of, score_breakdown, ScoreBreakdown};
