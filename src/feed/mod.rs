//! Product feed scoring
//!
//! Maps Open Food Facts product records onto the scoring engine's inputs and
//! attaches the resulting score, grade and category.

pub mod product;
pub mod record;
pub mod runner;

use thiserror::Error;

pub use product::{is_organic_label, ScoredProduct, FEED_SOURCE};
pub use record::{OffNutriments, OffProduct};
pub use runner::{score_feed, score_line, FeedSummary};

/// Feed processing error types
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Feed I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feed JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;
