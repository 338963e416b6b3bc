//! Additive risk penalty (0-30)

use crate::models::Additive;

/// A single hazardous additive already saturates the penalty
pub const MAX_ADDITIVE_PENALTY: u32 = 30;

/// Sum the per-additive risk penalties, capped at [`MAX_ADDITIVE_PENALTY`]
pub fn additive_penalty(additives: &[Additive]) -> u32 {
    let total: u32 = additives.iter().map(Additive::penalty).sum();
    total.min(MAX_ADDITIVE_PENALTY)
}
