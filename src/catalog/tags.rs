//! Additive tag parsing
//!
//! Product feeds tag additives as `en:e330`, `fr:e150a` and so on.

use super::tables::{display_name, risk_level_for, UNCATALOGUED_RISK};
use crate::models::Additive;

/// Strip a leading language prefix (`en:`) and uppercase the rest
///
/// Only a prefix made of lowercase ASCII letters and hyphens counts as a
/// language prefix; anything else is kept as part of the code.
pub fn normalize_additive_code(tag: &str) -> String {
    let trimmed = tag.trim();

    let code = match trimmed.split_once(':') {
        Some((prefix, rest)) if is_language_prefix(prefix) => rest,
        _ => trimmed,
    };

    code.to_uppercase()
}

fn is_language_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_lowercase() || c == '-')
}

/// Whether a normalized code is an E-number (`E` followed by a digit)
fn is_e_number(code: &str) -> bool {
    let mut chars = code.chars();
    chars.next() == Some('E') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Parse one additive tag
///
/// Returns `None` for tags that are not E-numbers. Codes missing from the
/// catalog get [`UNCATALOGUED_RISK`] and use the code itself as their name.
pub fn parse_additive_tag(tag: &str) -> Option<Additive> {
    let code = normalize_additive_code(tag);
    if !is_e_number(&code) {
        return None;
    }

    let risk_level = risk_level_for(&code).unwrap_or(UNCATALOGUED_RISK);
    let name = display_name(&code)
        .map(str::to_string)
        .unwrap_or_else(|| code.clone());

    Some(Additive {
        code,
        name: Some(name),
        description: None,
        risk_level,
    })
}

/// Parse a list of additive tags, keeping order and dropping non E-numbers
pub fn parse_additive_tags<S: AsRef<str>>(tags: &[S]) -> Vec<Additive> {
    tags.iter()
        .filter_map(|tag| parse_additive_tag(tag.as_ref()))
        .collect()
}
