//! Additive catalog
//!
//! Reference risk levels and display names for E-number additives, and
//! parsing of product-feed additive tags. The scoring engine does not depend
//! on this catalog; it works with any risk assignment.

pub mod tables;
pub mod tags;

pub use tables::{display_name, risk_level_for, UNCATALOGUED_RISK};
pub use tags::{normalize_additive_code, parse_additive_tag, parse_additive_tags};
