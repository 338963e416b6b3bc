//! Additive model
//!
//! An additive attached to a product and its risk classification.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Risk classification of an additive
///
/// Any label outside the four known levels, and a missing label, is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    None,
    Limited,
    Moderate,
    Hazardous,
    #[default]
    Unknown,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "none",
            RiskLevel::Limited => "limited",
            RiskLevel::Moderate => "moderate",
            RiskLevel::Hazardous => "hazardous",
            RiskLevel::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "none" => RiskLevel::None,
            "limited" => RiskLevel::Limited,
            "moderate" => RiskLevel::Moderate,
            "hazardous" => RiskLevel::Hazardous,
            _ => RiskLevel::Unknown,
        }
    }

    /// Points deducted from the health score for one additive at this level
    pub fn penalty(&self) -> u32 {
        match self {
            RiskLevel::None => 0,
            RiskLevel::Limited => 5,
            RiskLevel::Moderate => 15,
            RiskLevel::Hazardous => 30,
            RiskLevel::Unknown => 0,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => RiskLevel::from_str(&s),
            _ => RiskLevel::Unknown,
        })
    }
}

/// A food additive
///
/// Only `risk_level` takes part in scoring; the rest is display metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Additive {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "riskLevel")]
    pub risk_level: RiskLevel,
}

impl Additive {
    pub fn new(code: impl Into<String>, risk_level: RiskLevel) -> Self {
        Self {
            code: code.into(),
            name: None,
            description: None,
            risk_level,
        }
    }

    /// An additive known only by its risk level
    pub fn with_risk(risk_level: RiskLevel) -> Self {
        Self {
            risk_level,
            ..Self::default()
        }
    }

    pub fn penalty(&self) -> u32 {
        self.risk_level.penalty()
    }
}
