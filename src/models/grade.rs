//! Score, grade and display category
//!
//! Grade and category are pure functions of the integer health score.

use serde::Serialize;

/// Integer health score, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HealthScore(u8);

impl HealthScore {
    pub const MIN: HealthScore = HealthScore(0);
    pub const MAX: HealthScore = HealthScore(100);

    /// Round half away from zero, then clamp into 0..=100
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::MIN;
        }
        let rounded = raw.round().clamp(0.0, 100.0);
        HealthScore(rounded as u8)
    }

    /// Clamp an integer score into 0..=100
    pub fn new(value: u8) -> Self {
        HealthScore(value.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.0)
    }

    pub fn category(&self) -> ScoreCategory {
        ScoreCategory::from_score(self.0)
    }
}

impl From<HealthScore> for u8 {
    fn from(score: HealthScore) -> u8 {
        score.0
    }
}

impl std::fmt::Display for HealthScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letter grade in the style of front-of-pack nutrition labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => Grade::A,
            50..=74 => Grade::B,
            25..=49 => Grade::C,
            10..=24 => Grade::D,
            _ => Grade::E,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }

    /// Parse a grade letter, case-insensitive
    pub fn from_letter(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Some(Grade::A),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            "E" => Some(Grade::E),
            _ => None,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display bucket for a score: a label and its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreCategory {
    pub label: &'static str,
    pub color: &'static str,
}

impl ScoreCategory {
    pub const EXCELLENT: ScoreCategory = ScoreCategory {
        label: "Excellent",
        color: "#4CAF50",
    };
    pub const GOOD: ScoreCategory = ScoreCategory {
        label: "Good",
        color: "#8BC34A",
    };
    pub const POOR: ScoreCategory = ScoreCategory {
        label: "Poor",
        color: "#FF9800",
    };
    pub const BAD: ScoreCategory = ScoreCategory {
        label: "Bad",
        color: "#F44336",
    };

    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => Self::EXCELLENT,
            50..=74 => Self::GOOD,
            25..=49 => Self::POOR,
            _ => Self::BAD,
        }
    }
}
