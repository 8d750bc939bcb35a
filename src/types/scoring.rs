use serde::Serialize;

/// Final opportunity score, always within `0..=100`.
pub type Score = u8;

pub const MAX_SCORE: f64 = 100.0;

/// One normalized factor as it contributed to a final score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorScore {
    pub name: &'static str,
    pub raw: f64,
    pub normalized: f64,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorScore>,
    pub weighted_total: f64,
    pub score: Score,
}

impl ScoreBreakdown {
    pub fn factor(&self, name: &str) -> Option<&FactorScore> {
        self.factors.iter().find(|factor| factor.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

/// Score cut-offs used to bucket ranked entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiers {
    pub high: Score,
    pub medium: Score,
}

impl Default for Tiers {
    fn default() -> Self {
        Self {
            high: 85,
            medium: 70,
        }
    }
}

impl Tiers {
    pub fn classify(&self, score: Score) -> Tier {
        if score >= self.high {
            Tier::High
        } else if score >= self.medium {
            Tier::Medium
        } else {
            Tier::Low
        }
    }
}
