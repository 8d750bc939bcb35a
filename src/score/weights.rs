use serde::Serialize;

/// Institution factor weights. Defaults sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InstitutionWeights {
    pub submission_count: f64,
    pub acceptance_rate: f64,
    pub oa_ratio: f64,
    pub apc_spend: f64,
    pub non_oa_volume: f64,
}

impl Default for InstitutionWeights {
    fn default() -> Self {
        Self {
            submission_count: 0.25,
            acceptance_rate: 0.15,
            oa_ratio: 0.20,
            apc_spend: 0.30,
            non_oa_volume: 0.10,
        }
    }
}

impl InstitutionWeights {
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("submission_count", self.submission_count),
            ("acceptance_rate", self.acceptance_rate),
            ("oa_ratio", self.oa_ratio),
            ("apc_spend", self.apc_spend),
            ("non_oa_volume", self.non_oa_volume),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.entries().iter().map(|(_, weight)| weight).sum()
    }
}

/// Funder factor weights. Defaults sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FunderWeights {
    pub total_funded_articles: f64,
    pub oa_ratio: f64,
    pub total_spend: f64,
    pub subscription_volume: f64,
}

impl Default for FunderWeights {
    fn default() -> Self {
        Self {
            total_funded_articles: 0.25,
            oa_ratio: 0.20,
            total_spend: 0.30,
            subscription_volume: 0.25,
        }
    }
}

impl FunderWeights {
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("total_funded_articles", self.total_funded_articles),
            ("oa_ratio", self.oa_ratio),
            ("total_spend", self.total_spend),
            ("subscription_volume", self.subscription_volume),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.entries().iter().map(|(_, weight)| weight).sum()
    }
}
