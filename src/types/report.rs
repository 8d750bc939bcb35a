use crate::types::entity::EntityKind;
use crate::types::scoring::{Score, ScoreBreakdown, Tier};
use serde::Serialize;

/// Volume and revenue outlook attached to a ranked entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub potential_oa_growth: u64,
    pub current_spend: f64,
    /// Projected spend for years 1, 2 and 3.
    pub revenue_by_year: [f64; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub kind: EntityKind,
    pub id: u32,
    pub name: String,
    pub country: String,
    pub has_existing_deal: bool,
    pub score: Score,
    pub tier: Tier,
    pub success_likelihood_pct: u8,
    pub projection: Projection,
    pub breakdown: ScoreBreakdown,
}

/// Entries that passed the filters, plus records that could not be scored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ranking {
    pub entries: Vec<RankedEntry>,
    pub skipped: Vec<Finding>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FunderKindCounts {
    pub government: usize,
    pub private: usize,
    pub ngo: usize,
    pub academic: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub institution_count: usize,
    pub funder_count: usize,
    pub total_submissions: u64,
    pub total_accepted: u64,
    pub total_oa: u64,
    pub total_subscription: u64,
    /// Rounded share of accepted articles published open access; 0 when nothing was accepted.
    pub oa_share_pct: u32,
    pub total_apc_spend: f64,
    pub total_funded_articles: u64,
    pub total_funder_spend: f64,
    pub funder_kinds: FunderKindCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpportunityReport {
    pub generated_at: String,
    pub currency: String,
    pub summary: DatasetSummary,
    pub institutions: Option<Vec<RankedEntry>>,
    pub funders: Option<Vec<RankedEntry>>,
    pub skipped: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub id: String,
    pub entity: String,
    pub body: String,
}
