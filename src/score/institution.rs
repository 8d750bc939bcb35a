use super::weights::InstitutionWeights;
use super::{check_amount, combine, Factor, Normalization};
use crate::error::Result;
use crate::types::entity::InstitutionMetrics;
use crate::types::scoring::{Score, ScoreBreakdown};

const VOLUME_MULTIPLIER: f64 = 20.0;
const SPEND_MULTIPLIER: f64 = 15.0;
const ACCEPTANCE_BOOST: f64 = 1.2;

pub fn calculate_institution_score(
    submission_count: u64,
    accepted_count: u64,
    oa_count: u64,
    subscription_count: u64,
    apc_spend: f64,
) -> Result<Score> {
    let metrics = InstitutionMetrics {
        submission_count,
        accepted_count,
        oa_count,
        subscription_count,
        apc_spend,
    };
    score_institution(&metrics, &InstitutionWeights::default()).map(|breakdown| breakdown.score)
}

pub fn score_institution(
    metrics: &InstitutionMetrics,
    weights: &InstitutionWeights,
) -> Result<ScoreBreakdown> {
    let apc_spend = check_amount("apc_spend", metrics.apc_spend)?;

    Ok(combine(&[
        Factor::new(
            "submission_count",
            metrics.submission_count as f64,
            Normalization::CappedLog {
                multiplier: VOLUME_MULTIPLIER,
            },
            weights.submission_count,
        ),
        Factor::new(
            "acceptance_rate",
            metrics.accepted_count as f64,
            Normalization::Ratio {
                denominator: metrics.submission_count as f64,
                boost: ACCEPTANCE_BOOST,
                capped: true,
            },
            weights.acceptance_rate,
        ),
        Factor::new(
            "oa_ratio",
            metrics.oa_count as f64,
            Normalization::Ratio {
                denominator: metrics.accepted_count as f64,
                boost: 1.0,
                capped: false,
            },
            weights.oa_ratio,
        ),
        Factor::new(
            "apc_spend",
            apc_spend,
            Normalization::CappedLog {
                multiplier: SPEND_MULTIPLIER,
            },
            weights.apc_spend,
        ),
        Factor::new(
            "non_oa_volume",
            metrics.subscription_count as f64,
            Normalization::CappedLog {
                multiplier: VOLUME_MULTIPLIER,
            },
            weights.non_oa_volume,
        ),
    ]))
}
