use super::weights::FunderWeights;
use super::{check_amount, combine, Factor, Normalization};
use crate::error::Result;
use crate::types::entity::FunderMetrics;
use crate::types::scoring::{Score, ScoreBreakdown};

const VOLUME_MULTIPLIER: f64 = 20.0;
const SPEND_MULTIPLIER: f64 = 15.0;

pub fn calculate_funder_score(
    total_funded_articles: u64,
    oa_articles: u64,
    subscription_articles: u64,
    total_spend: f64,
) -> Result<Score> {
    let metrics = FunderMetrics {
        total_funded_articles,
        oa_articles,
        subscription_articles,
        total_spend,
    };
    score_funder(&metrics, &FunderWeights::default()).map(|breakdown| breakdown.score)
}

pub fn score_funder(metrics: &FunderMetrics, weights: &FunderWeights) -> Result<ScoreBreakdown> {
    let total_spend = check_amount("total_spend", metrics.total_spend)?;

    Ok(combine(&[
        Factor::new(
            "total_funded_articles",
            metrics.total_funded_articles as f64,
            Normalization::CappedLog {
                multiplier: VOLUME_MULTIPLIER,
            },
            weights.total_funded_articles,
        ),
        Factor::new(
            "oa_ratio",
            metrics.oa_articles as f64,
            Normalization::Ratio {
                denominator: metrics.total_funded_articles as f64,
                boost: 1.0,
                capped: false,
            },
            weights.oa_ratio,
        ),
        Factor::new(
            "total_spend",
            total_spend,
            Normalization::CappedLog {
                multiplier: SPEND_MULTIPLIER,
            },
            weights.total_spend,
        ),
        Factor::new(
            "subscription_volume",
            metrics.subscription_articles as f64,
            Normalization::CappedLog {
                multiplier: VOLUME_MULTIPLIER,
            },
            weights.subscription_volume,
        ),
    ]))
}
