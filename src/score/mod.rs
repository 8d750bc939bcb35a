//! Weighted-normalization scoring shared by the institution and funder scorers.
//!
//! Every entity scorer is a list of [`Factor`]s handed to [`combine`]: each raw value
//! is normalized onto a 0-100 scale, multiplied by its weight, and the weighted total
//! is clamped to `0..=100` and rounded half away from zero.

pub mod funder;
pub mod institution;
pub mod normalize;
pub mod weights;

pub use funder::{calculate_funder_score, score_funder};
pub use institution::{calculate_institution_score, score_institution};

use crate::error::{OpportunityError, Result};
use crate::types::scoring::{FactorScore, Score, ScoreBreakdown, MAX_SCORE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// `min(100, multiplier * log10(value + 1))`
    CappedLog { multiplier: f64 },
    /// `value / denominator * 100 * boost`, capped at 100 when `capped` is set.
    Ratio {
        denominator: f64,
        boost: f64,
        capped: bool,
    },
}

impl Normalization {
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Normalization::CappedLog { multiplier } => normalize::cap_log(value, multiplier),
            Normalization::Ratio {
                denominator,
                boost,
                capped,
            } => normalize::ratio_score(value, denominator, boost, capped),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factor {
    pub name: &'static str,
    pub value: f64,
    pub normalization: Normalization,
    pub weight: f64,
}

impl Factor {
    pub fn new(name: &'static str, value: f64, normalization: Normalization, weight: f64) -> Self {
        Self {
            name,
            value,
            normalization,
            weight,
        }
    }
}

pub fn combine(factors: &[Factor]) -> ScoreBreakdown {
    let factors = factors
        .iter()
        .map(|factor| {
            let normalized = factor.normalization.apply(factor.value);
            FactorScore {
                name: factor.name,
                raw: factor.value,
                normalized,
                weight: factor.weight,
                contribution: normalized * factor.weight,
            }
        })
        .collect::<Vec<_>>();
    let weighted_total = factors.iter().map(|factor| factor.contribution).sum();

    ScoreBreakdown {
        factors,
        weighted_total,
        score: finalize(weighted_total),
    }
}

/// Clamp to `0..=100` and round half away from zero.
pub fn finalize(weighted_total: f64) -> Score {
    if weighted_total.is_nan() {
        return 0;
    }
    weighted_total.clamp(0.0, MAX_SCORE).round() as Score
}

/// Rejects monetary inputs that are negative or not finite.
pub(crate) fn check_amount(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(OpportunityError::NonFiniteInput { field, value });
    }
    if value < 0.0 {
        return Err(OpportunityError::NegativeInput { field, value });
    }
    Ok(value)
}
