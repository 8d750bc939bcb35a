use crate::error::OpportunityError;
use crate::rank::DealStatus;
use crate::score::weights::{FunderWeights, InstitutionWeights};
use crate::types::scoring::{Score, Tiers};
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpportunityConfig {
    pub project: Option<ProjectConfig>,
    pub weights: Option<WeightsConfig>,
    pub ranking: Option<RankingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    pub institution: Option<HashMap<String, f64>>,
    pub funder: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    pub high_threshold: Option<Score>,
    pub medium_threshold: Option<Score>,
    #[serde(default)]
    pub include_existing_deals: bool,
    /// Takes precedence over `include_existing_deals` when set.
    pub deals: Option<DealStatus>,
}

impl OpportunityConfig {
    pub fn currency(&self) -> &str {
        self.project
            .as_ref()
            .map(|project| project.currency.as_str())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    pub fn institution_weights(&self) -> InstitutionWeights {
        let defaults = InstitutionWeights::default();
        match self
            .weights
            .as_ref()
            .and_then(|weights| weights.institution.as_ref())
        {
            Some(table) => InstitutionWeights {
                submission_count: *table
                    .get("submission_count")
                    .unwrap_or(&defaults.submission_count),
                acceptance_rate: *table
                    .get("acceptance_rate")
                    .unwrap_or(&defaults.acceptance_rate),
                oa_ratio: *table.get("oa_ratio").unwrap_or(&defaults.oa_ratio),
                apc_spend: *table.get("apc_spend").unwrap_or(&defaults.apc_spend),
                non_oa_volume: *table
                    .get("non_oa_volume")
                    .unwrap_or(&defaults.non_oa_volume),
            },
            None => defaults,
        }
    }

    pub fn funder_weights(&self) -> FunderWeights {
        let defaults = FunderWeights::default();
        match self
            .weights
            .as_ref()
            .and_then(|weights| weights.funder.as_ref())
        {
            Some(table) => FunderWeights {
                total_funded_articles: *table
                    .get("total_funded_articles")
                    .unwrap_or(&defaults.total_funded_articles),
                oa_ratio: *table.get("oa_ratio").unwrap_or(&defaults.oa_ratio),
                total_spend: *table.get("total_spend").unwrap_or(&defaults.total_spend),
                subscription_volume: *table
                    .get("subscription_volume")
                    .unwrap_or(&defaults.subscription_volume),
            },
            None => defaults,
        }
    }

    pub fn tiers(&self) -> Tiers {
        let defaults = Tiers::default();
        match &self.ranking {
            Some(ranking) => Tiers {
                high: ranking.high_threshold.unwrap_or(defaults.high),
                medium: ranking.medium_threshold.unwrap_or(defaults.medium),
            },
            None => defaults,
        }
    }

    pub fn deal_status(&self) -> DealStatus {
        match &self.ranking {
            Some(RankingConfig {
                deals: Some(deals), ..
            }) => *deals,
            Some(ranking) if ranking.include_existing_deals => DealStatus::All,
            _ => DealStatus::default(),
        }
    }

    pub fn validate(&self) -> Result<(), OpportunityError> {
        if let Some(weights) = &self.weights {
            if let Some(table) = &weights.institution {
                reject_unknown_keys(
                    "weights.institution",
                    table,
                    &InstitutionWeights::default().entries().map(|(key, _)| key),
                )?;
            }
            if let Some(table) = &weights.funder {
                reject_unknown_keys(
                    "weights.funder",
                    table,
                    &FunderWeights::default().entries().map(|(key, _)| key),
                )?;
            }
        }

        validate_weight_table("weights.institution", &self.institution_weights().entries())?;
        validate_weight_table("weights.funder", &self.funder_weights().entries())?;

        let tiers = self.tiers();
        if tiers.high > 100 {
            return Err(OpportunityError::ConfigParse(format!(
                "ranking.high_threshold must be at most 100 (found {})",
                tiers.high
            )));
        }
        if tiers.medium > tiers.high {
            return Err(OpportunityError::ConfigParse(format!(
                "ranking.medium_threshold ({}) cannot exceed ranking.high_threshold ({})",
                tiers.medium, tiers.high
            )));
        }

        Ok(())
    }
}

fn reject_unknown_keys(
    section: &str,
    table: &HashMap<String, f64>,
    allowed: &[&'static str],
) -> Result<(), OpportunityError> {
    let mut unknown = table
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort();
    Err(OpportunityError::ConfigParse(format!(
        "{section} contains unknown key(s): {}",
        unknown.join(", ")
    )))
}

fn validate_weight_table(
    section: &str,
    entries: &[(&'static str, f64)],
) -> Result<(), OpportunityError> {
    if let Some((key, weight)) = entries
        .iter()
        .find(|(_, weight)| !(0.0..=1.0).contains(weight))
    {
        return Err(OpportunityError::ConfigParse(format!(
            "{section}.{key} must be between 0.0 and 1.0 (found {weight})"
        )));
    }
    let weight_sum: f64 = entries.iter().map(|(_, weight)| weight).sum();
    if (weight_sum - 1.0).abs() > 0.001 {
        return Err(OpportunityError::ConfigParse(format!(
            "{section} must sum to 1.0 (found {:.3})",
            weight_sum
        )));
    }
    Ok(())
}
