pub mod json;
pub mod md;

use crate::error::{OpportunityError, Result};
use crate::rank::{self, RankQuery};
use crate::types::config::OpportunityConfig;
use crate::types::entity::Dataset;
use crate::types::report::OpportunityReport;
use chrono::{SecondsFormat, Utc};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitySelection {
    All,
    Institutions,
    Funders,
}

/// Ranks the selected entity kinds. Records that cannot be scored are
/// collected in `skipped` rather than failing the report.
pub fn build(
    dataset: &Dataset,
    config: &OpportunityConfig,
    query: &RankQuery,
    selection: EntitySelection,
) -> OpportunityReport {
    let tiers = config.tiers();
    let mut skipped = Vec::new();
    let institutions = match selection {
        EntitySelection::All | EntitySelection::Institutions => {
            let ranking = rank::rank_institutions(
                &dataset.institutions,
                &config.institution_weights(),
                query,
                &tiers,
            );
            skipped.extend(ranking.skipped);
            Some(ranking.entries)
        }
        EntitySelection::Funders => None,
    };
    let funders = match selection {
        EntitySelection::All | EntitySelection::Funders => {
            let ranking =
                rank::rank_funders(&dataset.funders, &config.funder_weights(), query, &tiers);
            skipped.extend(ranking.skipped);
            Some(ranking.entries)
        }
        EntitySelection::Institutions => None,
    };

    OpportunityReport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        currency: config.currency().to_string(),
        summary: rank::summarize(dataset),
        institutions,
        funders,
        skipped,
    }
}

pub fn render(report: &OpportunityReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(OpportunityError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
