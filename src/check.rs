use crate::score::check_amount;
use crate::types::entity::Dataset;
use crate::types::report::Finding;
use std::collections::HashSet;

/// Flags records whose counters contradict each other. Scoring does not depend on it.
pub fn check_dataset(dataset: &Dataset) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mut seen = HashSet::new();
    for institution in &dataset.institutions {
        if !seen.insert(institution.id) {
            findings.push(duplicate_id("institution", institution.id, &institution.name));
        }

        let metrics = &institution.metrics;
        if metrics.accepted_count > metrics.submission_count {
            findings.push(Finding {
                id: "institution.accepted_exceeds_submissions".to_string(),
                entity: institution.name.clone(),
                body: format!(
                    "accepted_count ({}) exceeds submission_count ({}).",
                    metrics.accepted_count, metrics.submission_count
                ),
            });
        }
        let split = metrics.oa_count.saturating_add(metrics.subscription_count);
        if split != metrics.accepted_count {
            findings.push(Finding {
                id: "institution.split_mismatch".to_string(),
                entity: institution.name.clone(),
                body: format!(
                    "oa_count + subscription_count ({split}) differs from accepted_count ({}).",
                    metrics.accepted_count
                ),
            });
        }
        if let Err(e) = check_amount("apc_spend", metrics.apc_spend) {
            findings.push(Finding {
                id: "institution.invalid_apc_spend".to_string(),
                entity: institution.name.clone(),
                body: format!("{e}; the record is skipped when ranking."),
            });
        }
    }

    let mut seen = HashSet::new();
    for funder in &dataset.funders {
        if !seen.insert(funder.id) {
            findings.push(duplicate_id("funder", funder.id, &funder.name));
        }

        let metrics = &funder.metrics;
        if metrics.oa_articles > metrics.total_funded_articles {
            findings.push(Finding {
                id: "funder.oa_exceeds_total".to_string(),
                entity: funder.name.clone(),
                body: format!(
                    "oa_articles ({}) exceeds total_funded_articles ({}).",
                    metrics.oa_articles, metrics.total_funded_articles
                ),
            });
        }
        let split = metrics
            .oa_articles
            .saturating_add(metrics.subscription_articles);
        if split != metrics.total_funded_articles {
            findings.push(Finding {
                id: "funder.split_mismatch".to_string(),
                entity: funder.name.clone(),
                body: format!(
                    "oa_articles + subscription_articles ({split}) differs from total_funded_articles ({}).",
                    metrics.total_funded_articles
                ),
            });
        }
        if let Err(e) = check_amount("total_spend", metrics.total_spend) {
            findings.push(Finding {
                id: "funder.invalid_total_spend".to_string(),
                entity: funder.name.clone(),
                body: format!("{e}; the record is skipped when ranking."),
            });
        }
    }

    findings
}

fn duplicate_id(kind: &str, id: u32, name: &str) -> Finding {
    Finding {
        id: "dataset.duplicate_id".to_string(),
        entity: name.to_string(),
        body: format!("{kind} id {id} is used more than once."),
    }
}
