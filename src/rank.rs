use crate::score::weights::{FunderWeights, InstitutionWeights};
use crate::score::{score_funder, score_institution};
use crate::types::entity::{Dataset, EntityKind, Funder, FunderKind, Institution};
use crate::types::report::{DatasetSummary, Finding, Projection, RankedEntry, Ranking};
use crate::types::scoring::{Score, ScoreBreakdown, Tiers};
use serde::Deserialize;
use tracing::{debug, warn};

pub const INSTITUTION_OA_GROWTH_RATE: f64 = 0.40;
pub const FUNDER_OA_GROWTH_RATE: f64 = 0.35;
pub const REVENUE_GROWTH: [f64; 3] = [1.20, 1.40, 1.65];

/// Which entities to keep according to whether they already hold a deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealStatus {
    All,
    Active,
    #[default]
    NoDeal,
}

impl DealStatus {
    fn admits(self, has_existing_deal: bool) -> bool {
        match self {
            DealStatus::All => true,
            DealStatus::Active => has_existing_deal,
            DealStatus::NoDeal => !has_existing_deal,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RankQuery {
    /// Case-insensitive substring matched against name or country.
    pub search: Option<String>,
    pub deals: DealStatus,
    pub limit: Option<usize>,
}

impl RankQuery {
    fn admits(&self, name: &str, country: &str, has_existing_deal: bool) -> bool {
        if !self.deals.admits(has_existing_deal) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                name.to_lowercase().contains(&term) || country.to_lowercase().contains(&term)
            }
        }
    }
}

/// Estimated chance that an agreement with the entity closes, in percent.
pub fn success_likelihood(score: Score) -> u8 {
    (70.0 + f64::from(score) / 5.0).round() as u8
}

pub fn project(volume: u64, oa_growth_rate: f64, current_spend: f64) -> Projection {
    Projection {
        potential_oa_growth: (volume as f64 * oa_growth_rate).round() as u64,
        current_spend,
        revenue_by_year: REVENUE_GROWTH.map(|growth| (current_spend * growth).round()),
    }
}

struct Candidate<'a> {
    kind: EntityKind,
    id: u32,
    name: &'a str,
    country: &'a str,
    has_existing_deal: bool,
    projection: Projection,
}

impl Candidate<'_> {
    fn into_entry(self, breakdown: ScoreBreakdown, tiers: &Tiers) -> RankedEntry {
        RankedEntry {
            kind: self.kind,
            id: self.id,
            name: self.name.to_string(),
            country: self.country.to_string(),
            has_existing_deal: self.has_existing_deal,
            score: breakdown.score,
            tier: tiers.classify(breakdown.score),
            success_likelihood_pct: success_likelihood(breakdown.score),
            projection: self.projection,
            breakdown,
        }
    }
}

/// Scores the admitted institutions. Records whose spend cannot be scored are
/// reported in `skipped` instead of failing the whole ranking.
pub fn rank_institutions(
    institutions: &[Institution],
    weights: &InstitutionWeights,
    query: &RankQuery,
    tiers: &Tiers,
) -> Ranking {
    let mut ranking = Ranking::default();
    for institution in institutions {
        if !query.admits(
            &institution.name,
            &institution.country,
            institution.has_existing_deal,
        ) {
            debug!(id = institution.id, name = %institution.name, "institution filtered out");
            continue;
        }
        let metrics = &institution.metrics;
        match score_institution(metrics, weights) {
            Ok(breakdown) => {
                debug!(id = institution.id, score = breakdown.score, "institution scored");
                let candidate = Candidate {
                    kind: EntityKind::Institution,
                    id: institution.id,
                    name: &institution.name,
                    country: &institution.country,
                    has_existing_deal: institution.has_existing_deal,
                    projection: project(
                        metrics.submission_count,
                        INSTITUTION_OA_GROWTH_RATE,
                        metrics.apc_spend,
                    ),
                };
                ranking.entries.push(candidate.into_entry(breakdown, tiers));
            }
            Err(e) => {
                warn!(id = institution.id, name = %institution.name, error = %e, "institution skipped");
                ranking.skipped.push(Finding {
                    id: "institution.invalid_apc_spend".to_string(),
                    entity: institution.name.clone(),
                    body: e.to_string(),
                });
            }
        }
    }
    finish(ranking, query)
}

/// Scores the admitted funders; unscorable records land in `skipped`.
pub fn rank_funders(
    funders: &[Funder],
    weights: &FunderWeights,
    query: &RankQuery,
    tiers: &Tiers,
) -> Ranking {
    let mut ranking = Ranking::default();
    for funder in funders {
        if !query.admits(&funder.name, &funder.country, funder.has_existing_deal) {
            debug!(id = funder.id, name = %funder.name, "funder filtered out");
            continue;
        }
        let metrics = &funder.metrics;
        match score_funder(metrics, weights) {
            Ok(breakdown) => {
                debug!(id = funder.id, score = breakdown.score, "funder scored");
                let candidate = Candidate {
                    kind: EntityKind::Funder,
                    id: funder.id,
                    name: &funder.name,
                    country: &funder.country,
                    has_existing_deal: funder.has_existing_deal,
                    projection: project(
                        metrics.total_funded_articles,
                        FUNDER_OA_GROWTH_RATE,
                        metrics.total_spend,
                    ),
                };
                ranking.entries.push(candidate.into_entry(breakdown, tiers));
            }
            Err(e) => {
                warn!(id = funder.id, name = %funder.name, error = %e, "funder skipped");
                ranking.skipped.push(Finding {
                    id: "funder.invalid_total_spend".to_string(),
                    entity: funder.name.clone(),
                    body: e.to_string(),
                });
            }
        }
    }
    finish(ranking, query)
}

fn finish(mut ranking: Ranking, query: &RankQuery) -> Ranking {
    ranking
        .entries
        .sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    if let Some(limit) = query.limit {
        ranking.entries.truncate(limit);
    }
    ranking
}

/// Dataset-wide totals. Counter sums saturate at `u64::MAX`.
pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let mut summary = DatasetSummary {
        institution_count: dataset.institutions.len(),
        funder_count: dataset.funders.len(),
        ..DatasetSummary::default()
    };
    for institution in &dataset.institutions {
        let metrics = &institution.metrics;
        summary.total_submissions = summary
            .total_submissions
            .saturating_add(metrics.submission_count);
        summary.total_accepted = summary
            .total_accepted
            .saturating_add(metrics.accepted_count);
        summary.total_oa = summary.total_oa.saturating_add(metrics.oa_count);
        summary.total_subscription = summary
            .total_subscription
            .saturating_add(metrics.subscription_count);
        summary.total_apc_spend += metrics.apc_spend;
    }
    if summary.total_accepted > 0 {
        summary.oa_share_pct =
            (summary.total_oa as f64 / summary.total_accepted as f64 * 100.0).round() as u32;
    }
    for funder in &dataset.funders {
        summary.total_funded_articles = summary
            .total_funded_articles
            .saturating_add(funder.metrics.total_funded_articles);
        summary.total_funder_spend += funder.metrics.total_spend;
        let kinds = &mut summary.funder_kinds;
        match funder.kind {
            FunderKind::Government => kinds.government += 1,
            FunderKind::Private => kinds.private += 1,
            FunderKind::Ngo => kinds.ngo += 1,
            FunderKind::Academic => kinds.academic += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::entity::{FunderMetrics, InstitutionMetrics};
    use crate::types::report::FunderKindCounts;
    use crate::types::scoring::Tier;

    fn institution(id: u32, name: &str, country: &str, deal: bool, m: (u64, u64, u64, u64, f64)) -> Institution {
        Institution {
            id,
            name: name.to_string(),
            country: country.to_string(),
            department: None,
            metrics: InstitutionMetrics {
                submission_count: m.0,
                accepted_count: m.1,
                oa_count: m.2,
                subscription_count: m.3,
                apc_spend: m.4,
            },
            has_existing_deal: deal,
        }
    }

    fn sample_institutions() -> Vec<Institution> {
        vec![
            institution(1, "University of Cambridge", "UK", true, (1245, 982, 675, 307, 1_350_000.0)),
            institution(4, "University of Tokyo", "Japan", false, (865, 701, 342, 359, 684_000.0)),
            institution(5, "ETH Zurich", "Switzerland", false, (743, 598, 402, 196, 804_000.0)),
            institution(6, "National University of Singapore", "Singapore", false, (621, 512, 287, 225, 574_000.0)),
        ]
    }

    fn sample_funders() -> Vec<Funder> {
        vec![
            Funder {
                id: 2,
                name: "National Science Foundation".to_string(),
                country: "USA".to_string(),
                kind: FunderKind::Government,
                metrics: FunderMetrics {
                    total_funded_articles: 2345,
                    oa_articles: 1623,
                    subscription_articles: 722,
                    total_spend: 3_246_000.0,
                },
                has_existing_deal: false,
            },
            Funder {
                id: 5,
                name: "Japan Society for the Promotion of Science".to_string(),
                country: "Japan".to_string(),
                kind: FunderKind::Government,
                metrics: FunderMetrics {
                    total_funded_articles: 1245,
                    oa_articles: 743,
                    subscription_articles: 502,
                    total_spend: 1_486_000.0,
                },
                has_existing_deal: false,
            },
        ]
    }

    #[test]
    fn ranking_excludes_existing_deals_and_sorts_descending() {
        let ranked = rank_institutions(
            &sample_institutions(),
            &InstitutionWeights::default(),
            &RankQuery::default(),
            &Tiers::default(),
        )
        .entries;

        let ids = ranked.iter().map(|entry| entry.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![5, 6, 4]);
        assert!(ranked.iter().all(|entry| !entry.has_existing_deal));
        assert_eq!(ranked[0].score, 73);
        assert_eq!(ranked[0].tier, Tier::Medium);
    }

    #[test]
    fn ranking_can_include_existing_deals() {
        let query = RankQuery {
            deals: DealStatus::All,
            ..RankQuery::default()
        };
        let ranked = rank_institutions(
            &sample_institutions(),
            &InstitutionWeights::default(),
            &query,
            &Tiers::default(),
        )
        .entries;
        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0].name, "University of Cambridge");
    }

    #[test]
    fn search_matches_name_or_country_case_insensitively() {
        let query = RankQuery {
            search: Some("JAPAN".to_string()),
            ..RankQuery::default()
        };
        let ranked = rank_institutions(
            &sample_institutions(),
            &InstitutionWeights::default(),
            &query,
            &Tiers::default(),
        )
        .entries;
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "University of Tokyo");

        let funders = rank_funders(
            &sample_funders(),
            &FunderWeights::default(),
            &RankQuery {
                search: Some("science".to_string()),
                ..RankQuery::default()
            },
            &Tiers::default(),
        )
        .entries;
        assert_eq!(funders.len(), 2);
        assert_eq!(funders[0].id, 2);
    }

    #[test]
    fn blank_search_term_matches_everything() {
        let query = RankQuery {
            search: Some("   ".to_string()),
            ..RankQuery::default()
        };
        let ranked = rank_funders(
            &sample_funders(),
            &FunderWeights::default(),
            &query,
            &Tiers::default(),
        )
        .entries;
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn limit_truncates_after_sorting() {
        let query = RankQuery {
            limit: Some(1),
            ..RankQuery::default()
        };
        let ranked = rank_funders(
            &sample_funders(),
            &FunderWeights::default(),
            &query,
            &Tiers::default(),
        )
        .entries;
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 74);
    }

    #[test]
    fn equal_scores_are_ordered_by_name() {
        let metrics = (100, 80, 40, 40, 1000.0);
        let institutions = vec![
            institution(1, "Zeta Institute", "NZ", false, metrics),
            institution(2, "Alpha College", "NZ", false, metrics),
        ];
        let ranked = rank_institutions(
            &institutions,
            &InstitutionWeights::default(),
            &RankQuery::default(),
            &Tiers::default(),
        )
        .entries;
        assert_eq!(ranked[0].name, "Alpha College");
        assert_eq!(ranked[1].name, "Zeta Institute");
    }

    #[test]
    fn success_likelihood_follows_score() {
        assert_eq!(success_likelihood(0), 70);
        assert_eq!(success_likelihood(76), 85);
        assert_eq!(success_likelihood(100), 90);
    }

    #[test]
    fn summarize_totals_both_entity_kinds() {
        let dataset = Dataset {
            institutions: sample_institutions(),
            funders: sample_funders(),
        };
        let summary = summarize(&dataset);
        assert_eq!(summary.institution_count, 4);
        assert_eq!(summary.funder_count, 2);
        assert_eq!(summary.total_submissions, 1245 + 865 + 743 + 621);
        assert_eq!(summary.total_accepted, 982 + 701 + 598 + 512);
        assert_eq!(summary.total_funded_articles, 2345 + 1245);
        assert_eq!(summary.total_apc_spend, 3_412_000.0);
        assert_eq!(summary.total_funder_spend, 4_732_000.0);
    }

    #[test]
    fn active_deal_filter_keeps_only_existing_deals() {
        let query = RankQuery {
            deals: DealStatus::Active,
            ..RankQuery::default()
        };
        let ranked = rank_institutions(
            &sample_institutions(),
            &InstitutionWeights::default(),
            &query,
            &Tiers::default(),
        )
        .entries;
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, 1);
        assert!(ranked[0].has_existing_deal);
    }

    #[test]
    fn entries_carry_growth_and_revenue_projection() {
        let query = RankQuery {
            deals: DealStatus::All,
            search: Some("cambridge".to_string()),
            ..RankQuery::default()
        };
        let ranked = rank_institutions(
            &sample_institutions(),
            &InstitutionWeights::default(),
            &query,
            &Tiers::default(),
        )
        .entries;
        let projection = &ranked[0].projection;
        assert_eq!(projection.potential_oa_growth, 498);
        assert_eq!(projection.current_spend, 1_350_000.0);
        assert_eq!(
            projection.revenue_by_year,
            [1_620_000.0, 1_890_000.0, 2_227_500.0]
        );

        let funders = rank_funders(
            &sample_funders(),
            &FunderWeights::default(),
            &RankQuery::default(),
            &Tiers::default(),
        )
        .entries;
        let nsf = &funders[0].projection;
        assert_eq!(nsf.potential_oa_growth, 821);
        assert_eq!(nsf.revenue_by_year, [3_895_200.0, 4_544_400.0, 5_355_900.0]);
    }

    #[test]
    fn unscorable_records_are_skipped_not_fatal() {
        let mut institutions = sample_institutions();
        institutions.push(institution(
            9,
            "Broken Records Lab",
            "Nowhere",
            false,
            (10, 5, 2, 3, -1.0),
        ));
        let ranking = rank_institutions(
            &institutions,
            &InstitutionWeights::default(),
            &RankQuery::default(),
            &Tiers::default(),
        );
        let ids = ranking.entries.iter().map(|entry| entry.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![5, 6, 4]);
        assert_eq!(ranking.skipped.len(), 1);
        assert_eq!(ranking.skipped[0].id, "institution.invalid_apc_spend");
        assert_eq!(ranking.skipped[0].entity, "Broken Records Lab");
        assert!(ranking.skipped[0].body.contains("apc_spend"));

        let mut funders = sample_funders();
        funders[1].metrics.total_spend = f64::NAN;
        let ranking = rank_funders(
            &funders,
            &FunderWeights::default(),
            &RankQuery::default(),
            &Tiers::default(),
        );
        assert_eq!(ranking.entries.len(), 1);
        assert_eq!(ranking.skipped[0].id, "funder.invalid_total_spend");
    }

    #[test]
    fn summarize_reports_oa_share_and_funder_kinds() {
        let mut funders = sample_funders();
        funders[1].kind = FunderKind::Private;
        let dataset = Dataset {
            institutions: sample_institutions(),
            funders,
        };
        let summary = summarize(&dataset);
        // 1706 OA of 2793 accepted
        assert_eq!(summary.oa_share_pct, 61);
        assert_eq!(
            summary.funder_kinds,
            FunderKindCounts {
                government: 1,
                private: 1,
                ngo: 0,
                academic: 0,
            }
        );
    }

    #[test]
    fn summarize_oa_share_is_zero_without_accepted_articles() {
        let dataset = Dataset {
            institutions: vec![institution(1, "Empty", "NZ", false, (0, 0, 0, 0, 0.0))],
            funders: vec![],
        };
        assert_eq!(summarize(&dataset).oa_share_pct, 0);
    }

    #[test]
    fn summarize_saturates_instead_of_overflowing() {
        let dataset = Dataset {
            institutions: vec![
                institution(1, "Huge", "NZ", false, (u64::MAX, u64::MAX, 0, u64::MAX, 0.0)),
                institution(2, "Small", "NZ", false, (1, 1, 1, 1, 0.0)),
            ],
            funders: vec![],
        };
        let summary = summarize(&dataset);
        assert_eq!(summary.total_submissions, u64::MAX);
        assert_eq!(summary.total_accepted, u64::MAX);
        assert_eq!(summary.total_subscription, u64::MAX);
        assert_eq!(summary.total_oa, 1);
    }
}
