use crate::types::report::{OpportunityReport, RankedEntry};

/// Escapes characters that would break a markdown table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub fn to_markdown(report: &OpportunityReport) -> String {
    let mut output = String::new();
    output.push_str("# Opportunity Report\n\n");
    output.push_str(&format!("Generated: {}\n\n", report.generated_at));

    let summary = &report.summary;
    output.push_str("## Summary\n\n");
    output.push_str(&format!(
        "- institutions: {}\n- funders: {}\n- submissions: {}\n- accepted: {}\n- open access: {} ({}% of accepted)\n- subscription: {}\n- APC spend: {:.0} {}\n- funded articles: {}\n- funder spend: {:.0} {}\n- funder kinds: government {}, private {}, ngo {}, academic {}\n\n",
        summary.institution_count,
        summary.funder_count,
        summary.total_submissions,
        summary.total_accepted,
        summary.total_oa,
        summary.oa_share_pct,
        summary.total_subscription,
        summary.total_apc_spend,
        report.currency,
        summary.total_funded_articles,
        summary.total_funder_spend,
        report.currency,
        summary.funder_kinds.government,
        summary.funder_kinds.private,
        summary.funder_kinds.ngo,
        summary.funder_kinds.academic
    ));

    if let Some(institutions) = &report.institutions {
        output.push_str("## Institutions\n\n");
        push_table(&mut output, institutions);
    }
    if let Some(funders) = &report.funders {
        output.push_str("## Funders\n\n");
        push_table(&mut output, funders);
    }
    if !report.skipped.is_empty() {
        output.push_str("## Skipped\n\n");
        for finding in &report.skipped {
            output.push_str(&format!(
                "- `{}` {}: {}\n",
                finding.id, finding.entity, finding.body
            ));
        }
        output.push('\n');
    }

    output
}

fn push_table(output: &mut String, entries: &[RankedEntry]) {
    if entries.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    output.push_str(
        "| Rank | Name | Country | Score | Tier | Success | OA growth | Year 1 | Year 2 | Year 3 |\n",
    );
    output.push_str("|---:|---|---|---:|---|---:|---:|---:|---:|---:|\n");
    for (rank, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {}{} | {} | {} | {} | {}% | +{} | {:.0} | {:.0} | {:.0} |\n",
            rank + 1,
            cell(&entry.name),
            if entry.has_existing_deal {
                " (existing deal)"
            } else {
                ""
            },
            cell(&entry.country),
            entry.score,
            entry.tier.as_str(),
            entry.success_likelihood_pct,
            entry.projection.potential_oa_growth,
            entry.projection.revenue_by_year[0],
            entry.projection.revenue_by_year[1],
            entry.projection.revenue_by_year[2]
        ));
    }
    output.push('\n');
}
