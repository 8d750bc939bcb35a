mod cli;

use clap::Parser;
use opportunity::error::Result;
use opportunity::rank::{DealStatus, RankQuery};
use opportunity::report::{self, EntitySelection, OutputFormat};
use opportunity::score::{score_funder, score_institution};
use opportunity::types::entity::{FunderMetrics, InstitutionMetrics};
use opportunity::types::scoring::ScoreBreakdown;
use opportunity::{check, config, dataset, telemetry};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    telemetry::init(telemetry::level_for(cli.verbose, cli.quiet))?;

    match cli.command {
        cli::Commands::Score(cli::ScoreCommand::Institution(args)) => {
            let loaded = config::load_config(&args.config)?;
            let metrics = InstitutionMetrics {
                submission_count: args.submissions,
                accepted_count: args.accepted,
                oa_count: args.oa,
                subscription_count: args.subscription,
                apc_spend: args.apc_spend,
            };
            let breakdown = score_institution(&metrics, &loaded.institution_weights())?;
            print_score(&breakdown, args.explain);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cli::ScoreCommand::Funder(args)) => {
            let loaded = config::load_config(&args.config)?;
            let metrics = FunderMetrics {
                total_funded_articles: args.funded_articles,
                oa_articles: args.oa,
                subscription_articles: args.subscription,
                total_spend: args.spend,
            };
            let breakdown = score_funder(&metrics, &loaded.funder_weights())?;
            print_score(&breakdown, args.explain);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rank(cmd) => {
            let data = dataset::load(&cmd.dataset)?;
            let config_root = cmd
                .config
                .clone()
                .unwrap_or_else(|| dataset_dir(&cmd.dataset));
            let loaded = config::load_config(&config_root)?;

            let deals = match (cmd.deals, cmd.include_existing_deals) {
                (Some(cli::DealFilter::All), _) | (None, true) => DealStatus::All,
                (Some(cli::DealFilter::Active), _) => DealStatus::Active,
                (Some(cli::DealFilter::NoDeal), _) => DealStatus::NoDeal,
                (None, false) => loaded.deal_status(),
            };
            let query = RankQuery {
                search: cmd.search.clone(),
                deals,
                limit: cmd.limit,
            };
            let selection = match cmd.entity {
                cli::EntityFilter::All => EntitySelection::All,
                cli::EntityFilter::Institutions => EntitySelection::Institutions,
                cli::EntityFilter::Funders => EntitySelection::Funders,
            };
            let output_format = match cmd.format {
                cli::ReportFormat::Json => OutputFormat::Json,
                cli::ReportFormat::Md => OutputFormat::Md,
            };

            let opportunity_report = report::build(&data, &loaded, &query, selection);
            info!(
                institutions = opportunity_report.institutions.as_ref().map_or(0, Vec::len),
                funders = opportunity_report.funders.as_ref().map_or(0, Vec::len),
                skipped = opportunity_report.skipped.len(),
                "ranking complete"
            );
            let rendered = report::render(&opportunity_report, output_format)?;
            println!("{rendered}");
            if opportunity_report.skipped.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                warn!(
                    skipped = opportunity_report.skipped.len(),
                    "some records could not be scored"
                );
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Weights(cmd) => {
            let loaded = config::load_config(&cmd.config)?;
            println!("institution weights:");
            for (name, weight) in loaded.institution_weights().entries() {
                println!("- {name}: {:.0}%", weight * 100.0);
            }
            println!("funder weights:");
            for (name, weight) in loaded.funder_weights().entries() {
                println!("- {name}: {:.0}%", weight * 100.0);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let data = dataset::load(&cmd.dataset)?;
            let findings = check::check_dataset(&data);

            if findings.is_empty() {
                println!("check: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                println!("[WARN] {}: {}", finding.id, finding.entity);
                println!("  {}", finding.body);
            }
            Ok(exit_code::WARNINGS)
        }
    }
}

fn dataset_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn print_score(breakdown: &ScoreBreakdown, explain: bool) {
    println!("score: {}", breakdown.score);
    if !explain {
        return;
    }
    for factor in &breakdown.factors {
        println!(
            "- {}: raw {} -> {:.2} x {:.2} = {:.2}",
            factor.name, factor.raw, factor.normalized, factor.weight, factor.contribution
        );
    }
    println!("weighted total: {:.2}", breakdown.weighted_total);
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

