use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "opportunity",
    version,
    about = "Transformative agreement opportunity scoring for institutions and funders"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single entity from raw counters
    #[command(subcommand)]
    Score(ScoreCommand),
    /// Rank the entities of a dataset file
    Rank(RankCommand),
    /// Show the effective weight tables
    Weights(WeightsCommand),
    /// Report inconsistent counters in a dataset file
    Check(CheckCommand),
}

#[derive(Subcommand)]
pub enum ScoreCommand {
    Institution(InstitutionArgs),
    Funder(FunderArgs),
}

#[derive(Args)]
pub struct InstitutionArgs {
    #[arg(long)]
    pub submissions: u64,
    #[arg(long)]
    pub accepted: u64,
    #[arg(long)]
    pub oa: u64,
    #[arg(long)]
    pub subscription: u64,
    #[arg(long, allow_negative_numbers = true)]
    pub apc_spend: f64,
    /// Directory holding opportunity.toml
    #[arg(long, default_value = ".")]
    pub config: PathBuf,
    /// Print the per-factor breakdown
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args)]
pub struct FunderArgs {
    #[arg(long)]
    pub funded_articles: u64,
    #[arg(long)]
    pub oa: u64,
    #[arg(long)]
    pub subscription: u64,
    #[arg(long, allow_negative_numbers = true)]
    pub spend: f64,
    /// Directory holding opportunity.toml
    #[arg(long, default_value = ".")]
    pub config: PathBuf,
    /// Print the per-factor breakdown
    #[arg(long)]
    pub explain: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EntityFilter {
    All,
    Institutions,
    Funders,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DealFilter {
    All,
    Active,
    NoDeal,
}

#[derive(Args)]
pub struct RankCommand {
    pub dataset: PathBuf,
    #[arg(long, value_enum, default_value = "all")]
    pub entity: EntityFilter,
    /// Case-insensitive name or country filter
    #[arg(long)]
    pub search: Option<String>,
    /// Shorthand for `--deals all`
    #[arg(long, conflicts_with = "deals")]
    pub include_existing_deals: bool,
    /// Filter by existing-deal status (defaults to the config, then no-deal)
    #[arg(long, value_enum)]
    pub deals: Option<DealFilter>,
    #[arg(long)]
    pub limit: Option<usize>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Directory holding opportunity.toml (defaults to the dataset's directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct WeightsCommand {
    #[arg(long, default_value = ".")]
    pub config: PathBuf,
}

#[derive(Args)]
pub struct CheckCommand {
    pub dataset: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
