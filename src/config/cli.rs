use crate::core::query::QueryParams;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "advocate-search")]
#[command(about = "Search, sort and page through the advocate directory")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dataset file (.json or .csv) or http(s) URL; overrides [source] in the config.
    /// Without either, ./data/advocates.json relative to the working directory is used
    #[arg(short, long)]
    pub data: Option<String>,

    /// Raw query string, e.g. "specialty=cardio&limit=5"
    #[arg(short, long)]
    pub query: Option<String>,

    #[arg(long)]
    pub specialty: Option<String>,

    #[arg(long = "min-years", allow_hyphen_values = true)]
    pub min_years: Option<String>,

    #[arg(long)]
    pub degree: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub cursor: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// List distinct cities instead of searching
    #[arg(long)]
    pub cities: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Individual flags take precedence over `--query`. Values are passed on unvalidated.
    pub fn query_params(&self) -> QueryParams {
        let base = self
            .query
            .as_deref()
            .map(QueryParams::from_query_string)
            .unwrap_or_default();

        base.merge(QueryParams {
            specialty: self.specialty.clone(),
            min_years: self.min_years.clone(),
            degree: self.degree.clone(),
            cursor: self.cursor.clone(),
            limit: self.limit.clone(),
        })
    }
}
