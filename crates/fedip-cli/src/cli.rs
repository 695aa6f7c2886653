//! CLI argument definitions for the FEDIP recommender.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use fedip_core::AggregationPolicy;
use fedip_taxonomy::RoleOrder;

#[derive(Parser)]
#[command(
    name = "fedip",
    version,
    about = "FEDIP membership recommender - find your professional body and FEDIP level",
    long_about = "Recommend a professional body and FEDIP registration level from a \
                  base category, job family and role.\n\n\
                  Reference tables are read from a data directory described by a \
                  manifest.toml (default: $FEDIP_DATA_DIR, else the bundled data/)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Reference data directory (overrides FEDIP_DATA_DIR).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List base categories and their default professional bodies.
    Categories,

    /// List job families with their sub-bucket and role counts.
    Families,

    /// Show a job family grouped into sub-buckets.
    Family(FamilyArgs),

    /// Split role titles into level and base.
    Parse(ParseArgs),

    /// Answer the four wizard questions and print the recommendation.
    Recommend(RecommendArgs),

    /// Load and checksum the reference data directory.
    Verify,
}

#[derive(Parser)]
pub struct FamilyArgs {
    /// Job family name, as listed by `fedip families`.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Order roles by FEDIP seniority instead of level rank.
    #[arg(long = "by-seniority")]
    pub by_seniority: bool,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Role titles to parse.
    #[arg(value_name = "TITLE", required = true)]
    pub titles: Vec<String>,
}

#[derive(Parser)]
pub struct RecommendArgs {
    /// Base category ("What best describes you?").
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: String,

    /// Job family.
    #[arg(long = "family", value_name = "FAMILY")]
    pub family: String,

    /// Sub-bucket; may be omitted when the family has only one.
    #[arg(long = "sub-bucket", value_name = "SUB_BUCKET")]
    pub sub_bucket: Option<String>,

    /// Specific role title.
    #[arg(long = "role", value_name = "ROLE")]
    pub role: String,

    /// Which tables contribute professional bodies.
    #[arg(long = "policy", value_enum, default_value = "union")]
    pub policy: PolicyArg,

    /// Print the recommendation as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Role, sub-bucket, family and base-category bodies combined.
    Union,
    /// Base-category body only.
    BaseOnly,
}

impl From<PolicyArg> for AggregationPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Union => AggregationPolicy::Union,
            PolicyArg::BaseOnly => AggregationPolicy::BaseCategoryOnly,
        }
    }
}

impl FamilyArgs {
    pub fn role_order(&self) -> RoleOrder {
        if self.by_seniority {
            RoleOrder::FedipSeniority
        } else {
            RoleOrder::Canonical
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
