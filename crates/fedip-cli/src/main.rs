//! FEDIP membership recommender CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use fedip_cli::commands::{
    RecommendRequest, family_detail, family_overview, load_tables, parse_titles, recommend,
};
use fedip_cli::logging::{LogConfig, LogFormat, init_logging};
use fedip_cli::summary::{
    categories_table, families_table, family_table, load_summary_table, parsed_table,
    recommendation_table,
};
use fedip_core::{WizardEngine, WizardOptions};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let load = || load_tables(cli.data_dir.as_deref());
    match &cli.command {
        Command::Parse(args) => println!("{}", parsed_table(&parse_titles(&args.titles))),
        Command::Categories => {
            let (tables, _) = load()?;
            println!("{}", categories_table(&tables));
        }
        Command::Families => {
            let (tables, _) = load()?;
            let engine = WizardEngine::new(tables, WizardOptions::default());
            println!("{}", families_table(&family_overview(&engine)));
        }
        Command::Family(args) => {
            let (tables, _) = load()?;
            let engine = WizardEngine::new(tables, WizardOptions::default());
            let buckets = family_detail(&engine, &args.name, args.role_order())?;
            println!("Family: {}", args.name);
            println!("{}", family_table(&buckets, engine.tables()));
        }
        Command::Recommend(args) => {
            let (tables, _) = load()?;
            let engine = WizardEngine::new(
                tables,
                WizardOptions::default().with_policy(args.policy.into()),
            );
            let request = RecommendRequest {
                category: args.category.clone(),
                family: args.family.clone(),
                sub_bucket: args.sub_bucket.clone(),
                role: args.role.clone(),
            };
            let state = recommend(&engine, &request)?;
            let result = engine
                .current_result(&state)
                .context("wizard finished without a recommendation")?;
            if args.json {
                let json =
                    serde_json::to_string_pretty(result).context("serialize recommendation")?;
                println!("{json}");
            } else {
                println!("Your Recommendations");
                println!("{}", recommendation_table(&state.answers, result));
            }
        }
        Command::Verify => {
            let (_, summary) = load()?;
            println!("Data directory: {}", summary.data_dir.display());
            println!("{}", load_summary_table(&summary));
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi)
}
