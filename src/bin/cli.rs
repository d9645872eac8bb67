// src/bin/cli.rs

//! RSS Reader CLI
//!
//! Reads a feed from a URL and prints it to stdout.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use rss_reader::{
    error::{AppError, Result, failure_report},
    models::Config,
    pipeline,
    render::OutputFormat,
    utils::http::HttpFetcher,
};

/// RSS Reader - Command-line feed reader
#[derive(Parser, Debug)]
#[command(
    name = "rss_reader",
    version,
    about = "Command-line RSS reader with article page extraction"
)]
struct Cli {
    /// RSS URL
    #[arg(value_name = "URL", required_unless_present = "date")]
    source: Option<String>,

    /// Print result as JSON in stdout
    #[arg(long)]
    json: bool,

    /// Outputs verbose status messages
    #[arg(long)]
    verbose: bool,

    /// Limit news topics if this parameter provided
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    limit: i64,

    /// Show cached news published on this date (YYYYMMDD)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map_err(|_| format!("'{value}' is not a date in YYYYMMDD format"))
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            log::info!("Loaded configuration from {}", path.display());
            config
        }
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Trace causes when `DEBUG=true` is set.
fn trace_enabled() -> bool {
    std::env::var("DEBUG").is_ok_and(|v| v == "true")
}

async fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let Some(source) = cli.source.as_deref() else {
        let date = cli.date.map(|d| d.format("%Y%m%d").to_string());
        return Err(AppError::NotCached(date.unwrap_or_default()));
    };

    let fetcher = HttpFetcher::new(&config.http)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    pipeline::run_reader(&config, &fetcher, source, cli.limit, cli.format(), &mut out).await?;
    out.flush()?;
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("RSS reader starting...");

    match run(&cli).await {
        Ok(()) => {
            log::info!("Done!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", failure_report(&e, trace_enabled()));
            ExitCode::FAILURE
        }
    }
}
