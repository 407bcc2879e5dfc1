mod cli;

use clap::Parser;
use datacensus::error::CensusError;
use datacensus::load::{DatasetSource, Loader};
use datacensus::types::metadata::DatasetMetadata;
use datacensus::types::scoring::Criterion;
use datacensus::{config, evaluation, report};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn list_criteria() {
    for criterion in Criterion::ALL {
        let dependencies = criterion
            .dependencies()
            .iter()
            .map(|dependency| dependency.key())
            .collect::<Vec<_>>();
        let uses = if dependencies.is_empty() {
            String::new()
        } else {
            format!(" (uses {})", dependencies.join(", "))
        };
        println!(
            "{:<20} {}: {}{}",
            criterion.key(),
            criterion.label(),
            criterion.summary(),
            uses
        );
    }
}

async fn run() -> Result<i32, CensusError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match cli.command {
        cli::Commands::Criteria => {
            list_criteria();
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Evaluate(cmd) => {
            let cwd = std::env::current_dir()?;
            let loaded = config::load_config(&cwd)?;

            let metadata = match &cmd.metadata {
                Some(path) => loaded
                    .default_metadata()
                    .overlay(DatasetMetadata::from_path(path)?),
                None => loaded.default_metadata(),
            };

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => loaded
                    .report_format()
                    .and_then(report::OutputFormat::from_name)
                    .unwrap_or(report::OutputFormat::Md),
            };

            let loader = Loader::new(&loaded.fetch_settings())?;
            let source = DatasetSource::parse(&cmd.source);
            let quality_report =
                evaluation::evaluate_report(&loader, &source, Some(&metadata)).await?;
            println!("{}", report::render(&quality_report, output_format)?);

            let overall = quality_report.result.overall_score();
            match cmd.min_score.or(loaded.min_score()) {
                Some(threshold) if overall < threshold => {
                    tracing::warn!(overall, threshold, "overall score is below the threshold");
                    Ok(exit_code::BELOW_THRESHOLD)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
    }
}

#[tokio::main]
async fn main() {
    match run().await {
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
