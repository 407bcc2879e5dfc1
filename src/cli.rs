use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "datacensus",
    version,
    about = "Data quality scoring for open JSON datasets"
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
    /// Score a dataset fetched from a URL or read from a JSON file
    Evaluate(EvaluateCommand),
    /// List the criteria and the scores each one builds on
    Criteria,
}

#[derive(Args)]
pub struct EvaluateCommand {
    /// `http(s)://` URL or path to a JSON array of records
    pub source: String,
    /// Metadata sidecar (`.json` or TOML)
    #[arg(long)]
    pub metadata: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 1 when the overall score falls below this value
    #[arg(long, value_parser = parse_score)]
    pub min_score: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_score(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if (0.0..=10.0).contains(&value) {
        Ok(value)
    } else {
        Err("must be between 0 and 10".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "datacensus",
            "-vv",
            "evaluate",
            "rows.json",
            "--metadata",
            "meta.toml",
            "-f",
            "json",
            "--min-score",
            "6.5",
        ])
        .expect("arguments should parse");
        assert_eq!(cli.verbose, 2);
        let Commands::Evaluate(cmd) = cli.command else {
            panic!("expected evaluate command");
        };
        assert_eq!(cmd.source, "rows.json");
        assert_eq!(cmd.metadata, Some(PathBuf::from("meta.toml")));
        assert!(matches!(cmd.format, Some(ReportFormat::Json)));
        assert_eq!(cmd.min_score, Some(6.5));
    }

    #[test]
    fn min_score_must_be_in_range() {
        let parsed = Cli::try_parse_from(["datacensus", "evaluate", "x.json", "--min-score", "12"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let parsed = Cli::try_parse_from(["datacensus", "-q", "-v", "criteria"]);
        assert!(parsed.is_err());
    }
}
