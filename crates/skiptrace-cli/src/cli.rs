//! CLI argument definitions for the skiptrace launcher.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use skiptrace_map::DEFAULT_CUTOFF;
use skiptrace_submit::DEFAULT_MAX_RESULTS;
use skiptrace_transform::DEFAULT_PREVIEW_ROWS;

#[derive(Parser)]
#[command(
    name = "skiptrace",
    version,
    about = "Skiptrace launcher - format mailing addresses and start a remote skip-trace run",
    long_about = "Detect the house number, street, city, state and ZIP columns of a CSV file,\n\
                  format every row as \"<house> <street>; <city>, <state> <zip>\" and submit\n\
                  the list to a remote skip-tracing actor."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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

    /// Allow address values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect address columns and show the formatted addresses.
    Preview(PreviewArgs),

    /// Detect, format and submit addresses to the remote actor.
    Submit(SubmitArgs),

    /// List the header aliases used to detect each address field.
    Aliases(AliasArgs),
}

/// Options shared by commands that read an address file.
#[derive(Args)]
pub struct InputArgs {
    /// CSV file with one mailing address per row.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// TOML file overriding the header aliases.
    #[arg(long = "aliases", value_name = "PATH")]
    pub aliases: Option<PathBuf>,

    /// Minimum header similarity (0.0 to 1.0) for an alias to match.
    #[arg(long = "cutoff", default_value_t = DEFAULT_CUTOFF, value_parser = parse_cutoff)]
    pub cutoff: f64,
}

fn parse_cutoff(value: &str) -> Result<f64, String> {
    let cutoff: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if (0.0..=1.0).contains(&cutoff) {
        Ok(cutoff)
    } else {
        Err(format!("cutoff must be between 0.0 and 1.0, got `{value}`"))
    }
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of formatted addresses to show.
    #[arg(long = "limit", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub limit: usize,
}

#[derive(Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Secrets file with an [apify] table (default: platform config directory).
    #[arg(long = "secrets", value_name = "PATH")]
    pub secrets: Option<PathBuf>,

    /// Results requested per address.
    #[arg(long = "max-results", default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u32,

    /// Number of formatted addresses to show before submitting.
    #[arg(long = "limit", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub limit: usize,

    /// Print the request body instead of sending it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct AliasArgs {
    /// TOML file overriding the header aliases.
    #[arg(long = "aliases", value_name = "PATH")]
    pub aliases: Option<PathBuf>,
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

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn submit_defaults() {
        let cli = Cli::parse_from(["skiptrace", "submit", "leads.csv"]);
        let Command::Submit(args) = cli.command else {
            panic!("expected submit command");
        };
        assert_eq!(args.input.file, PathBuf::from("leads.csv"));
        assert_eq!(args.max_results, 1);
        assert_eq!(args.limit, 10);
        assert!(!args.dry_run);
        assert!(args.secrets.is_none());
    }

    #[test]
    fn cutoff_must_be_a_finite_ratio() {
        for bad in ["NaN", "inf", "1.5", "-0.1", "high"] {
            let parsed =
                Cli::try_parse_from(["skiptrace", "preview", "leads.csv", "--cutoff", bad]);
            assert!(parsed.is_err(), "accepted --cutoff {bad}");
        }
        let cli = Cli::parse_from(["skiptrace", "preview", "leads.csv", "--cutoff", "0.8"]);
        let Command::Preview(args) = cli.command else {
            panic!("expected preview command");
        };
        assert!((args.input.cutoff - 0.8).abs() < 1e-9);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["skiptrace", "preview", "leads.csv", "--log-format", "json"]);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
    }
}
