use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bikram Sambat calendar tool.
#[derive(Parser)]
#[command(
    name = "sambat",
    version,
    about = "Bikram Sambat date conversion, formatting and fiscal years"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: sambat.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a date between Bikram Sambat and Gregorian.
    Convert(ConvertArgs),
    /// Render a BS date or date-time with a strftime-style pattern.
    Format(FormatArgs),
    /// Show the fiscal year of a BS date.
    Fiscal(FiscalArgs),
    /// Print the current date-time in Nepal.
    Now(NowArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date as YYYY-MM-DD; Devanagari digits are accepted.
    pub date: String,

    /// Treat the input as BS and print the Gregorian date (default).
    #[arg(long = "to-ad", conflicts_with = "to_bs")]
    pub to_ad: bool,

    /// Treat the input as Gregorian and print the BS date.
    #[arg(long = "to-bs")]
    pub to_bs: bool,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// BS date (YYYY-MM-DD) or date-time (YYYY-MM-DD HH:MM:SS[.ffffff]),
    /// unless `--input-pattern` is given.
    pub value: String,

    /// Pattern; defaults to `[format]` settings in config.
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Read `value` with this pattern instead of the ISO shapes, e.g. "%d %B %Y".
    #[arg(short, long)]
    pub input_pattern: Option<String>,
}

/// Arguments for the `fiscal` subcommand.
#[derive(clap::Args)]
pub struct FiscalArgs {
    /// BS date (YYYY-MM-DD); defaults to today in Nepal.
    pub date: Option<String>,

    /// Label template, e.g. "{fiscal_year_name}".
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print the full fiscal year report as JSON.
    #[arg(long, conflicts_with = "format")]
    pub report: bool,
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Print naive UTC wall time instead of Nepal time.
    #[arg(long)]
    pub utc: bool,

    /// Pattern; defaults to `[format].datetime_pattern`.
    #[arg(short, long)]
    pub pattern: Option<String>,
}
