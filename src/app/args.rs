use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use crate::humanize::{Format, Unit};

/// Render durations as localized text or ISO-8601.
#[derive(Parser, Debug)]
#[command(name = "durafmt", author, version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML or YAML configuration file
    #[arg(short, long, env = "DURAFMT_CONFIG")]
    pub config: Option<String>,

    #[arg(short, long, default_value_t = Level::INFO, env = "DURAFMT_LOG_LEVEL")]
    pub log_level: Level,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "DURAFMT_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Disable colors in log output
    #[arg(long, default_value_t = false, env = "NO_COLOR")]
    pub no_color: bool,

    /// Locale to render with (en, ru); overrides the config
    #[arg(long)]
    pub locale: Option<String>,

    /// Language hint used when no locale is given; falls back to the
    /// config's `locale_hint`, then to `LANG`
    #[arg(long)]
    pub lang: Option<String>,

    /// short, long or iso
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Unit of the "0 <unit>" text for an empty duration
    #[arg(short, long)]
    pub base_unit: Option<Unit>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Render milliseconds or ISO-8601 text
    Humanize { input: String },
    /// Render the distance between two RFC 3339 instants
    Between { from: String, to: String },
    /// Render the sum of two durations
    Add { a: String, b: String },
    /// Render the distance between two durations
    Sub { a: String, b: String },
    /// Print a duration as ISO-8601 text
    Iso { input: String },
    /// Print the effective locale table as YAML
    Locales,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Structured,
    Debug,
}

pub fn parse() -> Args {
    Args::parse()
}
