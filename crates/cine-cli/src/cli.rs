//! CLI argument definitions for cine-locate.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use cine_model::{Axis, Query};

/// Catalog file read when neither `--csv` nor `CINE_LOCATE_CSV` is given.
pub const DEFAULT_CSV_PATH: &str = "cleaned_streaming_titles_final.csv";

#[derive(Parser)]
#[command(
    name = "cine-locate",
    version,
    about = "Cine Locate - Filter a streaming catalog by type, genre, decade and platform",
    long_about = "Filter a streaming-service title catalog stored as CSV.\n\n\
                  Column names are detected from common aliases (title/show_id/name,\n\
                  listed_in/genre, release_year/year, netflix/hulu/prime_video/disney+ flags)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog CSV file to load.
    #[arg(
        long = "csv",
        value_name = "PATH",
        env = "CINE_LOCATE_CSV",
        default_value = DEFAULT_CSV_PATH,
        global = true
    )]
    pub csv: PathBuf,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter titles and print the matches.
    Search(SearchArgs),

    /// List the values available for one filter, given the other filters.
    Options(OptionsArgs),

    /// Show which CSV column each logical field was read from.
    Fields,
}

/// Facet filters shared by `search` and `options`. Omitted means "any".
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Content type, e.g. "Movie" or "TV Show".
    #[arg(long = "type", value_name = "TYPE")]
    pub content_type: Option<String>,

    /// A single genre, matched against each listed genre.
    #[arg(long = "genre")]
    pub genre: Option<String>,

    /// Release decade, e.g. "1990s".
    #[arg(long = "decade")]
    pub decade: Option<String>,

    /// Streaming platform, e.g. "Netflix" or "Amazon Prime".
    #[arg(long = "platform")]
    pub platform: Option<String>,
}

impl FilterArgs {
    pub fn to_query(&self) -> Query {
        Query::new()
            .with(Axis::Type, self.content_type.as_deref())
            .with(Axis::Genre, self.genre.as_deref())
            .with(Axis::Decade, self.decade.as_deref())
            .with(Axis::Platform, self.platform.as_deref())
    }
}

#[derive(Parser, Debug, Default)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Maximum number of titles to print (0 for all).
    ///
    /// Defaults to 400 when a filter is set and 100 when none is.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug)]
pub struct OptionsArgs {
    /// Filter whose values to list.
    #[arg(value_enum)]
    pub axis: AxisArg,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormatArg {
    #[default]
    Table,
    Cards,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AxisArg {
    Type,
    Genre,
    Decade,
    Platform,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Type => Axis::Type,
            AxisArg::Genre => Axis::Genre,
            AxisArg::Decade => Axis::Decade,
            AxisArg::Platform => Axis::Platform,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
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
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_search_filters() {
        let cli = Cli::try_parse_from([
            "cine-locate",
            "--csv",
            "titles.csv",
            "search",
            "--type",
            "Movie",
            "--platform",
            " Hulu ",
            "--format",
            "cards",
        ])
        .unwrap();
        assert_eq!(cli.csv, PathBuf::from("titles.csv"));
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        let query = args.filters.to_query();
        assert_eq!(query.get(Axis::Type), Some("Movie"));
        assert_eq!(query.get(Axis::Platform), Some("Hulu"));
        assert_eq!(query.get(Axis::Genre), None);
        assert!(matches!(args.format, OutputFormatArg::Cards));
        assert_eq!(args.limit, None);
    }

    #[test]
    fn parses_options_axis() {
        let cli = Cli::try_parse_from(["cine-locate", "options", "genre", "--platform", "Netflix"])
            .unwrap();
        let Command::Options(args) = cli.command else {
            panic!("expected options");
        };
        assert_eq!(Axis::from(args.axis), Axis::Genre);
        assert_eq!(args.filters.to_query().get(Axis::Platform), Some("Netflix"));
    }
}
