//! Cine Locate CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use cine_cli::cli::{Cli, Command, LogFormatArg};
use cine_cli::commands::{
    load_catalog_or_empty, print_fields, print_options, print_search, run_options, run_search,
};
use cine_cli::logging::{LogConfig, LogFormat, init_logging};
use cine_engine::DisplayConfig;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let (catalog, load_error) = load_catalog_or_empty(&cli.csv);
    if let Some(error) = &load_error {
        eprintln!("error: {error:#}");
    }
    let display = DisplayConfig::default();

    let result = match &cli.command {
        Command::Search(args) => {
            let outcome = run_search(&catalog, args, &display);
            print_search(&outcome, args.format, &display)
        }
        Command::Options(args) => print_options(&run_options(&catalog, args)),
        Command::Fields => print_fields(&catalog),
    };
    let exit_code = match result {
        Ok(()) if load_error.is_none() => 0,
        Ok(()) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// `--log-level` wins over `-v/-q`, which win over `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.map(LevelFilter::from);
    let mut config = LogConfig::default()
        .with_level_filter(explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter()));
    config.use_env_filter = explicit.is_none() && !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
