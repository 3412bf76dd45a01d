//! chroma palette generator CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use chroma_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod render;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let store_dir = cli.store.as_deref();
    let result = match &cli.command {
        Command::Generate(args) => commands::run_generate(args, store_dir),
        Command::Css(args) => commands::run_css(args, store_dir),
        Command::Tailwind(args) => commands::run_tailwind(args, store_dir),
        Command::Export(args) => commands::run_export(args, store_dir),
        Command::A11y(args) => commands::run_a11y(args, store_dir),
        Command::List => commands::run_list(store_dir),
        Command::Contrast(args) => commands::run_contrast(args),
        Command::Blend(args) => commands::run_blend(args),
        Command::Delete(args) => commands::run_delete(args, store_dir),
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
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
