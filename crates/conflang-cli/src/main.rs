//! conflang - YAML to conflang translator
//!
//! Reads YAML from standard input (or `--input`), writes the translation to
//! standard output (or `--output`). Failures are reported on standard error
//! as `Ошибка: <message>` with a non-zero exit status.

use anyhow::Result;
use clap::Parser;
use conflang_cli::cli::Cli;
use conflang_cli::config::CliConfig;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", conflang_cli::format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::load_from(path)?,
        None => CliConfig::load()?,
    };

    init_tracing(&config.log_level)?;
    tracing::debug!("Loaded configuration: {:?}", config);

    conflang_cli::run(cli, &config)
}

/// Initialize tracing subscriber on standard error
fn init_tracing(default_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("не удалось инициализировать журналирование: {}", e))?;

    Ok(())
}
