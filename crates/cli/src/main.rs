mod cli;
mod commands;
mod input;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use studyplan_core::config::{self, Config};

use crate::cli::{CliArgs, Command};

fn main() -> Result<ExitCode> {
    config::load_dotenv();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    config.log_summary();
    let pretty = config.output.pretty && !args.compact;
    let text = input::read_input(args.command.input(), config.input.max_bytes)?;
    debug!(bytes = text.len(), "read input");

    let value = match &args.command {
        Command::Validate { .. } => {
            return Ok(match commands::validate(&text) {
                Ok(line) => {
                    println!("{}", line);
                    ExitCode::SUCCESS
                }
                Err(report) => {
                    println!("{}", report);
                    ExitCode::FAILURE
                }
            });
        }
        Command::Normalize { .. } => commands::normalize(&text),
        Command::Stamp {
            component_id, id, ..
        } => commands::stamp(&text, *component_id, *id),
        Command::Notifications { .. } => commands::notifications(&text),
    };

    let value = value.map_err(|e| {
        warn!(kind = e.kind(), path = %e.path(), "rejected payload");
        anyhow::anyhow!(commands::describe(&e))
    })?;
    let rendered = commands::render(&value, pretty).context("failed to render output")?;
    println!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}
