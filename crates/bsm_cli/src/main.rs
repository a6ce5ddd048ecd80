//! BSM CLI - option analytics dashboard
//!
//! Operational entry point: loads configuration, initialises tracing and
//! dispatches to the command implementations in `bsm_cli::commands`.

use std::path::Path;

use anyhow::Context;
use bsm_cli::cli::{Cli, Commands};
use bsm_cli::commands;
use bsm_cli::config::{build_config, LogLevel};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise the tracing subscriber; `RUST_LOG` takes precedence over `level`.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = cli
        .command
        .input_args()
        .and_then(|args| args.format.as_deref());
    let log_level = cli
        .log_level
        .as_deref()
        .or(if cli.verbose { Some("debug") } else { None });

    let config = build_config(Path::new(&cli.config), log_level, format)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    init_tracing(config.general.log_level);
    info!(version = bsm_cli::VERSION, config = %cli.config, "bsm starting");
    debug!(?config, "Effective configuration");

    let today = chrono::Local::now().date_naive();
    let output_format = config.general.format;

    match &cli.command {
        Commands::Price { inputs } => {
            let output = inputs.output.as_deref();
            let inputs = inputs.resolve(&config.defaults, today);
            commands::price::run(&inputs, output_format, output)?
        }
        Commands::Curve {
            option_type,
            inputs,
        } => {
            let output = inputs.output.as_deref();
            let inputs = inputs.resolve(&config.defaults, today);
            commands::curve::run(
                &inputs,
                *option_type,
                &config.curve,
                output_format,
                output,
            )?
        }
        Commands::Check => commands::check::run()?,
    }

    Ok(())
}
