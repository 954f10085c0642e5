//! Bridgefee command-line application library

pub mod cli;
pub mod commands;

use anyhow::Context;
use bridge_core::AppConfig;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use cli::{Subcommand, CLI};

/// Log filter: a non-empty `RUST_LOG` wins, otherwise `--log.level` applies.
/// hyper is capped at `warn` either way.
pub fn log_filter(rust_log: Option<&str>, log_level: Level) -> anyhow::Result<EnvFilter> {
    let filter = match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => {
            EnvFilter::builder().parse_lossy(directives)
        }
        _ => EnvFilter::default().add_directive(LevelFilter::from_level(log_level).into()),
    };
    Ok(filter.add_directive("hyper=warn".parse()?))
}

/// Parse arguments and run the selected command
pub async fn run() -> anyhow::Result<()> {
    let cli = CLI::parse();

    // Logs go to stderr so `reconcile` output stays pipeable
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref(), cli.log_level)?)
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            tracing::debug!("No config file given, using defaults");
            AppConfig::default()
        }
    };

    match cli.command {
        Subcommand::Reconcile {
            input,
            fee_denominator,
        } => commands::reconcile::run(&config, &input, fee_denominator),
        Subcommand::Serve {
            http_addr,
            http_port,
        } => commands::serve::run(config, http_addr, http_port).await,
    }
}
