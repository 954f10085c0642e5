use std::path::PathBuf;

use clap::{Parser as ClapParser, Subcommand as ClapSubcommand};
use tracing::Level;

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

#[allow(clippy::upper_case_acronyms)]
#[derive(ClapParser)]
#[command(name = "bridgefee", author, version = VERSION_STRING, about, long_about = None)]
pub struct CLI {
    #[arg(
        long = "log.level",
        default_value_t = Level::INFO,
        value_name = "LOG_LEVEL",
        global = true
    )]
    pub log_level: Level,
    #[arg(
        long = "config",
        value_name = "CONFIG_FILE",
        help = "JSON configuration file; defaults apply when omitted",
        global = true
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Subcommand,
}

#[derive(ClapSubcommand)]
pub enum Subcommand {
    #[command(about = "Reconcile a batch of bridge legs and print the result as JSON")]
    Reconcile {
        #[arg(
            value_name = "FILE",
            help = "Legs JSON: an array, {\"legs\": [...]}, or {\"leg\": {...}, \"mode\": ...}. Use - for stdin"
        )]
        input: PathBuf,
        #[arg(long = "fee-denominator", value_name = "DENOMINATOR")]
        fee_denominator: Option<i64>,
    },
    #[command(about = "Serve the reconciliation HTTP API")]
    Serve {
        #[arg(long = "http.addr", value_name = "ADDRESS")]
        http_addr: Option<String>,
        #[arg(long = "http.port", value_name = "PORT")]
        http_port: Option<u16>,
    },
}
