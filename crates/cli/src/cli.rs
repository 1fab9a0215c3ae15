//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// rancher-logstash - container log shipper with Rancher stack enrichment
#[derive(Parser, Debug)]
#[command(
    name = "rancher-logstash",
    author,
    version,
    about = "Ships container logs enriched with Rancher stack names to Logstash",
    long_about = "Reads container log records, tags each one with the Rancher stack that \n\
                  owns the emitting container, and forwards it as JSON to every \n\
                  configured Logstash route over UDP or TCP."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "RANCHER_LOGSTASH_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "json",
        global = true,
        env = "RANCHER_LOGSTASH_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Forward records from the input to every route
    Run(RunArgs),

    /// Validate configuration file without running
    Validate(ValidateArgs),
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, env = "RANCHER_LOGSTASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra route URI, e.g. logstash+tcp://collector:5000 (repeatable)
    #[arg(short, long = "route", env = "ROUTE_URIS", value_delimiter = ',')]
    pub routes: Vec<String>,

    /// Newline-delimited JSON log records ("-" for stdin)
    #[arg(short, long, default_value = "-", env = "RANCHER_LOGSTASH_INPUT")]
    pub input: String,

    /// Override the input channel capacity
    #[arg(long, env = "RANCHER_LOGSTASH_BUFFER_SIZE")]
    pub buffer_size: Option<usize>,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "RANCHER_LOGSTASH_METRICS_PORT")]
    pub metrics_port: u16,

    /// Validate configuration and exit without forwarding
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    #[default]
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    Compact,
}
