//! Command-line converter for YT timestamps.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use yson_time::{FractionStyle, TimeCodec};

use crate::config::{load_config, resolve_codec, resolve_log_level};
use crate::error::ToolError;

#[derive(Parser)]
#[command(name = "ytt")]
#[command(about = "Convert timestamps to and from the YT wire format", long_about = None)]
struct Cli {
    /// Fraction style for encoded timestamps
    #[arg(long, global = true)]
    fraction: Option<FractionArg>,

    /// Log filter, e.g. "debug" or "yson_time=trace"
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Path to config.toml (default: <config dir>/yson-time/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print YT timestamps as RFC 3339
    Decode {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Convert RFC 3339, @<unix seconds>, now or absent into YT timestamps
    Encode {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Rewrite YT timestamps in canonical form
    Normalize {
        #[arg(required = true)]
        values: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FractionArg {
    Significant,
    Micros,
}

impl From<FractionArg> for FractionStyle {
    fn from(arg: FractionArg) -> Self {
        match arg {
            FractionArg::Significant => FractionStyle::Significant,
            FractionArg::Micros => FractionStyle::Micros,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let filter = EnvFilter::try_new(resolve_log_level(cli.log_level, &config))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let codec = resolve_codec(cli.fraction.map(FractionStyle::from), &config);

    let (run, values): (fn(&TimeCodec, &str) -> Result<String, ToolError>, Vec<String>) =
        match cli.command {
            Command::Decode { values } => (commands::decode, values),
            Command::Encode { values } => (commands::encode, values),
            Command::Normalize { values } => (commands::normalize, values),
        };

    for value in &values {
        println!("{}", run(&codec, value)?);
    }

    Ok(())
}
