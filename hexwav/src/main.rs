//! hexwav - Main entry point
//!
//! Reads a hex-dumped WAV file, applies one effect, writes the hex dump back.
//!
//! **Usage:**
//! ```bash
//! hexwav -fin 500 < input.hex > output.hex
//! hexwav -pan 2000 --input input.hex --output output.hex
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexwav::config::TomlConfig;
use hexwav::effects::parse_milliseconds;
use hexwav::{Effect, EffectRequest};

/// Command-line arguments for hexwav
#[derive(Parser, Debug)]
#[command(name = "hexwav")]
#[command(about = "Apply fade-in, fade-out or pan to a hex-dumped WAV stream")]
#[command(version)]
struct Args {
    /// Effect to apply: -fin, -fout or -pan
    #[arg(allow_hyphen_values = true)]
    effect: Effect,

    /// Effect duration in milliseconds
    #[arg(allow_hyphen_values = true, value_parser = parse_milliseconds)]
    milliseconds: u64,

    /// Read the hex dump from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Configuration file
    #[arg(long, value_name = "FILE", env = "HEXWAV_CONFIG")]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config =
        TomlConfig::resolve(args.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(config.logging.effective_level(args.log_level.as_deref()));
    debug!(?args, "starting");

    let input = open_input(args.input.as_deref())?;
    let mut output = open_output(args.output.as_deref())?;

    let request = EffectRequest::new(args.effect, args.milliseconds);
    hexwav::process(input, &mut output, request).context("Cannot process input")?;

    Ok(())
}

/// Logs go to stderr; stdout carries the hex dump
fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("hexwav={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
