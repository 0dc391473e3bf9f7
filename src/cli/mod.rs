pub mod formatter;

use crate::core::config::{default_config, load_config, Config};
use crate::core::dedup::DeDup;
use crate::DedupError;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "dedupe",
    version,
    about = "Remove duplicate integers with three interchangeable strategies",
    long_about = "Prints the input sequence followed by the result of each strategy: \
                  simple looping and original order keep first-occurrence order, \
                  the distinct stream returns the same values in an unspecified order. \
                  Without arguments the built-in sample sequence is used."
)]
pub struct Cli {
    /// Comma-separated integers to deduplicate instead of the built-in sample
    #[arg(long, allow_hyphen_values = true)]
    pub values: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "DEDUPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of threads to use (0 = all available)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse `1, -2,3` into integers. An empty string yields an empty sequence.
pub fn parse_values(raw: &str) -> Result<Vec<i32>, DedupError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<i32>().map_err(|e| {
                DedupError::InvalidInput(format!("'{}' is not a 32-bit integer: {}", item, e))
            })
        })
        .collect()
}

/// Config file (if any) with command-line overrides applied
pub fn effective_config(cli: &Cli) -> Result<Config, DedupError> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config(path)?
        }
        None => default_config(),
    };

    if let Some(raw) = &cli.values {
        config.input.values = Some(parse_values(raw)?);
    }
    if let Some(threads) = cli.threads {
        config.performance.threads = threads;
    }

    Ok(config)
}

/// Process exit code for an error surfaced by the binary
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DedupError>() {
        Some(DedupError::Configuration(_)) => 2,
        Some(DedupError::Io(_)) => 3,
        Some(DedupError::InvalidInput(_)) | Some(DedupError::Parse(_)) => 4,
        _ => 1,
    }
}

pub fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let dedup = match &config.input.values {
        Some(values) => DeDup::with_values(values.clone()),
        None => DeDup::new(),
    }
    .with_parallel_threshold(config.performance.parallel_threshold);

    info!(
        input = dedup.values().len(),
        sample = config.input.values.is_none(),
        "deduplicating"
    );

    let report = dedup.run_all();

    match cli.format {
        OutputFormat::Text => {
            write!(out, "{}", formatter::render_text(&report, &config.output))?
        }
        OutputFormat::Json => writeln!(out, "{}", formatter::render_json(&report)?)?,
    }

    Ok(())
}
