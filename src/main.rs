use clap::Parser;
use colored::*;
use dedupe::cli::{self, Cli};
use dedupe::utils::parallel;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG takes precedence, then DEDUPE_LOG, then -v
    let log_level = std::env::var("DEDUPE_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(cli::exit_code(&e));
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let config = cli::effective_config(&args)?;

    let num_threads = parallel::resolve_threads(config.performance.threads);
    parallel::configure_thread_pool(num_threads)
        .map_err(|e| dedupe::DedupError::Configuration(format!("thread pool: {}", e)))?;
    tracing::debug!(threads = num_threads, "thread pool ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&args, &config, &mut out)
}
