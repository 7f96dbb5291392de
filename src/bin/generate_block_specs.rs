//! Writes every block test fixture under the output root.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use radio_block_oracles::{
    config::GeneratorConfig,
    fixtures::{register_all, registry::Registry},
    prelude::DEFAULT_SEED,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "generate_block_specs")]
#[command(about = "Generate deterministic oracle fixtures for the DSP block tests")]
struct Cli {
    /// Directory the fixture paths are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_root: PathBuf,

    /// Base seed every fixture's input sampler is derived from
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Print the registered fixture paths and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut registry = Registry::new();
    register_all(&mut registry);

    if cli.list {
        for path in registry.paths() {
            println!("{path}");
        }
        return ExitCode::SUCCESS;
    }

    let config = GeneratorConfig::default()
        .with_output_root(&cli.output_root)
        .with_seed(cli.seed);
    info!(root = %config.output_root.display(), seed = config.seed, fixtures = registry.len(), "generating fixtures");

    let report = match registry.run(&config) {
        Ok(report) => report,
        Err(err) => {
            error!(error = %err, "cannot generate fixtures");
            return ExitCode::FAILURE;
        }
    };
    if report.is_success() {
        info!(written = report.written().len(), "all fixtures written");
        ExitCode::SUCCESS
    } else {
        error!(
            written = report.written().len(),
            failed = report.failures().len(),
            "fixture generation incomplete"
        );
        ExitCode::FAILURE
    }
}
