//! CLI entry point for the outfit generator

use clap::Parser;
use outfitgen::io::cli::{Cli, OutfitRunner};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("outfitgen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> outfitgen::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let runner = OutfitRunner::new(cli);
    runner.process()
}
