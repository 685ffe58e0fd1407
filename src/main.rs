//! CLI entry point for the pipe map generator

use clap::Parser;
use pipetile::io::cli::{Cli, MapRunner};

fn main() -> pipetile::Result<()> {
    // Initialize logging to stderr, quiet unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let mut runner = MapRunner::new(cli);
    runner.process()
}
