//! CLI entry point for the cut-line composition renderer

use clap::Parser;
use mondrian::io::cli::{BatchRunner, Cli};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> mondrian::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let mut runner = BatchRunner::new(cli);
    runner.process()
}
