//! TakeoffKit CLI entry point.

use clap::Parser;
use takeoffkit::init_logging;
use takeoffkit_cli::Cli;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging
    init_logging()?;

    let stdout = std::io::stdout();
    takeoffkit_cli::run(&args, &mut stdout.lock())
}
