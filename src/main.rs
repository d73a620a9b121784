use agentic_patterns::{cli, logging};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    let _guard = logging::init(&args)?;
    cli::run(args)
}
