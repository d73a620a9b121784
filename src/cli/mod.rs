pub mod args;
pub mod commands;

pub use args::{NormalizeArgs, ValidateArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser, Debug)]
#[command(name = "agentic-patterns")]
#[command(version = crate::VERSION)]
#[command(about = "Normalize agentic workflow definitions into a common pattern model")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: normalize framework definitions into a directory, then validate the written patterns."
)]
pub struct Args {
    /// Read configuration from this file instead of ./patterns.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        about = "Normalize workflow definitions into patterns",
        long_about = "Normalize reads JSON and YAML workflow definitions, mints identifiers, validates each pattern, and writes the results.",
        after_help = "Example:\n    agentic-patterns normalize ./crews --framework crewai --output ./patterns"
    )]
    Normalize(NormalizeArgs),
    #[command(
        about = "Check serialized patterns for required fields",
        long_about = "Validate loads previously written patterns and reports every file missing a required field or agent.",
        after_help = "Example:\n    agentic-patterns validate ./patterns/crewai_research.json"
    )]
    Validate(ValidateArgs),
}

pub fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::Normalize(normalize_args) => {
            commands::normalize(args.config.as_deref(), normalize_args)
        }
        Command::Validate(validate_args) => commands::validate(validate_args),
    }
}
