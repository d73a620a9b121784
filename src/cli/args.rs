use crate::utils::serialization::OutputFormat;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Input files or directories to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Framework name stamped on every pattern (default: generic)
    #[arg(long, value_name = "NAME")]
    pub framework: Option<String>,

    /// Write one file per pattern into this directory instead of stdout
    #[arg(short, long, value_name = "DIR", help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Output encoding: json or yaml (default: json)
    #[arg(long, value_name = "FORMAT", help_heading = "Output")]
    pub format: Option<OutputFormat>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long, help_heading = "Output")]
    pub compact: bool,

    /// Only read files directly inside directory arguments
    #[arg(long)]
    pub no_recursive: bool,

    /// Seed identifier generation for reproducible ids
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Resolve task assignments against agent roles and names
    #[arg(long)]
    pub link_by_role: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Serialized pattern files (JSON or YAML)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}
