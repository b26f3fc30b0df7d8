use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pxm",
    about = "Merge an active descriptor tree with its shadow, recovering retired fields",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge an active file descriptor with its shadow
    Merge(MergeArgs),
    /// Print the effective merge configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// Active descriptor (JSON)
    #[arg(long)]
    pub active: PathBuf,
    /// Shadow descriptor (JSON)
    #[arg(long)]
    pub shadow: PathBuf,
    /// Where to write the merged descriptor; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Merge configuration (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Print what was recovered and dropped
    #[arg(long)]
    pub report: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Merge configuration (TOML) to validate and echo
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
