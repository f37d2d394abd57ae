use std::path::PathBuf;

use clap::Parser;

/// Create a data/ML project skeleton
#[derive(Parser, Debug)]
#[command(name = "mlscaffold")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: mlscaffold demo_project")]
pub struct Cli {
    /// Project name (letters, digits and underscores)
    pub name: String,

    /// Directory to create the project in (defaults to the current directory)
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Configuration file (defaults to the user config, if any)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not initialize version control
    #[arg(long)]
    pub no_vcs: bool,

    /// Do not create the dependency environment
    #[arg(long)]
    pub no_env: bool,

    /// Show what would be created without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
