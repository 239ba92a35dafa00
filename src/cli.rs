use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "githead")]
#[command(about = "Scans a list of hosts for publicly exposed .git/HEAD files")]
pub struct Cli {
    /// Path to the YAML config file
    #[arg(short, long, default_value = "config.yml")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
