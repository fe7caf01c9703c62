use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "songwalk")]
#[command(about = "Recommend songs similar to a given one using a weighted random walk")]
pub struct Args {
    /// Song to recommend from (case-insensitive)
    pub song: String,

    /// Similarity table with at least source,target,value columns
    #[arg(short = 't', long, value_name = "CSV", default_value = "public/subgraph.csv")]
    pub table: PathBuf,

    /// Maximum number of recommendations
    #[arg(short = 'n', long, value_name = "COUNT", default_value = "5")]
    pub limit: usize,

    /// Random walk length
    #[arg(long, value_name = "STEPS", default_value = "500")]
    pub steps: usize,

    /// Seed the walk for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Comma-separated hub names to deprioritize (replaces the built-in list)
    #[arg(long, value_name = "NAMES", conflicts_with = "hubs_file")]
    pub hubs: Option<String>,

    /// File with one hub name per line (replaces the built-in list)
    #[arg(long, value_name = "PATH")]
    pub hubs_file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show walk statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only print the song names
    #[arg(short, long)]
    pub quiet: bool,
}
