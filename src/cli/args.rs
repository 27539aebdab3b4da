//! CLI argument definitions

use clap::Parser;

#[derive(Parser)]
#[command(name = "sananmuunnos")]
#[command(about = "Make a sananmuunnos (Finnish spoonerism) out of two words")]
#[command(version)]
pub struct Cli {
    /// First word of the pair
    pub word1: String,

    /// Second word of the pair
    pub word2: String,

    /// Show which rule produced the transformation
    #[arg(short, long)]
    pub verbose: bool,
}
