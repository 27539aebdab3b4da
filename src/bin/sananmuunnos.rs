//! sananmuunnos - Finnish spoonerism generation with vowel harmony repair
//!
//! Takes two words and prints their sananmuunnos, or "no result" when no
//! phonological rule applies to the pair.

use clap::Parser;
use colored::Colorize;
use std::process;

use sananmuunnos::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
