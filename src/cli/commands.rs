//! CLI command execution

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::rules::first_match_with_rule;
use crate::transform::try_transform;

/// Run the transformation for the parsed arguments and print the outcome.
///
/// A pair no rule matches is an answer, not an error: the command prints a
/// dimmed "no result" line and still succeeds.
pub fn execute(cli: Cli) -> Result<()> {
    let input = format!("{} {}", cli.word1, cli.word2);
    match try_transform(&input) {
        Ok(result) => {
            if cli.verbose {
                if let Some((rule, _)) = first_match_with_rule(&cli.word1, &cli.word2) {
                    eprintln!("{} {}", "rule:".dimmed(), rule.name());
                }
            }
            println!("{result}");
        }
        Err(_) => println!("{}", "no result".dimmed()),
    }
    Ok(())
}
