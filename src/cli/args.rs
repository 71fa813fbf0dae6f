//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Sort a list by asking which of two items has higher priority
///
/// Reads one item per line from FILE, builds a balanced tree by asking a
/// question for each needed comparison, then prints the items from highest
/// to lowest priority.
#[derive(Parser, Debug)]
#[command(name = "priosort")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File with one item per line
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Increase log verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Also print the tree structure with balance factors
    #[arg(long)]
    pub dump: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::parse_from(vec!["priosort", "-d", "-d", "--dump", "todo.txt"]);
        assert_eq!(cli.debug, 2);
        assert!(cli.dump);
        assert_eq!(cli.file, PathBuf::from("todo.txt"));
    }
}
