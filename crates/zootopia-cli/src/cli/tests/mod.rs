//! CLI tests: argument parsing, prompts, and full runs against a fake transport.

use super::Cli;
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}
