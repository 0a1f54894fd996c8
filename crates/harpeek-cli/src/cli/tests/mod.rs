//! CLI tests: argument parsing and end-to-end execution against temp files.

use super::{Cli, Outcome};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}
