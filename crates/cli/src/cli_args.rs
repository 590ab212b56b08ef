//! Command-line argument parsing for the `qp` binary.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;

/// Command-line arguments for the quickpick CLI tool.
///
/// The `qp` binary presents its positional arguments as an interactive list
/// and prints the user's pick to standard output.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Header message shown above the list.
    #[arg(long, short = 'm', default_value = "Select an option")]
    pub message: String,

    /// Print the zero-based index of the pick instead of its text.
    #[arg(long, short = 'i', action)]
    pub print_index: bool,

    /// The options to choose between.
    #[arg(required = true, num_args(1..))]
    pub options: Vec<String>,
}
