//! Quickpick CLI Library
//!
//! This crate provides the terminal-facing side of quickpick: an interactive
//! single-selection list navigator drawn directly with ANSI escape sequences,
//! with no pre-built menu library underneath.
//!
//! # Key Features
//!
//! - **Interactive List Navigation**: Scrollable list with arrow-key cursor
//!   movement and a bounded viewport over long lists
//! - **Raw Keyboard Decoding**: Platform-specific key byte sequences decoded
//!   into a small set of logical navigation events
//! - **Guaranteed Terminal Restore**: Raw mode is held by an RAII guard and
//!   released on every exit path
//! - **Plain-Prompt Fallback**: Numbered line-based selection when the
//!   terminal cannot enter raw mode
//!
//! # Architecture
//!
//! The CLI is organized into two modules:
//!
//! - [`cli_args`]: Command-line argument parsing for the `qp` binary
//! - [`navigator`]: The navigation session, key decoding and rendering
//!
//! # Examples
//!
//! The `qp` binary presents its arguments as a list and prints the pick:
//!
//! ```bash
//! # Choose between three options, print the chosen text
//! qp apple banana cherry
//!
//! # Custom header, print the zero-based index instead
//! qp --message "Pick a fruit" --print-index apple banana cherry
//! ```

pub mod cli_args;
pub mod navigator;
