//! Quickpick Core Library
//!
//! This crate provides the terminal-independent parts of quickpick, an
//! interactive single-selection list navigator. Nothing in here touches the
//! terminal; it is the logic the terminal-facing CLI crate is built on.
//!
//! # Key Features
//!
//! - **Viewport Arithmetic**: Pure window computation for scrolling a cursor
//!   through a list taller than the space available to draw it
//! - **Error Handling**: Error types for all failure modes of a navigation
//!   session
//!
//! # Examples
//!
//! Computing the visible window for a long list:
//!
//! ```
//! use quickpick_core::viewport::window;
//!
//! let w = window(25, 20, 10);
//! assert_eq!((w.start, w.end), (15, 25));
//! assert!(w.clipped_above());
//! assert!(!w.clipped_below(25));
//! ```

pub mod error;
pub mod viewport;
