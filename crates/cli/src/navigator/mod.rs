//! Interactive single-selection list navigation.
//!
//! This module renders a scrollable list of options directly to the
//! terminal, moves a cursor with the arrow keys, and hands back the chosen
//! index. No pre-built menu library is involved; the list region is drawn
//! and redrawn with plain ANSI escape sequences.
//!
//! # Key Features
//!
//! - **Bounded Viewport**: At most ten rows are drawn at once, with `...`
//!   markers when the list continues above or below
//! - **Progressive Highlighting**: The cursor row is shown in reverse video
//!   and every row above it stays marked
//! - **Minimal Redraw**: The header is printed once; each key press rewrites
//!   only the list region
//! - **Guaranteed Restore**: Raw mode is scoped to the session and released
//!   on every exit path
//!
//! # User Interface
//!
//! Arrow keys move the cursor, Enter accepts, Esc or Ctrl+C cancels.

pub mod input;
pub mod keys;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use session::MAX_VISIBLE;
pub use types::{NavKey, Outcome};

use std::io::stdout;

use log::{debug, error, warn};
use quickpick_core::error::Error;

use self::keys::stdin_keys;
use self::session::{RawModeGuard, Session};

/// Presents `options` under `header` and returns the index the user picked.
///
/// Returns `None` when the user cancels, the option list is empty, or the
/// terminal misbehaves; failures are logged here and never propagate to the
/// caller. The terminal mode is left exactly as it was before the call.
pub fn navigate(header: &str, options: &[String]) -> Option<usize> {
    if options.is_empty() {
        warn!("{}", Error::EmptyOptions);
        return None;
    }

    let mut guard = match RawModeGuard::engage() {
        Ok(guard) => guard,
        Err(e) => {
            debug!("{e} Falling back to numbered selection.");
            return match input::prompt_numbered_choice(header, options) {
                Ok(choice) => choice,
                Err(e) => {
                    error!("Fallback selection failed: {e}");
                    None
                }
            };
        }
    };

    let outcome = Session::new(options, stdout(), stdin_keys()).run(header);
    guard.release();

    match outcome {
        Ok(Outcome::Accepted(index)) => Some(index),
        Ok(Outcome::Cancelled) => None,
        Err(e) => {
            error!("Selection failed: {e}");
            None
        }
    }
}
