//! The interactive navigation session: raw mode ownership, cursor state and
//! the incremental redraw loop.
//!
//! The session prints the static header exactly once and after that only
//! ever rewrites the list region, erasing exactly as many lines as the
//! previous redraw produced. It is the sole writer to the terminal while it
//! runs.

use std::io::Write;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use quickpick_core::error::{Error, Result};
use quickpick_core::viewport;

use super::keys::KeyReader;
use super::types::{NavKey, Outcome};

/// Most list rows drawn at once; longer lists scroll behind `...` markers.
pub const MAX_VISIBLE: usize = 10;

// ANSI sequences used by the redraw loop, emitted verbatim.
const ERASE_LINE_ABOVE: &str = "\x1b[1A\x1b[2K";
const HIGHLIGHT: &str = "\x1b[94m";
const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// Scoped ownership of the terminal's raw input mode.
///
/// Raw mode is released when the guard drops, which covers every exit path
/// out of a session, including panics unwinding through it. Release is
/// idempotent, so an early explicit [`release`](RawModeGuard::release)
/// followed by the drop is safe.
pub struct RawModeGuard {
    engaged: bool,
}

impl RawModeGuard {
    /// Switches the terminal to raw mode for the guard's lifetime.
    pub fn engage() -> Result<Self> {
        enable_raw_mode().map_err(Error::TerminalUnavailable)?;
        Ok(Self { engaged: true })
    }

    pub fn release(&mut self) {
        if self.engaged {
            let _ = disable_raw_mode();
            self.engaged = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// One interactive selection over a fixed list of display rows.
///
/// Generic over the output sink and key reader so tests can drive a session
/// with a byte buffer and a scripted key sequence.
pub struct Session<'a, W: Write, K: KeyReader> {
    options: &'a [String],
    out: W,
    keys: K,
    cursor: usize,
    lines_drawn: usize,
}

impl<'a, W: Write, K: KeyReader> Session<'a, W, K> {
    pub fn new(options: &'a [String], out: W, keys: K) -> Self {
        Self {
            options,
            out,
            keys,
            cursor: 0,
            lines_drawn: 0,
        }
    }

    /// Runs the session to completion.
    ///
    /// The caller is expected to hold the raw mode guard for the duration of
    /// the call. Up/Down clamp the cursor at the list boundaries rather than
    /// wrapping; unrecognized keys do not trigger a redraw.
    pub fn run(&mut self, header: &str) -> Result<Outcome> {
        if self.options.is_empty() {
            return Err(Error::EmptyOptions);
        }

        self.print_header(header)?;
        self.redraw()?;

        loop {
            match self.keys.read_key() {
                NavKey::MoveUp => {
                    if self.cursor > 0 {
                        self.cursor -= 1;
                        self.redraw()?;
                    }
                }
                NavKey::MoveDown => {
                    if self.cursor < self.options.len() - 1 {
                        self.cursor += 1;
                        self.redraw()?;
                    }
                }
                NavKey::Accept => return Ok(Outcome::Accepted(self.cursor)),
                NavKey::Cancel => return Ok(Outcome::Cancelled),
                NavKey::Ignore => {}
            }
        }
    }

    fn print_header(&mut self, header: &str) -> Result<()> {
        // Raw mode disables output post-processing, so rows end in \r\n.
        write!(
            self.out,
            "\r\n{header}\r\nUse arrow keys to navigate, Enter to select, Esc or Ctrl+C to cancel\r\n\r\n"
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Erases the previous list region and draws the current one, leaving
    /// the header untouched.
    fn redraw(&mut self) -> Result<()> {
        for _ in 0..self.lines_drawn {
            write!(self.out, "{ERASE_LINE_ABOVE}")?;
        }

        let window = viewport::window(self.options.len(), self.cursor, MAX_VISIBLE);
        let mut lines = 0;

        if window.clipped_above() {
            write!(self.out, "  ...\r\n")?;
            lines += 1;
        }

        for index in window.start..window.end {
            let option = &self.options[index];
            if index == self.cursor {
                write!(self.out, "{HIGHLIGHT}{REVERSE}> {option}{RESET}\r\n")?;
            } else if index < self.cursor {
                // Rows above the cursor stay marked; the selection reads as
                // "everything up to here".
                write!(self.out, "{HIGHLIGHT}> {option}{RESET}\r\n")?;
            } else {
                write!(self.out, "  {option}\r\n")?;
            }
            lines += 1;
        }

        if window.clipped_below(self.options.len()) {
            write!(self.out, "  ...\r\n")?;
            lines += 1;
        }

        self.out.flush()?;
        self.lines_drawn = lines;
        Ok(())
    }
}
