//! End-to-end navigation tests: raw terminal byte sequences through the key
//! decoders driving a full session, asserting on the bytes rendered.

use std::collections::VecDeque;

use quickpick_cli::navigator::keys::{AnsiKeyReader, ByteSource, ConsoleKeyReader};
use quickpick_cli::navigator::session::Session;
use quickpick_cli::navigator::Outcome;

/// Byte source delivering each slice as one read cycle, the way a terminal
/// delivers one key press per blocking read.
struct KeyPresses {
    cycles: VecDeque<VecDeque<u8>>,
    current: VecDeque<u8>,
}

impl KeyPresses {
    fn new(presses: &[&[u8]]) -> Self {
        Self {
            cycles: presses
                .iter()
                .map(|press| press.iter().copied().collect())
                .collect(),
            current: VecDeque::new(),
        }
    }
}

impl ByteSource for KeyPresses {
    fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        loop {
            if let Some(byte) = self.current.pop_front() {
                return Ok(Some(byte));
            }
            match self.cycles.pop_front() {
                Some(cycle) => self.current = cycle,
                None => return Ok(None),
            }
        }
    }

    fn buffered_byte(&mut self) -> Option<u8> {
        self.current.pop_front()
    }
}

fn options(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item {i}")).collect()
}

#[test]
fn test_ansi_arrow_keys_select_third_item() {
    let opts = options(3);
    let mut out = Vec::new();
    let keys = AnsiKeyReader::new(KeyPresses::new(&[b"\x1b[B", b"\x1b[B", b"\r"]));

    let outcome = Session::new(&opts, &mut out, keys).run("Pick one").unwrap();

    assert_eq!(outcome, Outcome::Accepted(2));
}

#[test]
fn test_ansi_escape_key_cancels() {
    let opts = options(3);
    let mut out = Vec::new();
    let keys = AnsiKeyReader::new(KeyPresses::new(&[b"\x1b[B", b"\x1b"]));

    let outcome = Session::new(&opts, &mut out, keys).run("Pick one").unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
}

#[test]
fn test_ansi_ctrl_c_cancels() {
    let opts = options(3);
    let mut out = Vec::new();
    let keys = AnsiKeyReader::new(KeyPresses::new(&[b"\x03"]));

    let outcome = Session::new(&opts, &mut out, keys).run("Pick one").unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
}

#[test]
fn test_ansi_unknown_keys_are_ignored_mid_session() {
    let opts = options(3);
    let mut out = Vec::new();
    let keys = AnsiKeyReader::new(KeyPresses::new(&[
        b"\x1b[B",
        b"x",
        b"\x1b[C",
        b"\x1b[B",
        b"\r",
    ]));

    let outcome = Session::new(&opts, &mut out, keys).run("Pick one").unwrap();

    assert_eq!(outcome, Outcome::Accepted(2));
}

#[test]
fn test_console_arrow_keys_select_third_item() {
    let opts = options(3);
    let mut out = Vec::new();
    let keys = ConsoleKeyReader::new(KeyPresses::new(&[b"\xe0P", b"\xe0P", b"\r"]));

    let outcome = Session::new(&opts, &mut out, keys).run("Pick one").unwrap();

    assert_eq!(outcome, Outcome::Accepted(2));
}

#[test]
fn test_scrolled_selection_renders_clamped_window() {
    let opts = options(25);
    let mut presses: Vec<&[u8]> = vec![b"\x1b[B"; 20];
    presses.push(b"\r");

    let mut out = Vec::new();
    let keys = AnsiKeyReader::new(KeyPresses::new(&presses));
    let outcome = Session::new(&opts, &mut out, keys).run("History").unwrap();

    assert_eq!(outcome, Outcome::Accepted(20));

    let rendered = String::from_utf8(out).unwrap();
    let last_frame = rendered.rsplit("\x1b[2K").next().unwrap();
    assert!(last_frame.starts_with("  ...\r\n"));
    assert!(!last_frame.ends_with("  ...\r\n"));
    assert!(last_frame.contains("\x1b[94m\x1b[7m> item 20\x1b[0m\r\n"));
}

#[test]
fn test_header_survives_navigation_untouched() {
    let opts = options(25);
    let mut presses: Vec<&[u8]> = vec![b"\x1b[B"; 5];
    presses.push(b"\r");

    let mut out = Vec::new();
    let keys = AnsiKeyReader::new(KeyPresses::new(&presses));
    Session::new(&opts, &mut out, keys).run("History").unwrap();

    let rendered = String::from_utf8(out).unwrap();
    assert_eq!(rendered.matches("History").count(), 1);
    // Every erase is paired with a cursor-up, so the redraw loop can never
    // climb above the list region into the header.
    assert_eq!(
        rendered.matches("\x1b[1A").count(),
        rendered.matches("\x1b[2K").count()
    );
}
