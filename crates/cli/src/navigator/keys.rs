//! Raw keyboard input decoding.
//!
//! Terminals deliver navigation keys as multi-byte sequences whose shape
//! differs between the ANSI world (escape sequences such as `ESC [ A`) and
//! the legacy Windows console (a prefix byte followed by a scan code). Both
//! encodings are hidden behind [`KeyReader`], which yields one [`NavKey`]
//! per decoded sequence; the session never sees raw bytes.

use std::io::Read;

use log::debug;

use super::types::NavKey;

const ETX: u8 = 0x03;
const ESC: u8 = 0x1b;

/// Prefix byte the Windows console emits before an extended-key scan code.
const EXTENDED_PREFIX: u8 = 0xe0;

/// A byte stream read one blocking cycle at a time.
///
/// [`next_byte`](ByteSource::next_byte) blocks until the stream produces at
/// least one byte and buffers whatever arrived with it;
/// [`buffered_byte`](ByteSource::buffered_byte) hands out the rest of that
/// batch without blocking again. Terminals send escape sequences whole, so a
/// lone `ESC` with an empty buffer is a real Escape press rather than a
/// truncated sequence — no timers needed.
pub trait ByteSource {
    /// Blocks for the next byte. `None` means the stream is closed.
    fn next_byte(&mut self) -> std::io::Result<Option<u8>>;

    /// Pops a byte buffered by the last `next_byte` call, if any remain.
    fn buffered_byte(&mut self) -> Option<u8>;
}

/// [`ByteSource`] over any blocking reader, normally standard input.
pub struct ReaderSource<R: Read> {
    inner: R,
    buffer: [u8; 16],
    filled: usize,
    consumed: usize,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: [0; 16],
            filled: 0,
            consumed: 0,
        }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        if let Some(byte) = self.buffered_byte() {
            return Ok(Some(byte));
        }

        let read = self.inner.read(&mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }

        self.filled = read;
        self.consumed = 1;
        Ok(Some(self.buffer[0]))
    }

    fn buffered_byte(&mut self) -> Option<u8> {
        if self.consumed < self.filled {
            let byte = self.buffer[self.consumed];
            self.consumed += 1;
            Some(byte)
        } else {
            None
        }
    }
}

/// Reads one logical navigation key per call.
///
/// Read failures and end-of-stream are reported as [`NavKey::Cancel`] so a
/// session can never hang on a broken input stream.
pub trait KeyReader {
    fn read_key(&mut self) -> NavKey;
}

/// Decoder for terminals that send ANSI escape sequences, which is every
/// platform except the legacy Windows console.
pub struct AnsiKeyReader<S: ByteSource> {
    source: S,
}

impl<S: ByteSource> AnsiKeyReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: ByteSource> KeyReader for AnsiKeyReader<S> {
    fn read_key(&mut self) -> NavKey {
        let first = match self.source.next_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => return NavKey::Cancel,
            Err(e) => {
                debug!("Key read failed, treating as cancel: {e}");
                return NavKey::Cancel;
            }
        };

        match first {
            b'\r' | b'\n' => NavKey::Accept,
            ETX => NavKey::Cancel,
            ESC => match self.source.buffered_byte() {
                // A bare Escape press arrives as a single byte; arrow keys
                // arrive with the whole sequence in one read cycle.
                None => NavKey::Cancel,
                Some(b'[') => match self.source.buffered_byte() {
                    Some(b'A') => NavKey::MoveUp,
                    Some(b'B') => NavKey::MoveDown,
                    _ => NavKey::Ignore,
                },
                Some(_) => NavKey::Ignore,
            },
            _ => NavKey::Ignore,
        }
    }
}

/// Decoder for the legacy Windows console input model, where special keys
/// arrive as a prefix byte followed by a scan code.
pub struct ConsoleKeyReader<S: ByteSource> {
    source: S,
}

impl<S: ByteSource> ConsoleKeyReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: ByteSource> KeyReader for ConsoleKeyReader<S> {
    fn read_key(&mut self) -> NavKey {
        let first = match self.source.next_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => return NavKey::Cancel,
            Err(e) => {
                debug!("Key read failed, treating as cancel: {e}");
                return NavKey::Cancel;
            }
        };

        match first {
            b'\r' => NavKey::Accept,
            ETX | ESC => NavKey::Cancel,
            EXTENDED_PREFIX => match self.source.next_byte() {
                Ok(Some(b'H')) => NavKey::MoveUp,
                Ok(Some(b'P')) => NavKey::MoveDown,
                Ok(Some(_)) => NavKey::Ignore,
                Ok(None) => NavKey::Cancel,
                Err(e) => {
                    debug!("Key read failed, treating as cancel: {e}");
                    NavKey::Cancel
                }
            },
            _ => NavKey::Ignore,
        }
    }
}

/// Builds the key reader for the current platform over standard input.
#[cfg(not(windows))]
pub fn stdin_keys() -> impl KeyReader {
    AnsiKeyReader::new(ReaderSource::new(std::io::stdin()))
}

/// Builds the key reader for the current platform over standard input.
#[cfg(windows)]
pub fn stdin_keys() -> impl KeyReader {
    ConsoleKeyReader::new(ReaderSource::new(std::io::stdin()))
}
