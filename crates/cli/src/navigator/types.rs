//! Type definitions for the navigation session.

/// A decoded, platform-independent navigation intent.
///
/// This is the entire vocabulary the session reacts to; everything the
/// keyboard can produce is collapsed into one of these by a
/// [`KeyReader`](super::keys::KeyReader).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavKey {
    MoveUp,
    MoveDown,
    Accept,
    Cancel,
    /// Unrecognized input; the session does not react (and does not redraw).
    Ignore,
}

/// How a navigation session ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The user accepted the option at this index.
    Accepted(usize),
    /// The user backed out without choosing.
    Cancelled,
}
