//! Viewport arithmetic for scrolling a cursor through a list that is taller
//! than the space available to draw it.

/// Half-open `[start, end)` range of list indexes that should be drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when items exist before the window.
    #[must_use]
    pub fn clipped_above(&self) -> bool {
        self.start > 0
    }

    /// True when items exist past the window.
    #[must_use]
    pub fn clipped_below(&self, total: usize) -> bool {
        self.end < total
    }
}

/// Computes the visible window over `total` items, keeping `cursor` as close
/// to the middle of the window as the list ends allow.
///
/// Near the list boundaries the window clamps to the ends instead of
/// shrinking, so the cursor drifts toward the edge of the window rather than
/// staying centred. For every `total >= 1`, `cursor < total` and
/// `max_visible >= 1`, the result satisfies `start <= cursor < end` and
/// `end - start <= min(max_visible, total)`.
#[must_use]
pub fn window(total: usize, cursor: usize, max_visible: usize) -> Window {
    debug_assert!(max_visible > 0);
    debug_assert!(cursor < total);

    let mut start = cursor.saturating_sub(max_visible / 2);
    let end = total.min(start + max_visible);

    // Near the end of the list the first pass comes up short; slide the
    // window back so it stays full.
    if end - start < max_visible {
        start = end.saturating_sub(max_visible);
    }

    Window { start, end }
}
