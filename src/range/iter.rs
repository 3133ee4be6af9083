//! Lazy range iterator
//!
//! Walks a [`RangeSnapshot`] forward one value per pull.
//! Cursor states: `NotStarted → Yielding(cursor) → Exhausted`.
//! Every advance is a checked add, so a step that would carry the cursor
//! past `u32::MAX` or below zero ends the sequence instead of wrapping.

use std::iter::FusedIterator;

use tracing::trace;

use super::RangeSnapshot;

/// Position of the iterator within its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Nothing pulled yet; `start` has not been checked against the bounds.
    NotStarted,
    /// Last value handed out.
    Yielding(u32),
    /// No further values, ever.
    Exhausted,
}

/// Iterator over the values described by a [`RangeSnapshot`].
///
/// Obtained from [`RangeBuilder::iter`](super::RangeBuilder::iter) or
/// [`RangeSnapshot::iter`]. The iterator owns a copy of its snapshot, so
/// reconfiguring the builder afterwards has no effect on it.
///
/// ```
/// use strix::RangeBuilder;
///
/// let mut builder = RangeBuilder::default();
/// let evens: Vec<u32> = builder.from(0).to(10).step(2).iter().collect();
/// assert_eq!(evens, [0, 2, 4, 6, 8, 10]);
///
/// let near_max: Vec<u32> = builder.from(u32::MAX - 3).to(u32::MAX).step(2).iter().collect();
/// assert_eq!(near_max, [u32::MAX - 3, u32::MAX - 1]);
/// ```
#[derive(Debug, Clone)]
pub struct RangeIter {
    snapshot: RangeSnapshot,
    cursor: Cursor,
}

impl RangeIter {
    pub(crate) fn new(snapshot: RangeSnapshot) -> Self {
        trace!(
            start = snapshot.start(),
            end = snapshot.end(),
            step = snapshot.step(),
            "range iterator created"
        );
        Self {
            snapshot,
            cursor: Cursor::NotStarted,
        }
    }

    /// Snapshot this iterator was created from.
    pub fn snapshot(&self) -> RangeSnapshot {
        self.snapshot
    }

    /// Number of values still to be produced.
    pub fn remaining(&self) -> u64 {
        match self.cursor {
            Cursor::NotStarted => self.snapshot.len(),
            // `cursor` itself was already handed out
            Cursor::Yielding(cursor) => self.snapshot.values_from(cursor) - 1,
            Cursor::Exhausted => 0,
        }
    }

    fn first(&self) -> Option<u32> {
        let start = self.snapshot.start();
        if self.snapshot.admits(start) {
            Some(start)
        } else {
            trace!(snapshot = %self.snapshot, "range is empty");
            None
        }
    }

    fn successor(&self, cursor: u32) -> Option<u32> {
        let step = self.snapshot.step();
        if step == 0 {
            // A zero step never moves; the single admitted value was `start`.
            return None;
        }
        match cursor.checked_add_signed(step) {
            Some(next) if self.snapshot.admits(next) => Some(next),
            Some(next) => {
                trace!(cursor, next, end = self.snapshot.end(), "range bound reached");
                None
            }
            None => {
                trace!(cursor, step, "range stopped before wrapping");
                None
            }
        }
    }
}

impl Iterator for RangeIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let next = match self.cursor {
            Cursor::NotStarted => self.first(),
            Cursor::Yielding(cursor) => self.successor(cursor),
            Cursor::Exhausted => return None,
        };
        self.cursor = match next {
            Some(value) => Cursor::Yielding(value),
            None => Cursor::Exhausted,
        };
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RangeIter {}
