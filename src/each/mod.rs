//! Eager traversal helpers
//!
//! [`Each`] applies an action to every element of anything iterable, in
//! order, in a single pass. The accumulator forms thread one caller-owned
//! value through every call and hand that same value back at the end.
//! [`TryEach`] is the fallible counterpart: the first error stops the pass
//! and is returned exactly as the action produced it.

mod fallible;

pub use fallible::TryEach;

use tracing::trace;

/// Per-element traversal over any [`IntoIterator`].
///
/// ```
/// use strix::Each;
///
/// let collected = vec![3, 6, 1, 8].each_with_owned(Vec::new(), |x, acc| acc.push(x));
/// assert_eq!(collected, [3, 6, 1, 8]);
/// ```
pub trait Each: IntoIterator + Sized {
    /// Invoke `action` once per item.
    fn each<F>(self, action: F)
    where
        F: FnMut(Self::Item);

    /// Invoke `action` once per item with its zero-based position.
    fn each_with_index<F>(self, action: F)
    where
        F: FnMut(Self::Item, usize);

    /// Invoke `action` once per item with the same accumulator, then
    /// return that accumulator.
    ///
    /// The returned borrow is the one passed in, so identity is preserved.
    /// An absent accumulator is modelled as `Option<_>` set to `None`; it
    /// reaches every call untouched unless the action changes it.
    fn each_with<'a, U, F>(self, accumulator: &'a mut U, action: F) -> &'a mut U
    where
        F: FnMut(Self::Item, &mut U);

    /// By-value form of [`each_with`](Self::each_with): the accumulator is
    /// moved in, threaded through the pass, and moved back out.
    fn each_with_owned<U, F>(self, accumulator: U, action: F) -> U
    where
        F: FnMut(Self::Item, &mut U);
}

impl<I: IntoIterator> Each for I {
    fn each<F>(self, mut action: F)
    where
        F: FnMut(Self::Item),
    {
        let mut visited = 0usize;
        for item in self {
            action(item);
            visited += 1;
        }
        trace!(visited, "each pass complete");
    }

    fn each_with_index<F>(self, mut action: F)
    where
        F: FnMut(Self::Item, usize),
    {
        let mut visited = 0usize;
        for (index, item) in self.into_iter().enumerate() {
            action(item, index);
            visited = index + 1;
        }
        trace!(visited, "indexed each pass complete");
    }

    fn each_with<'a, U, F>(self, accumulator: &'a mut U, mut action: F) -> &'a mut U
    where
        F: FnMut(Self::Item, &mut U),
    {
        let mut visited = 0usize;
        for item in self {
            action(item, &mut *accumulator);
            visited += 1;
        }
        trace!(visited, "accumulating each pass complete");
        accumulator
    }

    fn each_with_owned<U, F>(self, mut accumulator: U, action: F) -> U
    where
        F: FnMut(Self::Item, &mut U),
    {
        self.each_with(&mut accumulator, action);
        accumulator
    }
}
