use tracing::trace;

/// Fallible per-element traversal.
///
/// Each method stops at the first `Err` the action returns and hands it
/// back unchanged. Calls made before the failure are not undone.
pub trait TryEach: IntoIterator + Sized {
    /// Invoke `action` once per item until it fails.
    fn try_each<E, F>(self, action: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>;

    /// Invoke `action` once per item with its zero-based position until it fails.
    fn try_each_with_index<E, F>(self, action: F) -> Result<(), E>
    where
        F: FnMut(Self::Item, usize) -> Result<(), E>;

    /// Thread `accumulator` through `action` until it fails; on success
    /// return the same borrow that was passed in.
    fn try_each_with<'a, U, E, F>(self, accumulator: &'a mut U, action: F) -> Result<&'a mut U, E>
    where
        F: FnMut(Self::Item, &mut U) -> Result<(), E>;
}

impl<I: IntoIterator> TryEach for I {
    fn try_each<E, F>(self, mut action: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        let mut visited = 0usize;
        for item in self {
            action(item)?;
            visited += 1;
        }
        trace!(visited, "fallible each pass complete");
        Ok(())
    }

    fn try_each_with_index<E, F>(self, mut action: F) -> Result<(), E>
    where
        F: FnMut(Self::Item, usize) -> Result<(), E>,
    {
        let mut visited = 0usize;
        for (index, item) in self.into_iter().enumerate() {
            action(item, index)?;
            visited = index + 1;
        }
        trace!(visited, "fallible indexed each pass complete");
        Ok(())
    }

    fn try_each_with<'a, U, E, F>(
        self,
        accumulator: &'a mut U,
        mut action: F,
    ) -> Result<&'a mut U, E>
    where
        F: FnMut(Self::Item, &mut U) -> Result<(), E>,
    {
        let mut visited = 0usize;
        for item in self {
            action(item, &mut *accumulator)?;
            visited += 1;
        }
        trace!(visited, "fallible accumulating each pass complete");
        Ok(accumulator)
    }
}
