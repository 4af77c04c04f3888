//! A restartable enumerator handle over a [`Traversable`].

use std::fmt;
use std::iter::FusedIterator;

use crate::traversable::Traversable;

/// Borrowed position-tracking handle over a collection.
///
/// This is what [`Traverse::map`](crate::Traverse::map) hands back when no
/// transform is supplied: nothing is visited until the caller drives it, and
/// [`rewind`](Cursor::rewind) restarts it from the first element. Cloning a
/// cursor yields an independent position over the same collection.
pub struct Cursor<'c, C: Traversable + ?Sized> {
    source: &'c C,
    position: usize,
}

impl<'c, C: Traversable + ?Sized> Cursor<'c, C> {
    pub fn new(source: &'c C) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Index of the next element to be yielded.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Restart from the first element.
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

impl<C: Traversable + ?Sized> Iterator for Cursor<'_, C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let item = self.source.get(self.position)?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<C: Traversable + ?Sized> ExactSizeIterator for Cursor<'_, C> {}

// `next` never advances past the end, so exhaustion is permanent.
impl<C: Traversable + ?Sized> FusedIterator for Cursor<'_, C> {}

// Manual impl: the borrow is Copy regardless of whether C itself is Clone.
impl<C: Traversable + ?Sized> Clone for Cursor<'_, C> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            position: self.position,
        }
    }
}

impl<C: Traversable + ?Sized> fmt::Debug for Cursor<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.source.len())
            .finish()
    }
}
