//! The structural contract a collection needs in order to pick up the
//! iteration capability set.

use std::collections::VecDeque;

/// A collection exposing a size and zero-based positional element access.
///
/// Anything implementing this trait acquires the whole operation set in
/// [`Traverse`](crate::Traverse) through a blanket impl; there is no base
/// type to inherit from.
///
/// Elements are handed out owned. For the provided std impls that means a
/// clone per access, which keeps borrowed and computed elements behind the
/// same signature. Accessing any position in `[0, len)` must succeed and be
/// stable across repeated access within a single traversal; the library never
/// asks for a position outside that range.
pub trait Traversable {
    type Item;

    /// Number of elements currently in the collection.
    fn len(&self) -> usize;

    /// The element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Traversable for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }
}

impl<T: Clone> Traversable for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

impl<T: Clone, const N: usize> Traversable for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

impl<T: Clone> Traversable for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        VecDeque::get(self, index).cloned()
    }
}

/// Borrowed collections participate too, so callers can hand out `&C`
/// without losing the capability set.
impl<C: Traversable + ?Sized> Traversable for &C {
    type Item = C::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<C::Item> {
        (**self).get(index)
    }
}
