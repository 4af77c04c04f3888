//! Call shapes: explicit mode selection for the operations whose behavior
//! depends on which optional arguments the caller supplied.
//!
//! Each shape is a tagged enum, so the mode is fixed at the type level and
//! the documented precedence rules live in one constructor instead of being
//! scattered through the operations.

use crate::cursor::Cursor;
use crate::traversable::Traversable;

/// Selects the counting rule for [`Traverse::count`](crate::Traverse::count).
pub enum CountRule<T, P> {
    /// Count every element; equals the collection's size.
    Everything,
    /// Count the elements structurally equal to the given value.
    EqualTo(T),
    /// Count the elements the predicate accepts.
    Satisfying(P),
}

impl<T> CountRule<T, fn(&T) -> bool> {
    /// Count everything, with the predicate parameter pinned so callers
    /// don't need a turbofish.
    pub fn everything() -> Self {
        CountRule::Everything
    }

    /// Count elements equal to `value`.
    pub fn equal_to(value: T) -> Self {
        CountRule::EqualTo(value)
    }
}

impl<T, P: FnMut(&T) -> bool> CountRule<T, P> {
    /// Count elements accepted by `predicate`.
    pub fn satisfying(predicate: P) -> Self {
        CountRule::Satisfying(predicate)
    }

    /// Collapses an optional-argument call shape into one rule.
    ///
    /// A supplied predicate takes precedence over a comparison value; the
    /// value is ignored when both are present. This precedence is part of
    /// the operation's documented behavior, not an accident of matching
    /// order.
    pub fn from_parts(value: Option<T>, predicate: Option<P>) -> Self {
        match (predicate, value) {
            (Some(predicate), _) => CountRule::Satisfying(predicate),
            (None, Some(value)) => CountRule::EqualTo(value),
            (None, None) => CountRule::Everything,
        }
    }
}

/// Selects the transform for [`Traverse::map`](crate::Traverse::map).
///
/// `Transform` carries an explicit function value and `Step` a block-style
/// step function; both materialize a new sequence and behave identically
/// here, where every callable is a closure. They stay separate variants
/// because the operation's contract distinguishes the two call shapes.
/// `None` is the third shape: no transform at all, which makes `map` hand
/// back a lazy [`Cursor`] instead of a materialized sequence.
pub enum Projection<F, G> {
    /// An explicit transform function value, applied to every element.
    Transform(F),
    /// A block-style step function, applied to every element.
    Step(G),
    /// No transform supplied; `map` yields a lazy cursor over the original
    /// elements.
    None,
}

impl<T, U, F: FnMut(T) -> U> Projection<F, fn(T) -> U> {
    pub fn transform(transform: F) -> Self {
        Projection::Transform(transform)
    }
}

impl<T, U, G: FnMut(T) -> U> Projection<fn(T) -> U, G> {
    pub fn step(step: G) -> Self {
        Projection::Step(step)
    }
}

impl<T> Projection<fn(T) -> T, fn(T) -> T> {
    /// The bare call shape: no transform function and no step function.
    pub fn none() -> Self {
        Projection::None
    }
}

/// The mode-dependent result of [`Traverse::map`](crate::Traverse::map).
///
/// The materializing modes and the bare mode produce genuinely different
/// things, so the result keeps them apart instead of conflating a built
/// sequence with a restartable handle.
pub enum Mapped<'c, C: Traversable + ?Sized, U> {
    /// An eagerly built result sequence, one output per input, in input
    /// order.
    Materialized(Vec<U>),
    /// A restartable handle over the original collection; nothing has been
    /// visited yet.
    Lazy(Cursor<'c, C>),
}

impl<'c, C: Traversable + ?Sized, U> Mapped<'c, C, U> {
    /// The built sequence, if this was a materializing mode.
    pub fn materialized(self) -> Option<Vec<U>> {
        match self {
            Mapped::Materialized(outputs) => Some(outputs),
            Mapped::Lazy(_) => None,
        }
    }

    /// The restartable handle, if no transform was supplied.
    pub fn lazy(self) -> Option<Cursor<'c, C>> {
        match self {
            Mapped::Materialized(_) => None,
            Mapped::Lazy(cursor) => Some(cursor),
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Mapped::Lazy(_))
    }
}
