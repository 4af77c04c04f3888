//! The iteration capability set.
//!
//! Every operation here routes through the foundational walk in
//! [`Traverse::traverse`] (directly, or via the plain and indexed visitation
//! wrappers); none of them re-derives indices on its own. The blanket impl
//! at the bottom attaches the whole set to anything implementing
//! [`Traversable`].

use std::ops::{ControlFlow, Mul};

use crate::cursor::Cursor;
use crate::error::EmptyReduce;
use crate::shape::{CountRule, Mapped, Projection};
use crate::traversable::Traversable;

/// A collection broke its `Traversable` contract mid-walk.
const POSITION_CONTRACT: &str =
    "Traversable contract violated: get() failed for an index below len()";

/// Sequence-traversal operations for any [`Traversable`].
///
/// All operations visit elements in strictly ascending index order and run in
/// linear time. The step functions and predicates are owned by the call and
/// not retained after it returns.
pub trait Traverse: Traversable {
    /// The foundational walk: invoke `step` once per element, in ascending
    /// index order over `[0, len)`, returning the collection borrow so calls
    /// can be chained.
    ///
    /// The step signals whether to keep going; `ControlFlow::Break` stops
    /// the walk immediately without visiting further elements. On an empty
    /// collection the step is never invoked.
    ///
    /// # Panics
    ///
    /// Panics if the collection reports a length it cannot serve, which is a
    /// violation of the [`Traversable`] contract.
    fn traverse<F>(&self, mut step: F) -> &Self
    where
        F: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let len = self.len();
        for index in 0..len {
            let item = self.get(index).expect(POSITION_CONTRACT);
            if step(item).is_break() {
                break;
            }
        }
        self
    }

    /// Plain element-wise visitation: invoke `step` on every element in
    /// order, then hand the collection borrow back for chaining.
    fn for_each<F>(&self, mut step: F) -> &Self
    where
        F: FnMut(Self::Item),
    {
        self.traverse(|item| {
            step(item);
            ControlFlow::Continue(())
        })
    }

    /// Like [`for_each`](Traverse::for_each), but the step also receives the
    /// element's zero-based index.
    fn for_each_indexed<F>(&self, mut step: F) -> &Self
    where
        F: FnMut(Self::Item, usize),
    {
        // Mirrors the loop in `traverse` rather than layering on it; the
        // two walks must agree on ordering.
        let len = self.len();
        for index in 0..len {
            let item = self.get(index).expect(POSITION_CONTRACT);
            step(item, index);
        }
        self
    }

    /// A new sequence holding exactly the elements `predicate` accepts, in
    /// their original relative order. The predicate is called once per
    /// element.
    fn filter<P>(&self, mut predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut kept = Vec::new();
        self.for_each(|item| {
            if predicate(&item) {
                kept.push(item);
            }
        });
        kept
    }

    /// Whether every element satisfies the predicate.
    ///
    /// Stops at the first counterexample. Calling without a predicate has no
    /// meaningful truth value and yields `None` rather than defaulting to a
    /// boolean; see [`Projection`] for the same treatment of call shapes in
    /// `map`. The empty collection is vacuously `Some(true)`.
    fn all<P>(&self, predicate: Option<P>) -> Option<bool>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut predicate = require_predicate(predicate, "all")?;
        let mut verdict = true;
        self.traverse(|item| {
            if predicate(&item) {
                ControlFlow::Continue(())
            } else {
                verdict = false;
                ControlFlow::Break(())
            }
        });
        Some(verdict)
    }

    /// Whether at least one element satisfies the predicate.
    ///
    /// Stops at the first example. `None` when called without a predicate;
    /// `Some(false)` on the empty collection.
    fn any<P>(&self, predicate: Option<P>) -> Option<bool>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut predicate = require_predicate(predicate, "any")?;
        let mut verdict = false;
        self.traverse(|item| {
            if predicate(&item) {
                verdict = true;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        Some(verdict)
    }

    /// Whether no element satisfies the predicate; the complement of
    /// [`any`](Traverse::any) for the same input.
    ///
    /// Stops at the first offending element. `None` when called without a
    /// predicate; `Some(true)` on the empty collection.
    fn none<P>(&self, predicate: Option<P>) -> Option<bool>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut predicate = require_predicate(predicate, "none")?;
        let mut verdict = true;
        self.traverse(|item| {
            if predicate(&item) {
                verdict = false;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        Some(verdict)
    }

    /// Count elements according to `rule`: everything, the ones equal to a
    /// value, or the ones a predicate accepts. See
    /// [`CountRule::from_parts`] for how the optional-argument call shape
    /// collapses into a rule.
    fn count<P>(&self, rule: CountRule<Self::Item, P>) -> usize
    where
        Self::Item: PartialEq,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut total = 0;
        match rule {
            CountRule::Everything => {
                self.for_each(|_| total += 1);
            }
            CountRule::EqualTo(value) => {
                self.for_each(|item| {
                    if item == value {
                        total += 1;
                    }
                });
            }
            CountRule::Satisfying(mut predicate) => {
                self.for_each(|item| {
                    if predicate(&item) {
                        total += 1;
                    }
                });
            }
        }
        total
    }

    /// Transform every element according to the supplied [`Projection`].
    ///
    /// The `Transform` and `Step` shapes materialize a new sequence with one
    /// output per input, in input order. The bare shape materializes
    /// nothing: it hands back a lazy, restartable [`Cursor`] over the
    /// original collection.
    fn map<U, F, G>(&self, projection: Projection<F, G>) -> Mapped<'_, Self, U>
    where
        F: FnMut(Self::Item) -> U,
        G: FnMut(Self::Item) -> U,
    {
        match projection {
            Projection::Transform(transform) => Mapped::Materialized(materialize(self, transform)),
            Projection::Step(step) => Mapped::Materialized(materialize(self, step)),
            Projection::None => Mapped::Lazy(Cursor::new(self)),
        }
    }

    /// Left fold with an explicit seed: thread `accumulator` through `step`
    /// for every element in index order. The empty collection returns the
    /// seed untouched, with zero step calls.
    fn fold<A, F>(&self, seed: A, mut step: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let mut accumulator = Some(seed);
        self.for_each(|item| {
            let current = accumulator.take().expect("accumulator is re-seated every step");
            accumulator = Some(step(current, item));
        });
        accumulator.expect("accumulator survives the walk")
    }

    /// Left fold seeded by the first element, folding from the second
    /// element onward.
    ///
    /// The empty collection has no first element to seed from and is
    /// reported as [`EmptyReduce`].
    fn reduce<F>(&self, mut step: F) -> Result<Self::Item, EmptyReduce>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut accumulator = None;
        self.for_each(|item| {
            accumulator = Some(match accumulator.take() {
                Some(current) => step(current, item),
                None => item,
            });
        });
        match accumulator {
            Some(value) => Ok(value),
            None => {
                tracing::debug!("reduce called on an empty collection without a seed");
                Err(EmptyReduce)
            }
        }
    }

    /// Product of all elements: a fold with multiplication seeded at one.
    /// The empty collection multiplies out to one.
    fn product(&self) -> Self::Item
    where
        Self::Item: Mul<Output = Self::Item> + One,
    {
        self.fold(Self::Item::one(), |accumulator, item| accumulator * item)
    }
}

impl<C: Traversable + ?Sized> Traverse for C {}

fn require_predicate<P>(predicate: Option<P>, operation: &'static str) -> Option<P> {
    if predicate.is_none() {
        tracing::debug!(operation, "quantifier called without a predicate");
    }
    predicate
}

fn materialize<C, U, F>(collection: &C, mut project: F) -> Vec<U>
where
    C: Traversable + ?Sized,
    F: FnMut(C::Item) -> U,
{
    let mut outputs = Vec::with_capacity(collection.len());
    collection.for_each(|item| outputs.push(project(item)));
    outputs
}

/// Multiplicative identity, the seed for [`Traverse::product`].
pub trait One {
    fn one() -> Self;
}

macro_rules! impl_one {
    ($($ty:ty => $one:expr),* $(,)?) => {
        $(
            impl One for $ty {
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_one! {
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    f32 => 1.0, f64 => 1.0,
}

#[cfg(test)]
#[path = "traverse_test.rs"]
mod traverse_test;
