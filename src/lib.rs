//! Eachable - structural iteration capabilities for indexable collections
//!
//! # Overview
//!
//! Eachable attaches a set of sequence-traversal operations to any collection
//! that can report its size and serve elements by position. The capability is
//! structural: implement [`Traversable`] (two methods) and the whole
//! operation set in [`Traverse`] arrives through a blanket impl. `Vec<T>`,
//! slices, arrays, and `VecDeque<T>` implement it out of the box.
//!
//! Every operation is built on one foundational walk that visits elements in
//! strictly ascending index order; filtering, quantification, counting,
//! transformation, and folding all route through it rather than deriving
//! indices on their own.
//!
//! # Quick Start
//!
//! ```
//! use eachable::{CountRule, Projection, Traverse};
//!
//! let scores = vec![3, 7, 10, 4];
//!
//! // Element-wise visitation returns the collection borrow, so calls chain.
//! let mut seen = Vec::new();
//! scores.for_each(|n| seen.push(n));
//! assert_eq!(seen, scores);
//!
//! // Filtering, counting, quantifying.
//! assert_eq!(scores.filter(|n| n % 2 == 0), vec![10, 4]);
//! assert_eq!(scores.count(CountRule::equal_to(7)), 1);
//! assert_eq!(scores.all(Some(|n: &i32| *n > 0)), Some(true));
//!
//! // Transformation and reduction.
//! let doubled = scores
//!     .map(Projection::transform(|n: i32| n * 2))
//!     .materialized()
//!     .unwrap();
//! assert_eq!(doubled, vec![6, 14, 20, 8]);
//! assert_eq!(scores.fold(0, |acc, n| acc + n), 24);
//! ```
//!
//! # Call Shapes
//!
//! Operations whose behavior depends on which optional arguments were
//! supplied take an explicit shape enum instead of guessing from overloads:
//! [`CountRule`] selects between counting everything, counting matches of a
//! value, and counting matches of a predicate; [`Projection`] selects between
//! a transform function value, a block-style step function, and no transform
//! at all. The bare `map` shape is the one place the result type changes: it
//! hands back a lazy, restartable [`Cursor`] instead of a materialized
//! sequence.
//!
//! ```
//! use eachable::{Mapped, Projection, Traverse};
//!
//! let numbers = vec![1, 2, 3];
//! let mut cursor = match numbers.map(Projection::none()) {
//!     Mapped::Lazy(cursor) => cursor,
//!     Mapped::Materialized(_) => unreachable!(),
//! };
//! assert_eq!(cursor.next(), Some(1));
//! cursor.rewind();
//! assert_eq!(cursor.collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
//!
//! # Bringing Your Own Collection
//!
//! Any sized, indexable type participates, including ones that compute their
//! elements:
//!
//! ```
//! use eachable::{Traversable, Traverse};
//!
//! struct Reciprocals {
//!     len: usize,
//! }
//!
//! impl Traversable for Reciprocals {
//!     type Item = f64;
//!
//!     fn len(&self) -> usize {
//!         self.len
//!     }
//!
//!     fn get(&self, index: usize) -> Option<f64> {
//!         (index < self.len).then(|| 1.0 / (index + 1) as f64)
//!     }
//! }
//!
//! let reciprocals = Reciprocals { len: 3 };
//! assert_eq!(reciprocals.filter(|x| *x > 0.4), vec![1.0, 0.5]);
//! ```
//!
//! # Malformed Calls
//!
//! Quantifiers called without a predicate answer `None` rather than silently
//! defaulting to a boolean, and seedless [`Traverse::reduce`] on an empty
//! collection reports [`EmptyReduce`] instead of inventing a value.

#![deny(unsafe_code)]

pub use eachable_core::{
    CountRule, Cursor, EmptyReduce, Mapped, One, Projection, Traversable, Traverse,
};

/// The imports most callers want: the two traits plus the call-shape enums.
pub mod prelude {
    pub use eachable_core::{CountRule, Mapped, Projection, Traversable, Traverse};
}
