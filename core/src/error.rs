//! Error cases for traversal operations.

use thiserror::Error;

/// `reduce` was asked to seed its accumulator from the first element of an
/// empty collection.
///
/// Seedless reduction has no meaningful result over zero elements, so the
/// empty collection is a precondition violation and is reported rather than
/// defaulted. Callers that can see empty input should use
/// [`Traverse::fold`](crate::Traverse::fold) with an explicit seed, which
/// returns the seed untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot reduce an empty collection without an initial accumulator")]
pub struct EmptyReduce;
