//! Core of the Eachable library: structural iteration capabilities for
//! indexable, sized collections.
//!
//! The [`Traversable`] trait is the structural contract (a length and
//! positional element access); [`Traverse`] is the capability set every
//! `Traversable` picks up through a blanket impl. Most users depend on the
//! `eachable` facade crate instead of this one.

#![deny(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod shape;
pub mod traversable;
pub mod traverse;

pub use cursor::Cursor;
pub use error::EmptyReduce;
pub use shape::{CountRule, Mapped, Projection};
pub use traversable::Traversable;
pub use traverse::{One, Traverse};
