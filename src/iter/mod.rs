//! The iterate verb. Collections expose a cursor through [`Iterable`] (and optionally
//! [`ReverseIterable`]), and [`Traversal`] walks those cursors forwards, backwards or in strides.
//!
//! Unlike [`Iterator`], a cursor doesn't borrow or consume anything: it is a plain position that
//! only means something when handed back to the collection that produced it. That makes it
//! possible to walk in both directions and to stop, inspect and resume at will.

mod error;
mod iterable;
mod position;
mod traversal;

pub use error::*;
pub use iterable::*;
pub use position::*;
pub use traversal::*;
