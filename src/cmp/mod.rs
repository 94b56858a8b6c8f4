//! The compare verb. Revolves around [`Comparable`], a total order that every primitive type,
//! string type and reference to one of those implements.
//!
//! The free functions here are the sorting and searching helpers built on top of it. Each one has
//! a `_with` variant taking an explicit comparison function, which is what the
//! [`Registry`](crate::registry::Registry) uses after resolving a type at runtime.

mod comparable;
mod search;
mod sort;

pub use comparable::*;
pub use search::*;
pub use sort::*;
