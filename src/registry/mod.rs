//! A runtime table mapping `(type, verb)` pairs to the functions implementing them.
//!
//! The traits in the other modules already are a type-indexed table, resolved by the compiler.
//! This module covers the cases where that isn't enough: the set of supported types is decided
//! by whoever assembles the program, or a verb has to be swapped out without touching the type.
//!
//! A [`Registry`] is assembled once through a [`RegistryBuilder`], starting from the built-in
//! implementations (or from nothing), and is immutable afterwards. Looking up a pair that was
//! never registered returns an [`UnsupportedType`] error before anything else happens, so no
//! verb ever runs halfway.
//!
//! [`global`] provides a process-wide registry, which can be replaced with [`install`] as long as
//! that happens before anything reads it.

mod builder;
mod error;
mod global;
mod registry;
mod verb;
mod tests;

pub use builder::*;
pub use error::*;
pub use global::*;
pub use registry::*;
pub use verb::*;
