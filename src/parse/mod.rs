//! The parse verb: [`Parsable`] and the scanner-style lexing behind its numeric implementations.
//!
//! Every implementation is built around [`Parsable::parse_prefix`], which reads as much of the
//! input as forms a value and reports how many bytes that took. [`parse`] then ignores anything
//! left over, like `sscanf` does, while [`parse_exact`] rejects it.

mod error;
mod parsable;
mod scan;
mod tests;

pub use error::*;
pub use parsable::*;
