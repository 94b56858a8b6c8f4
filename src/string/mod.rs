//! The stringify verb: [`Stringable`] and the functions that produce owned strings from values
//! and sequences of values.

mod float;
mod stringable;
mod tests;

pub use stringable::*;
