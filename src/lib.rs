//! This crate is my attempt at a small set of generic "verbs" (compare, stringify, parse and
//! iterate) that work across every primitive type, plus any type a user decides to plug in.
//!
//! # Purpose
//! The idea started as a handful of C headers that faked generics with `_Generic` dispatch: one
//! for sorting, one for converting to and from strings, one for iterating over arbitrary
//! containers. Every revision of those headers boiled down to the same thing, a table mapping a
//! type to the function implementing a verb for it. Rust already has that table built in, it's
//! called a trait, so most of this crate is just four traits and the functions built on them.
//!
//! # Method
//! Each verb lives in its own module, with one capability trait and free functions on top:
//! - [`cmp`]: [`Comparable`](cmp::Comparable) with sorting, reversal and searching.
//! - [`string`]: [`Stringable`](string::Stringable) with [`to_string`](string::to_string) and
//!   [`array_to_string`](string::array_to_string).
//! - [`parse`]: [`Parsable`](parse::Parsable) with scanner-style numeric parsing.
//! - [`iter`]: [`Iterable`](iter::Iterable) and [`ReverseIterable`](iter::ReverseIterable), which
//!   drive cursor-based forward, backward and skipping traversals.
//!
//! Calling a verb on a type that doesn't implement the trait simply doesn't compile, which is the
//! same contract the C headers had (minus the wall of candidate types in the error message).
//!
//! For the cases where the set of types isn't known statically, [`registry`] provides a runtime
//! [`Registry`](registry::Registry) keyed by [`TypeId`](std::any::TypeId). It starts from the
//! built-in implementations, can be extended through a builder and reports missing types as an
//! [`UnsupportedType`](registry::UnsupportedType) error instead.
//!
//! # Error Handling
//! Like the rest of my code, errors are strongly typed: small structs (mostly ZSTs) that implement
//! [`Error`](std::error::Error), grouped into enums when an operation can fail in more than one
//! way. Parsing returns a [`Result`] rather than writing into an out-parameter. Searching for
//! something that isn't there is an expected outcome and returns [`None`], not an error.
//!
//! Genuine programmer errors, such as asking a traversal to skip zero elements at a time, panic
//! with the message of the relevant error type.
//!
//! # Dependencies
//! Errors use `derive_more` to avoid a lot of repetitive `Display` and `From` impls. The registry
//! emits `tracing` events when it is built or overridden but never installs a subscriber itself.
#![forbid(unsafe_code)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "cmp")]
pub mod cmp;
#[cfg(feature = "iter")]
pub mod iter;
#[cfg(feature = "parse")]
pub mod parse;
#[cfg(feature = "registry")]
pub mod registry;
#[cfg(feature = "string")]
pub mod string;

pub(crate) mod util;
