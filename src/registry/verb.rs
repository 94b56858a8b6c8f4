use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::iter::{Iterable, ReverseIterable};
use crate::parse::ParseError;

/// A verb that can be registered per type. The marker types implementing this trait are never
/// constructed, they only name the shape of the function stored in the
/// [`Registry`](super::Registry).
pub trait Verb: 'static {
    /// The operation implementing this verb for `T`.
    type Op<T: 'static>: Copy + Send + Sync + 'static;

    /// The name used in errors and logs.
    const NAME: &'static str;
}

/// Three-way comparison, as used for sorting and searching.
pub enum Compare {}

/// Conversion to an owned string.
pub enum Stringify {}

/// Conversion from a string.
pub enum Parse {}

/// Cursor-based iteration with cursors of type `C`.
pub struct Iterate<C>(PhantomData<fn() -> C>);

impl Verb for Compare {
    type Op<T: 'static> = fn(&T, &T) -> Ordering;

    const NAME: &'static str = "compare";
}

impl Verb for Stringify {
    type Op<T: 'static> = fn(&T) -> String;

    const NAME: &'static str = "stringify";
}

impl Verb for Parse {
    type Op<T: 'static> = fn(&str) -> Result<T, ParseError>;

    const NAME: &'static str = "parse";
}

impl<C: Copy + Eq + 'static> Verb for Iterate<C> {
    type Op<T: 'static> = CursorOps<T, C>;

    const NAME: &'static str = "iterate";
}

/// The four cursor functions of an iterable type. Any of them can be left out if the traversals
/// that need it are never used. Asking for such a traversal returns a
/// [`MissingOperation`](super::MissingOperation).
///
/// | Traversal | Requires |
/// |-|-|
/// | `forward`, `forward_skip` | `begin`, `end`, `next` |
/// | `backward`, `backward_skip` | `begin`, `end`, `prev` |
pub struct CursorOps<T, C> {
    pub begin: Option<fn(&T) -> C>,
    pub end: Option<fn(&T) -> C>,
    pub next: Option<fn(&T, C) -> C>,
    pub prev: Option<fn(&T, C) -> C>,
}

impl<T, C> CursorOps<T, C> {
    /// Creates a set of cursor functions with every slot empty.
    pub const fn new() -> CursorOps<T, C> {
        CursorOps {
            begin: None,
            end: None,
            next: None,
            prev: None,
        }
    }

    pub fn with_begin(self, begin: fn(&T) -> C) -> CursorOps<T, C> {
        CursorOps { begin: Some(begin), ..self }
    }

    pub fn with_end(self, end: fn(&T) -> C) -> CursorOps<T, C> {
        CursorOps { end: Some(end), ..self }
    }

    pub fn with_next(self, next: fn(&T, C) -> C) -> CursorOps<T, C> {
        CursorOps { next: Some(next), ..self }
    }

    pub fn with_prev(self, prev: fn(&T, C) -> C) -> CursorOps<T, C> {
        CursorOps { prev: Some(prev), ..self }
    }
}

impl<T: Iterable<Cursor = C>, C> CursorOps<T, C> {
    /// Fills `begin`, `end` and `next` from an [`Iterable`] implementation, leaving `prev` empty.
    pub fn forward_only() -> CursorOps<T, C> {
        CursorOps::new()
            .with_begin(T::begin)
            .with_end(T::end)
            .with_next(T::next)
    }
}

impl<T: ReverseIterable<Cursor = C>, C> CursorOps<T, C> {
    /// Fills all four slots from a [`ReverseIterable`] implementation.
    pub fn bidirectional() -> CursorOps<T, C> {
        CursorOps::forward_only().with_prev(T::prev)
    }
}

impl<T, C> Default for CursorOps<T, C> {
    fn default() -> Self {
        CursorOps::new()
    }
}

impl<T, C> Clone for CursorOps<T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for CursorOps<T, C> {}
