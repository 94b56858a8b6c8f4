use std::iter::FusedIterator;

use super::{Iterable, ReverseIterable, ZeroStep};
use crate::util::result::ResultExtension;

/// A walk over the cursors of a collection, from a starting cursor up to (but excluding) a
/// sentinel.
///
/// Each call to [`next`](Iterator::next) yields the current cursor and then steps up to `stride`
/// times, stopping early if the sentinel is reached so that the walk never overshoots it. Once
/// the sentinel has been reached the traversal is finished for good.
///
/// Created by [`forward`], [`backward`], [`forward_skip`] and [`backward_skip`], or by the
/// [`Registry`](crate::registry::Registry) from a set of registered cursor functions.
pub struct Traversal<'a, T: ?Sized, C> {
    pub(crate) iterable: &'a T,
    pub(crate) cursor: C,
    pub(crate) sentinel: C,
    pub(crate) step: fn(&T, C) -> C,
    pub(crate) stride: usize,
}

impl<'a, T: ?Sized, C: Copy + Eq> Traversal<'a, T, C> {
    pub(crate) fn new(
        iterable: &'a T,
        start: C,
        sentinel: C,
        step: fn(&T, C) -> C,
        stride: usize,
    ) -> Result<Traversal<'a, T, C>, ZeroStep> {
        if stride == 0 {
            return Err(ZeroStep);
        }

        Ok(Traversal {
            iterable,
            cursor: start,
            sentinel,
            step,
            stride,
        })
    }

    /// Returns the cursor that will be yielded next, or the sentinel if the traversal is finished.
    pub const fn cursor(&self) -> C {
        self.cursor
    }

    /// Returns the sentinel this traversal stops at.
    pub const fn sentinel(&self) -> C {
        self.sentinel
    }

    /// Returns true once the sentinel has been reached.
    pub fn is_finished(&self) -> bool {
        self.cursor == self.sentinel
    }
}

impl<'a, I: Iterable + ?Sized> Traversal<'a, I, I::Cursor> {
    /// Maps the traversal to the elements at each cursor.
    pub fn items(self) -> impl Iterator<Item = &'a I::Item>
    where
        I::Item: 'a,
    {
        let iterable = self.iterable;
        self.filter_map(move |cursor| iterable.read(cursor))
    }
}

impl<T: ?Sized, C: Copy + Eq> Iterator for Traversal<'_, T, C> {
    type Item = C;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let current = self.cursor;
        for _ in 0..self.stride {
            self.cursor = (self.step)(self.iterable, self.cursor);
            if self.is_finished() {
                break;
            }
        }
        Some(current)
    }
}

impl<T: ?Sized, C: Copy + Eq> FusedIterator for Traversal<'_, T, C> {}

/// Walks from [`begin`](Iterable::begin) to [`end`](Iterable::end), one element at a time.
///
/// # Examples
/// ```
/// # use neat::iter::{self, Position};
/// let values = [10, 20, 30];
/// let cursors: Vec<Position> = iter::forward(&values).collect();
/// assert_eq!(cursors, [Position::At(0), Position::At(1), Position::At(2)]);
/// ```
pub fn forward<I: Iterable + ?Sized>(iterable: &I) -> Traversal<'_, I, I::Cursor> {
    Traversal {
        iterable,
        cursor: iterable.begin(),
        sentinel: iterable.end(),
        step: I::next,
        stride: 1,
    }
}

/// Walks from `prev(end)` down to `prev(begin)`, one element at a time.
///
/// # Examples
/// ```
/// # use neat::iter;
/// let word = "h\u{e9}llo";
/// let letters: String = iter::backward(word)
///     .filter_map(|at| iter::Iterable::read(word, at))
///     .collect();
/// assert_eq!(letters, "oll\u{e9}h");
/// ```
pub fn backward<I: ReverseIterable + ?Sized>(iterable: &I) -> Traversal<'_, I, I::Cursor> {
    Traversal {
        iterable,
        cursor: iterable.prev(iterable.end()),
        sentinel: iterable.prev(iterable.begin()),
        step: I::prev,
        stride: 1,
    }
}

/// Like [`forward`], but steps up to `stride` elements at a time without overshooting the end.
///
/// # Errors
/// Returns [`ZeroStep`] if `stride` is 0.
pub fn try_forward_skip<I: Iterable + ?Sized>(
    iterable: &I,
    stride: usize,
) -> Result<Traversal<'_, I, I::Cursor>, ZeroStep> {
    Traversal::new(iterable, iterable.begin(), iterable.end(), I::next, stride)
}

/// Like [`backward`], but steps up to `stride` elements at a time without overshooting the
/// sentinel before the start.
///
/// # Errors
/// Returns [`ZeroStep`] if `stride` is 0.
pub fn try_backward_skip<I: ReverseIterable + ?Sized>(
    iterable: &I,
    stride: usize,
) -> Result<Traversal<'_, I, I::Cursor>, ZeroStep> {
    let start = iterable.prev(iterable.end());
    let sentinel = iterable.prev(iterable.begin());
    Traversal::new(iterable, start, sentinel, I::prev, stride)
}

/// Like [`forward`], but steps up to `stride` elements at a time without overshooting the end.
///
/// # Panics
/// Panics if `stride` is 0.
///
/// # Examples
/// ```
/// # use neat::iter::{self, Position};
/// let values = [0, 1, 2, 3, 4];
/// let cursors: Vec<Position> = iter::forward_skip(&values, 2).collect();
/// assert_eq!(cursors, [Position::At(0), Position::At(2), Position::At(4)]);
/// ```
pub fn forward_skip<I: Iterable + ?Sized>(
    iterable: &I,
    stride: usize,
) -> Traversal<'_, I, I::Cursor> {
    try_forward_skip(iterable, stride).throw()
}

/// Like [`backward`], but steps up to `stride` elements at a time.
///
/// # Panics
/// Panics if `stride` is 0.
pub fn backward_skip<I: ReverseIterable + ?Sized>(
    iterable: &I,
    stride: usize,
) -> Traversal<'_, I, I::Cursor> {
    try_backward_skip(iterable, stride).throw()
}

/// Iterates over references to the elements of `iterable`, front to back.
pub fn items<I: Iterable + ?Sized>(iterable: &I) -> impl Iterator<Item = &I::Item> {
    forward(iterable).items()
}

/// Iterates over references to the elements of `iterable`, back to front.
pub fn items_rev<I: ReverseIterable + ?Sized>(iterable: &I) -> impl Iterator<Item = &I::Item> {
    backward(iterable).items()
}
