/// A collection that can be walked from front to back with a cursor.
///
/// The cursor returned by [`end`](Iterable::end) is a sentinel one past the last element. It is
/// never read from, and calling [`next`](Iterable::next) on it must return it unchanged so that
/// traversals can't run off the end.
///
/// # Examples
/// A user-defined collection only needs to describe its positions:
/// ```
/// # use neat::iter::{self, Iterable};
/// struct Evens(u32);
///
/// impl Iterable for Evens {
///     type Cursor = u32;
///     type Item = u32;
///
///     fn begin(&self) -> u32 { 0 }
///     fn end(&self) -> u32 { self.0 }
///     fn next(&self, cursor: u32) -> u32 { (cursor + 2).min(self.0) }
///     fn read(&self, _cursor: u32) -> Option<&u32> { None }
/// }
///
/// let visited: Vec<u32> = iter::forward(&Evens(7)).collect();
/// assert_eq!(visited, [0, 2, 4, 6]);
/// ```
pub trait Iterable {
    type Cursor: Copy + Eq;
    type Item: ?Sized;

    /// Returns a cursor to the first element, or [`end`](Iterable::end) if there are none.
    fn begin(&self) -> Self::Cursor;

    /// Returns the past-the-end sentinel.
    fn end(&self) -> Self::Cursor;

    /// Returns the cursor following `cursor`.
    fn next(&self, cursor: Self::Cursor) -> Self::Cursor;

    /// Returns the element at `cursor`, or [`None`] for sentinels.
    fn read(&self, cursor: Self::Cursor) -> Option<&Self::Item>;

    /// Moves `cursor` to the following position in place.
    fn advance(&self, cursor: &mut Self::Cursor) {
        *cursor = self.next(*cursor);
    }
}

/// An [`Iterable`] collection that can also be walked from back to front.
///
/// Backward traversal starts at `prev(end)` and stops at `prev(begin)`, so `prev` has to be
/// defined for the first element too. It should return a second sentinel that sits before the
/// start of the collection. Calling `prev` on that sentinel must return it unchanged.
pub trait ReverseIterable: Iterable {
    /// Returns the cursor preceding `cursor`.
    fn prev(&self, cursor: Self::Cursor) -> Self::Cursor;

    /// Moves `cursor` to the preceding position in place.
    fn retreat(&self, cursor: &mut Self::Cursor) {
        *cursor = self.prev(*cursor);
    }
}
