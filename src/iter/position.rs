use derive_more::IsVariant;

use super::{Iterable, ReverseIterable};

/// A cursor into an indexed collection, with a 'ghost' position on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Position {
    /// The sentinel before the first element, reached by retreating from the first element.
    Head,
    /// A position within the collection. For slices this is an element index, for [`str`] a byte
    /// offset of a character boundary.
    At(usize),
    /// The past-the-end sentinel.
    Tail,
}

impl Position {
    /// Returns the index of the position, if it isn't a sentinel.
    pub const fn index(self) -> Option<usize> {
        match self {
            Position::At(index) => Some(index),
            Position::Head | Position::Tail => None,
        }
    }

    pub(crate) const fn first(len: usize) -> Position {
        if len == 0 { Position::Tail } else { Position::At(0) }
    }

    pub(crate) const fn last(len: usize) -> Position {
        match len.checked_sub(1) {
            Some(index) => Position::At(index),
            None => Position::Head,
        }
    }

    pub(crate) const fn after(self, len: usize) -> Position {
        match self {
            Position::Head => Position::first(len),
            Position::At(index) if index + 1 < len => Position::At(index + 1),
            Position::At(_) | Position::Tail => Position::Tail,
        }
    }

    pub(crate) const fn before(self, len: usize) -> Position {
        match self {
            Position::Head | Position::At(0) => Position::Head,
            Position::At(index) => Position::At(index - 1),
            Position::Tail => Position::last(len),
        }
    }
}

impl<T> Iterable for [T] {
    type Cursor = Position;
    type Item = T;

    fn begin(&self) -> Position {
        Position::first(self.len())
    }

    fn end(&self) -> Position {
        Position::Tail
    }

    fn next(&self, cursor: Position) -> Position {
        cursor.after(self.len())
    }

    fn read(&self, cursor: Position) -> Option<&T> {
        cursor.index().and_then(|index| self.get(index))
    }
}

impl<T> ReverseIterable for [T] {
    fn prev(&self, cursor: Position) -> Position {
        cursor.before(self.len())
    }
}

macro_rules! impl_iterable_via_slice {
    ($({$($generics:tt)*} $type:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Iterable for $type {
                type Cursor = Position;
                type Item = T;

                fn begin(&self) -> Position {
                    self.as_slice().begin()
                }

                fn end(&self) -> Position {
                    self.as_slice().end()
                }

                fn next(&self, cursor: Position) -> Position {
                    Iterable::next(self.as_slice(), cursor)
                }

                fn read(&self, cursor: Position) -> Option<&T> {
                    self.as_slice().read(cursor)
                }
            }

            impl<$($generics)*> ReverseIterable for $type {
                fn prev(&self, cursor: Position) -> Position {
                    self.as_slice().prev(cursor)
                }
            }
        )*
    };
}

impl_iterable_via_slice!(
    {T} Vec<T>,
    {T, const N: usize} [T; N],
);

/// Walks a string one [`char`] at a time. Positions are byte offsets, and reading yields the
/// character's slice of the string.
impl Iterable for str {
    type Cursor = Position;
    type Item = str;

    fn begin(&self) -> Position {
        Position::first(self.len())
    }

    fn end(&self) -> Position {
        Position::Tail
    }

    fn next(&self, cursor: Position) -> Position {
        match cursor {
            Position::Head => self.begin(),
            Position::At(offset) => match self.get(offset..).and_then(|rest| rest.chars().next()) {
                Some(current) if offset + current.len_utf8() < self.len() => {
                    Position::At(offset + current.len_utf8())
                },
                _ => Position::Tail,
            },
            Position::Tail => Position::Tail,
        }
    }

    fn read(&self, cursor: Position) -> Option<&str> {
        let offset = cursor.index()?;
        let current = self.get(offset..)?.chars().next()?;
        self.get(offset..offset + current.len_utf8())
    }
}

impl ReverseIterable for str {
    fn prev(&self, cursor: Position) -> Position {
        let offset = match cursor {
            Position::Head => return Position::Head,
            Position::At(offset) => offset,
            Position::Tail => self.len(),
        };

        match self.get(..offset).and_then(|front| front.char_indices().next_back()) {
            Some((previous, _)) => Position::At(previous),
            None => Position::Head,
        }
    }
}

impl Iterable for String {
    type Cursor = Position;
    type Item = str;

    fn begin(&self) -> Position {
        self.as_str().begin()
    }

    fn end(&self) -> Position {
        self.as_str().end()
    }

    fn next(&self, cursor: Position) -> Position {
        Iterable::next(self.as_str(), cursor)
    }

    fn read(&self, cursor: Position) -> Option<&str> {
        self.as_str().read(cursor)
    }
}

impl ReverseIterable for String {
    fn prev(&self, cursor: Position) -> Position {
        self.as_str().prev(cursor)
    }
}
