use std::rc::Rc;
use std::sync::Arc;

use super::float;

/// A type that can render itself as an owned [`String`].
///
/// The built-in renderings are:
/// - `bool`: `"true"` or `"false"`.
/// - integers: decimal, with a leading `-` for negative values and no leading zeros.
/// - `f32` and `f64`: the layout of C's `%g`, but with the shortest digits that parse back to the
///   same value. See [`to_string`] for examples.
/// - `char`: a one character string.
/// - strings: copied verbatim, without quotes or escaping.
pub trait Stringable {
    fn stringify(&self) -> String;
}

/// Renders `value` as an owned string. Ownership of the string passes to the caller.
///
/// # Examples
/// ```
/// # use neat::string::to_string;
/// assert_eq!(to_string(&-42_i32), "-42");
/// assert_eq!(to_string(&true), "true");
/// assert_eq!(to_string(&3.25_f64), "3.25");
/// assert_eq!(to_string(&1_000_000.0_f64), "1e+06");
/// assert_eq!(to_string(&0.00001_f32), "1e-05");
/// assert_eq!(to_string("raw \"text\""), "raw \"text\"");
/// ```
pub fn to_string<T: Stringable + ?Sized>(value: &T) -> String {
    value.stringify()
}

/// Renders a sequence as `{a, b, c}`, or `{}` when it is empty.
///
/// # Examples
/// ```
/// # use neat::string::array_to_string;
/// assert_eq!(array_to_string(&[1, 2, 3]), "{1, 2, 3}");
/// assert_eq!(array_to_string::<u8>(&[]), "{}");
/// ```
pub fn array_to_string<T: Stringable>(seq: &[T]) -> String {
    array_to_string_with(seq, T::stringify)
}

/// Renders a sequence as `{a, b, c}` using an explicit stringify function.
pub fn array_to_string_with<T, F>(seq: &[T], mut stringify: F) -> String
where
    F: FnMut(&T) -> String,
{
    let mut out = String::from("{");
    for (index, item) in seq.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&stringify(item));
    }
    out.push('}');
    out
}

macro_rules! impl_stringable_via_display {
    ($($type:ty),* $(,)?) => {
        $(
            impl Stringable for $type {
                fn stringify(&self) -> String {
                    format!("{self}")
                }
            }
        )*
    };
}

impl_stringable_via_display!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
);

impl Stringable for bool {
    fn stringify(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

impl Stringable for char {
    fn stringify(&self) -> String {
        String::from(*self)
    }
}

impl Stringable for f32 {
    fn stringify(&self) -> String {
        float::format_general(*self)
    }
}

impl Stringable for f64 {
    fn stringify(&self) -> String {
        float::format_general(*self)
    }
}

impl Stringable for str {
    fn stringify(&self) -> String {
        self.to_owned()
    }
}

impl Stringable for String {
    fn stringify(&self) -> String {
        self.clone()
    }
}

impl<T: Stringable + ?Sized> Stringable for &T {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringable + ?Sized> Stringable for &mut T {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringable + ?Sized> Stringable for Box<T> {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringable + ?Sized> Stringable for Rc<T> {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringable + ?Sized> Stringable for Arc<T> {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}
