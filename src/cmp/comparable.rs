use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;

/// A type with a total order that can be sorted and searched.
///
/// This is deliberately separate from [`Ord`], because floating point numbers don't implement
/// [`Ord`] but should still be sortable. Floats use [`f64::total_cmp`], so `-0.0` sorts before
/// `0.0` and NaNs end up at the extremes instead of poisoning the whole sort.
///
/// Strings compare byte by byte, treating each byte as unsigned, which matches `strcmp`.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use neat::cmp::Comparable;
/// assert_eq!(3_i32.compare(&7), Ordering::Less);
/// assert_eq!("b".compare("a"), Ordering::Greater);
/// assert_eq!((-0.0_f64).compare(&0.0), Ordering::Less);
/// ```
pub trait Comparable {
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_comparable_via_ord {
    ($($type:ty),* $(,)?) => {
        $(
            impl Comparable for $type {
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_comparable_via_ord!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char,
);

impl Comparable for f32 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Comparable for f64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Comparable for str {
    fn compare(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Comparable for String {
    fn compare(&self, other: &Self) -> Ordering {
        self.as_str().compare(other.as_str())
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

impl<T: Comparable + ?Sized> Comparable for &mut T {
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(&**other)
    }
}

impl<T: Comparable + ?Sized> Comparable for Box<T> {
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(&**other)
    }
}

impl<T: Comparable + ?Sized> Comparable for Rc<T> {
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(&**other)
    }
}

impl<T: Comparable + ?Sized> Comparable for Arc<T> {
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(&**other)
    }
}
