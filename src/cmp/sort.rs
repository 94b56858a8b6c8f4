use std::cmp::Ordering;

use super::Comparable;

/// Sorts the sequence in place, in ascending order. The sort is unstable: equal elements may be
/// reordered relative to each other.
///
/// # Examples
/// ```
/// # use neat::cmp;
/// let mut values = [5_i32, -1, 3, 3, 0];
/// cmp::sort(&mut values);
/// assert_eq!(values, [-1, 0, 3, 3, 5]);
/// ```
pub fn sort<T: Comparable>(seq: &mut [T]) {
    sort_with(seq, T::compare);
}

/// Sorts the sequence in place, in descending order. Implemented as an ascending sort followed by
/// a full [`reverse`].
///
/// # Examples
/// ```
/// # use neat::cmp;
/// let mut words = ["pear", "apple", "fig"];
/// cmp::sort_desc(&mut words);
/// assert_eq!(words, ["pear", "fig", "apple"]);
/// ```
pub fn sort_desc<T: Comparable>(seq: &mut [T]) {
    sort_desc_with(seq, T::compare);
}

/// Sorts the sequence in place, in ascending order according to `compare`.
pub fn sort_with<T, F>(seq: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    seq.sort_unstable_by(compare);
}

/// Sorts the sequence in place, in descending order according to `compare`.
pub fn sort_desc_with<T, F>(seq: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_with(seq, compare);
    reverse(seq);
}

/// Reverses the order of the sequence in place, using `len / 2` swaps.
///
/// # Examples
/// ```
/// # use neat::cmp;
/// let mut values = [1, 2, 3, 4, 5];
/// cmp::reverse(&mut values);
/// assert_eq!(values, [5, 4, 3, 2, 1]);
/// ```
pub fn reverse<T>(seq: &mut [T]) {
    let len = seq.len();
    for front in 0..len / 2 {
        seq.swap(front, len - 1 - front);
    }
}

/// Returns true if every element compares less than or equal to the one following it.
pub fn is_sorted<T: Comparable>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0].compare(&pair[1]).is_le())
}

/// Returns true if every element compares greater than or equal to the one following it.
pub fn is_sorted_desc<T: Comparable>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0].compare(&pair[1]).is_ge())
}
