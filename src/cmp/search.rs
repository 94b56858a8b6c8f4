use std::cmp::Ordering;

use super::Comparable;

/// Searches an ascending sequence for `key`, returning the index of a matching element.
///
/// When several elements match, the lowest index among them is returned. The result is
/// meaningless if `seq` isn't sorted by the same ordering, but the function still terminates.
///
/// # Time Complexity
/// `O(log n)` comparisons.
///
/// # Examples
/// ```
/// # use neat::cmp;
/// let values = [1, 3, 5, 7, 9];
/// assert_eq!(cmp::binary_search(&values, &5), Some(2));
/// assert_eq!(cmp::binary_search(&values, &4), None);
/// ```
pub fn binary_search<T: Comparable>(seq: &[T], key: &T) -> Option<usize> {
    binary_search_with(seq, key, T::compare)
}

/// Binary search using an explicit comparison function. See [`binary_search`].
pub fn binary_search_with<T, F>(seq: &[T], key: &T, mut compare: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Lower bound: the first index whose element isn't less than the key.
    let mut low = 0;
    let mut high = seq.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match compare(&seq[mid], key) {
            Ordering::Less => low = mid + 1,
            Ordering::Equal | Ordering::Greater => high = mid,
        }
    }

    match seq.get(low) {
        Some(found) if compare(found, key).is_eq() => Some(low),
        _ => None,
    }
}

/// Scans the sequence from the front, returning the index of the first element equal to `key`.
/// Unlike [`binary_search`], the sequence doesn't need to be sorted.
///
/// # Examples
/// ```
/// # use neat::cmp;
/// assert_eq!(cmp::linear_search(&[5, 3, 5, 1], &5), Some(0));
/// assert_eq!(cmp::linear_search(&[5, 3, 5, 1], &2), None);
/// ```
pub fn linear_search<T: Comparable>(seq: &[T], key: &T) -> Option<usize> {
    linear_search_with(seq, key, T::compare)
}

/// Linear search using an explicit comparison function. See [`linear_search`].
pub fn linear_search_with<T, F>(seq: &[T], key: &T, mut compare: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    seq.iter().position(|item| compare(item, key).is_eq())
}
