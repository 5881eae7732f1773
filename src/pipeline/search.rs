//! Comparator-driven binary search over sorted sequences.

use std::cmp::Ordering;

/// Binary-searches a sorted sequence with an explicit comparator.
///
/// `compare(probe, key)` must order each probed element against `key`.
/// Returns `Ok(index)` for a match; if there are several matches, any one
/// of their indices may be returned. Returns `Err(insertion_point)` when
/// the key is absent, where the insertion point is the index at which `key`
/// could be inserted to keep the sequence sorted.
///
/// # Precondition
///
/// `sorted` must already be sorted consistently with `compare`. Violating
/// this yields an unspecified (but non-crashing) result; the search never
/// reads out of bounds and never panics.
///
/// # Errors
///
/// `Err(insertion_point)` when no element matches `key`.
///
/// # Examples
///
/// ```rust
/// use seqflow::pipeline::search;
///
/// let sorted = [2, 4, 5, 7];
/// assert_eq!(search(&sorted, &2, |a, b| a.cmp(b)), Ok(0));
/// assert_eq!(search(&sorted, &3, |a, b| a.cmp(b)), Err(1));
/// assert_eq!(search(&sorted, &8, |a, b| a.cmp(b)), Err(4));
/// ```
pub fn search<T, F>(sorted: &[T], key: &T, mut compare: F) -> Result<usize, usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sorted.binary_search_by(|probe| compare(probe, key))
}

/// Binary-searches a sorted sequence by natural order.
///
/// Equivalent to [`search`] with `Ord::cmp` as the comparator.
///
/// # Errors
///
/// `Err(insertion_point)` when no element equals `key`.
///
/// # Examples
///
/// ```rust
/// use seqflow::pipeline::search_natural;
///
/// let mut names = ["andrei", "alex", "bogdan"];
/// names.sort();
/// assert_eq!(search_natural(&names, &"bogdan"), Ok(2));
/// ```
pub fn search_natural<T: Ord>(sorted: &[T], key: &T) -> Result<usize, usize> {
    sorted.binary_search(key)
}
