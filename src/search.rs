//! Binary search over a slice sorted in non-decreasing order.

use std::cmp::Ordering;

/// Returns the index of an element equal to `target`, or [`None`] if there is none.
///
/// `v` must be sorted in non-decreasing order. If it is not, the result is unspecified but the
/// call still terminates without panicking. If several elements match, any one of them may be
/// returned.
///
/// Takes *O*(log(*n*)) comparisons and *O*(1) memory.
///
/// # Examples
///
/// ```
/// let v = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
///
/// assert_eq!(textbook_sort_rs::search_binary(&v, &7), Some(6));
/// assert_eq!(textbook_sort_rs::search_binary(&v, &11), None);
/// ```
#[inline]
pub fn search_binary<T: Ord>(v: &[T], target: &T) -> Option<usize> {
    search_binary_by(v, |elem| elem.cmp(target))
}

/// Binary search with a probe function.
///
/// `f` returns how the probed element orders relative to the searched one: `Less` if the element
/// is smaller, `Greater` if it is larger and `Equal` on a match. The slice must be sorted
/// consistently with `f`.
pub fn search_binary_by<T, F>(v: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    // Searching the half-open range [lo, hi).
    let mut lo = 0;
    let mut hi = v.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        match f(&v[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}
