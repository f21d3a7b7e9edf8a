use std::cmp::Ordering;

use crate::unstable::pivot::{ChoosePivot, FirstElement};

sort_impl!("rust_textbook_quicksort_unstable");

/// Sorts `v` and returns the sorted elements.
///
/// This sort is unstable (i.e., may reorder equal elements). The pivot is always the first
/// element, which makes it *O*(*n* \* log(*n*)) on average but *O*(*n*^2) for ascending or
/// descending input. In that case the recursion depth equals `v.len()`, callers with large
/// adversarial inputs risk exhausting the stack.
///
/// # Examples
///
/// ```
/// let sorted = textbook_sort_rs::sort_quick(vec![64, 34, 25, 12, 22, 11, 90]);
/// assert_eq!(sorted, [11, 12, 22, 25, 34, 64, 90]);
/// ```
#[inline]
pub fn sort<T>(v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b), &mut FirstElement)
}

/// Sorts `v` with a comparator function and returns the sorted elements.
///
/// The comparator function must define a total ordering for the elements. If the ordering is not
/// total, the order of the elements is unspecified, but every element is still returned exactly
/// once.
#[inline]
pub fn sort_by<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(
        v,
        &mut |a, b| compare(a, b) == Ordering::Less,
        &mut FirstElement,
    )
}

/// Like [`sort_by`] but with a replaceable pivot selection.
///
/// `sort_with_pivot(v, compare, &mut FirstElement)` behaves exactly like `sort_by(v, compare)`.
pub fn sort_with_pivot<T, F, P>(v: Vec<T>, mut compare: F, pivot_strategy: &mut P) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
    P: ChoosePivot,
{
    quicksort(
        v,
        &mut |a, b| compare(a, b) == Ordering::Less,
        pivot_strategy,
    )
}

/// Sorts `v` recursively.
///
/// The pivot is taken out of `v` and the remaining elements are split, keeping their relative
/// order, into those `<=` the pivot and those `>` the pivot. Elements equal to the pivot always
/// go left, there is no separate equal group.
pub(crate) fn quicksort<T, F, P>(mut v: Vec<T>, is_less: &mut F, pivot_strategy: &mut P) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
    P: ChoosePivot,
{
    if v.len() <= 1 {
        return v;
    }

    let pivot_pos = pivot_strategy.choose_pivot(&v, is_less);
    let pivot = v.remove(pivot_pos);

    let (less_eq, greater): (Vec<T>, Vec<T>) =
        v.into_iter().partition(|elem| !is_less(&pivot, elem));

    let greater_len = greater.len();

    let mut out = quicksort(less_eq, is_less, pivot_strategy);
    out.reserve(greater_len + 1);
    out.push(pivot);
    out.extend(quicksort(greater, is_less, pivot_strategy));

    out
}
