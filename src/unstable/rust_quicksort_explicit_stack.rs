use std::cmp::Ordering;

use crate::unstable::pivot::{ChoosePivot, LastElement};

sort_impl!("rust_quicksort_explicit_stack_unstable");

/// Sorts `v` in place and returns it.
///
/// This sort is unstable (i.e., may reorder equal elements). It uses the last element as pivot
/// and a Lomuto partition, so it is *O*(*n*^2) for ascending or descending input just like the
/// recursive textbook quicksort. Pending ranges are kept on a heap allocated stack instead of the
/// call stack, so no input can exhaust the thread stack.
#[inline]
pub fn sort<T>(mut v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    quicksort(&mut v, &mut |a, b| a.lt(b), &mut LastElement);
    v
}

/// Sorts `v` in place with a comparator function and returns it.
///
/// The comparator function must define a total ordering for the elements. If the ordering is not
/// total, the order of the elements is unspecified, but every element is still returned exactly
/// once.
#[inline]
pub fn sort_by<T, F>(mut v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(
        &mut v,
        &mut |a, b| compare(a, b) == Ordering::Less,
        &mut LastElement,
    );
    v
}

/// Like [`sort_by`] but with a replaceable pivot selection.
pub fn sort_with_pivot<T, F, P>(mut v: Vec<T>, mut compare: F, pivot_strategy: &mut P) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
    P: ChoosePivot,
{
    quicksort(
        &mut v,
        &mut |a, b| compare(a, b) == Ordering::Less,
        pivot_strategy,
    );
    v
}

/// Sorts `v` without recursion.
///
/// `pending` holds half-open `(start, end)` ranges still to be partitioned. The larger side of
/// every partition is pushed first so the smaller one is handled next, which keeps `pending` at
/// *O*(log(*n*)) entries.
fn quicksort<T, F, P>(v: &mut [T], is_less: &mut F, pivot_strategy: &mut P)
where
    F: FnMut(&T, &T) -> bool,
    P: ChoosePivot,
{
    let mut pending: Vec<(usize, usize)> = Vec::new();
    if v.len() > 1 {
        pending.push((0, v.len()));
    }

    while let Some((start, end)) = pending.pop() {
        let range = &mut v[start..end];
        let pivot_pos = pivot_strategy.choose_pivot(range, is_less);
        let mid = start + partition(range, pivot_pos, is_less);

        let left = (start, mid);
        let right = (mid + 1, end);
        let (larger, smaller) = if mid - start > end - (mid + 1) {
            (left, right)
        } else {
            (right, left)
        };

        for (sub_start, sub_end) in [larger, smaller] {
            if sub_end - sub_start > 1 {
                pending.push((sub_start, sub_end));
            }
        }
    }
}

/// Lomuto partition of `v` around `v[pivot_pos]`.
///
/// Afterwards all elements with `is_less(elem, pivot)` come first, then the pivot, then the rest.
/// Returns the final position of the pivot. Elements equal to the pivot end up on its right.
fn partition<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;

    // Park the pivot at the end, the scan below never touches it.
    v.swap(pivot_pos, last);

    let mut num_lt = 0;
    for j in 0..last {
        if is_less(&v[j], &v[last]) {
            v.swap(num_lt, j);
            num_lt += 1;
        }
    }

    v.swap(num_lt, last);
    num_lt
}
