use std::cmp::Ordering;

sort_impl!("rust_textbook_mergesort_stable");

/// Sorts `v` and returns the sorted elements.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) in the
/// best, average and worst case. No shortcut is taken for already sorted input.
///
/// Elements are moved, never cloned. Every level of the recursion allocates output buffers
/// proportional to its input, so the auxiliary memory is *O*(*n*) per level.
///
/// # Examples
///
/// ```
/// let sorted = textbook_sort_rs::sort_merge(vec![64, 34, 25, 12, 22, 11, 90]);
/// assert_eq!(sorted, [11, 12, 22, 25, 34, 64, 90]);
/// ```
#[inline]
pub fn sort<T>(v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b))
}

/// Sorts `v` with a comparator function and returns the sorted elements.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements. If the ordering is not
/// total, the order of the elements is unspecified, but every element is still returned exactly
/// once. If `compare` panics, all elements are dropped during unwinding.
///
/// # Examples
///
/// ```
/// let v = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// let sorted = textbook_sort_rs::stable::rust_textbook_mergesort::sort_by(v, |a, b| a.0.cmp(&b.0));
/// assert_eq!(sorted, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn merge_sort<T, F>(mut v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return v;
    }

    // left = [0, len / 2), right = [len / 2, len).
    let right = v.split_off(v.len() / 2);

    let left = merge_sort(v, is_less);
    let right = merge_sort(right, is_less);

    merge(left, right, is_less)
}

/// Merges the sorted runs `left` and `right` into a new buffer.
///
/// The right element is only taken if it is strictly less than the left one, which keeps equal
/// elements in their input order.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_less(r, l),
            _ => break,
        };

        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }

    // At most one of the two still holds elements.
    out.extend(left);
    out.extend(right);

    out
}
