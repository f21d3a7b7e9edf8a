use std::cmp::Ordering;

use crate::unstable::pivot::MedianOfThree;
use crate::unstable::rust_textbook_quicksort::quicksort;

sort_impl!("rust_quicksort_median_3_unstable");

pub fn sort<T: Ord>(v: Vec<T>) -> Vec<T> {
    quicksort(v, &mut |a, b| a.lt(b), &mut MedianOfThree)
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: Vec<T>, mut compare: F) -> Vec<T> {
    quicksort(
        v,
        &mut |a, b| compare(a, b) == Ordering::Less,
        &mut MedianOfThree,
    )
}
