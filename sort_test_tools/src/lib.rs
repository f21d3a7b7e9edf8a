use std::cmp::Ordering;

/// A sort that takes ownership of its input and hands back the same elements in non-decreasing
/// order.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: Vec<T>) -> Vec<T>
    where
        T: Ord;

    fn sort_by<T, F>(v: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;
