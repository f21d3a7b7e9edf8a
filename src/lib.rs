//! Textbook sorting and searching routines.
//!
//! Every sort lives in its own module under [`stable`] or [`unstable`] and exposes the same
//! surface: `sort`, `sort_by` and a `SortImpl` type implementing [`sort_test_tools::Sort`], so the
//! shared test suite and benchmarks can be pointed at any of them.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: Vec<T>) -> Vec<T>
            where
                T: Ord,
            {
                sort(v)
            }

            #[inline]
            fn sort_by<T, F>(v: Vec<T>, compare: F) -> Vec<T>
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare)
            }
        }
    };
}

pub mod search;
pub mod stable;
pub mod unstable;

pub use search::{search_binary, search_binary_by};
pub use stable::rust_textbook_mergesort::sort as sort_merge;
pub use unstable::rust_textbook_quicksort::sort as sort_quick;
