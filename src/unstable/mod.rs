pub mod pivot;

// First element pivot, elements equal to the pivot go left.
pub mod rust_textbook_quicksort;

// Same partition scheme, pivot from first, middle and last element.
#[cfg(feature = "pivot_research")]
pub mod rust_quicksort_median_3;

// Same partition scheme, uniformly random pivot.
#[cfg(feature = "pivot_research")]
pub mod rust_quicksort_random_pivot;

// Last element pivot, in place Lomuto partition, pending ranges on a heap allocated stack.
pub mod rust_quicksort_explicit_stack;
