// Top-down merge sort, splits at len / 2 and merges ties from the left half first.
pub mod rust_textbook_mergesort;
