use log::{debug, info};

use textbook_sort_rs::{search_binary, sort_merge, sort_quick};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arr = vec![64, 34, 25, 12, 22, 11, 90];

    info!("Merge sort");
    let sorted = sort_merge(arr.clone());
    println!("Original Array: {:?}", arr);
    println!("Sorted Array: {:?}", sorted);

    info!("Quicksort");
    let sorted = sort_quick(arr.clone());
    println!("Original Array: {:?}", arr);
    println!("Sorted Array: {:?}", sorted);

    info!("Binary search");
    let arr: Vec<i32> = (1..=10).collect();
    debug!("Searching in {:?}", arr);
    for target in [7, 11] {
        match search_binary(&arr, &target) {
            Some(index) => println!("Element {target} found at index {index}"),
            None => println!("Element {target} not found in the array"),
        }
    }
}
