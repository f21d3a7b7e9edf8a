use textbook_sort_rs::{search_binary, search_binary_by, sort_merge};

#[test]
fn found_in_reference_array() {
    let v: Vec<i32> = (1..=10).collect();
    assert_eq!(search_binary(&v, &7), Some(6));
}

#[test]
fn absent_in_reference_array() {
    let v: Vec<i32> = (1..=10).collect();
    assert_eq!(search_binary(&v, &11), None);
    assert_eq!(search_binary(&v, &0), None);
}

#[test]
fn empty_and_single() {
    assert_eq!(search_binary(&[] as &[i32], &1), None);
    assert_eq!(search_binary(&[5], &5), Some(0));
    assert_eq!(search_binary(&[5], &4), None);
    assert_eq!(search_binary(&[5], &6), None);
}

#[test]
fn every_element_is_found() {
    let v: Vec<i32> = (0..257).map(|x| x * 3).collect();
    for (i, x) in v.iter().enumerate() {
        assert_eq!(search_binary(&v, x), Some(i));
        assert_eq!(search_binary(&v, &(x + 1)), None);
    }
}

#[test]
fn duplicates_return_a_match() {
    let v = [1, 2, 2, 2, 2, 3, 9];
    let index = search_binary(&v, &2).unwrap();
    assert_eq!(v[index], 2);
}

#[test]
fn search_sorted_output() {
    let sorted = sort_merge(vec![64, 34, 25, 12, 22, 11, 90]);
    assert_eq!(search_binary(&sorted, &25), Some(3));
    assert_eq!(search_binary(&sorted, &26), None);
}

#[test]
fn unsorted_input_does_not_panic() {
    let v = [9, 1, 8, 2, 7, 3];
    let _ = search_binary(&v, &8);
    let _ = search_binary(&v, &100);
}

#[test]
fn search_by_key() {
    let v = [(1, 'a'), (3, 'b'), (5, 'c'), (8, 'd')];
    assert_eq!(search_binary_by(&v, |elem| elem.0.cmp(&5)), Some(2));
    assert_eq!(search_binary_by(&v, |elem| elem.0.cmp(&4)), None);
}
