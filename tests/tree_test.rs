//! Tests for OrderedTree insertion, lookup and traversals

use rsds::util::testing;
use rsds::{OrderedTree, TreeRender};
use rstest::{fixture, rstest};

#[fixture]
fn sample_tree() -> OrderedTree<i32> {
    testing::init_test_setup();
    let mut tree = OrderedTree::new(1);
    tree.extend([8, 5, 7, 6, 3, 4, 2]);
    tree
}

// ============================================================
// Traversal fixture
// ============================================================
//
//  1
//  └── 8
//      └── 5
//          ├── 3
//          │   ├── 2
//          │   └── 4
//          └── 7
//              └── 6

#[rstest]
fn given_sample_tree_when_walking_breadth_first_then_emits_level_order(sample_tree: OrderedTree<i32>) {
    let values: Vec<i32> = sample_tree.bft().copied().collect();
    assert_eq!(values, vec![1, 8, 5, 3, 7, 2, 4, 6]);
}

#[rstest]
fn given_sample_tree_when_walking_with_stack_then_right_children_pop_first(sample_tree: OrderedTree<i32>) {
    let values: Vec<i32> = sample_tree.dft().copied().collect();
    assert_eq!(values, vec![1, 8, 5, 7, 6, 3, 4, 2]);
}

#[rstest]
fn given_sample_tree_when_walking_recursively_then_orders_match(sample_tree: OrderedTree<i32>) {
    assert_eq!(sample_tree.in_order(), vec![&1, &2, &3, &4, &5, &6, &7, &8]);
    assert_eq!(sample_tree.pre_order(), vec![&1, &8, &5, &3, &2, &4, &7, &6]);
    assert_eq!(sample_tree.post_order(), vec![&2, &4, &3, &6, &7, &5, &8, &1]);
}

#[rstest]
fn given_sample_tree_when_writing_each_order_then_emits_one_value_per_line(sample_tree: OrderedTree<i32>) {
    fn lines(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> Vec<String> {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(String::from).collect()
    }
    let expect = |s: &str| s.split(' ').map(String::from).collect::<Vec<_>>();

    assert_eq!(lines(|out| sample_tree.in_order_write(out)), expect("1 2 3 4 5 6 7 8"));
    assert_eq!(lines(|out| sample_tree.bft_write(out)), expect("1 8 5 3 7 2 4 6"));
    assert_eq!(lines(|out| sample_tree.dft_write(out)), expect("1 8 5 7 6 3 4 2"));
    assert_eq!(lines(|out| sample_tree.pre_order_write(out)), expect("1 8 5 3 2 4 7 6"));
    assert_eq!(lines(|out| sample_tree.post_order_write(out)), expect("2 4 3 6 7 5 8 1"));
}

#[rstest]
fn given_sample_tree_when_printing_to_stdout_then_succeeds(sample_tree: OrderedTree<i32>) {
    sample_tree.in_order_print().unwrap();
    sample_tree.bft_print().unwrap();
    sample_tree.dft_print().unwrap();
    sample_tree.pre_order_dft().unwrap();
    sample_tree.post_order_dft().unwrap();
}

#[rstest]
fn given_sample_tree_when_rendering_then_shows_every_value(sample_tree: OrderedTree<i32>) {
    let rendered = sample_tree.to_tree_string().to_string();
    println!("{rendered}");
    for value in 1..=8 {
        assert!(rendered.contains(&value.to_string()));
    }
    assert_eq!(rendered.lines().next(), Some("1"));
}

// ============================================================
// Ordering, membership and max
// ============================================================

#[rstest]
#[case::ascending(vec![1, 2, 3, 4, 5, 6])]
#[case::descending(vec![9, 7, 5, 3, 1])]
#[case::duplicates(vec![4, 4, 2, 4, 6, 2, 6])]
#[case::negative(vec![0, -3, 12, -7, 5, -1])]
fn given_any_insert_order_when_walking_in_order_then_sequence_is_non_decreasing(#[case] values: Vec<i32>) {
    let mut tree = OrderedTree::new(values[0]);
    tree.extend(values[1..].iter().copied());

    let walked: Vec<i32> = tree.in_order().into_iter().copied().collect();
    assert!(walked.windows(2).all(|w| w[0] <= w[1]), "{walked:?}");

    let mut expected = values.clone();
    expected.sort();
    assert_eq!(walked, expected);
    assert_eq!(*tree.get_max(), *expected.last().unwrap());
    assert_eq!(tree.len(), values.len());
}

#[rstest]
fn given_inserted_values_when_checking_contains_then_only_those_are_found(sample_tree: OrderedTree<i32>) {
    for value in 1..=8 {
        assert!(sample_tree.contains(&value), "missing {value}");
    }
    for value in [0, 9, -4, 100] {
        assert!(!sample_tree.contains(&value), "unexpected {value}");
    }
}

#[rstest]
fn given_equal_values_when_inserted_then_ties_go_right() {
    let mut tree = OrderedTree::new(10);
    tree.extend([10, 5, 10]);

    // 10 -> right 10 -> right 10, 5 on the left of the root
    assert_eq!(tree.bft().copied().collect::<Vec<_>>(), vec![10, 5, 10, 10]);
    assert_eq!(tree.depth(), 3);
}

#[rstest]
fn given_sorted_input_when_inserted_then_tree_degrades_to_a_chain() {
    let mut tree = OrderedTree::new(0);
    tree.extend(1..50);
    assert_eq!(tree.depth(), 50);
    assert_eq!(*tree.get_max(), 49);
}

#[rstest]
fn given_long_sorted_run_when_measuring_depth_then_counts_every_level() {
    let mut tree = OrderedTree::new(0);
    tree.extend(1..50_000);
    assert_eq!(tree.depth(), 50_000);
    assert_eq!(*tree.get_max(), 49_999);
    assert_eq!(tree.bft().count(), 50_000);
    assert_eq!(tree.dft().last(), Some(&49_999));
}

#[rstest]
fn given_string_values_when_for_each_then_visits_in_ascending_order() {
    let mut tree = OrderedTree::new("m".to_string());
    tree.extend(["z", "a", "q"].map(String::from));

    let mut seen = Vec::new();
    tree.for_each(|v| seen.push(v.clone()));
    assert_eq!(seen, vec!["a", "m", "q", "z"]);
}
