use super::*;

/// Walk the tree checking ordering, stored heights, and balance factors.
fn check<K: Ord, V>(link: &Link<K, V>, lower: Option<&K>, upper: Option<&K>) -> u32 {
    let Some(node) = link else { return 0 };
    if let Some(lower) = lower {
        assert!(node.key > *lower, "left-subtree key out of order");
    }
    if let Some(upper) = upper {
        assert!(node.key < *upper, "right-subtree key out of order");
    }
    let lh = check(&node.left, lower, Some(&node.key));
    let rh = check(&node.right, Some(&node.key), upper);
    assert_eq!(node.height, 1 + lh.max(rh), "stale stored height");
    let bf = lh as i32 - rh as i32;
    assert!(bf.abs() <= 1, "balance factor {} out of range", bf);
    1 + lh.max(rh)
}

fn assert_invariants<K: Ord, V>(tree: &AvlTree<K, V>) {
    check(&tree.root, None, None);
}

fn root_key<K: Clone, V>(tree: &AvlTree<K, V>) -> Option<K> {
    tree.root.as_ref().map(|node| node.key.clone())
}

fn tree_of(keys: &[u32]) -> AvlTree<u32, u32> {
    let mut tree = AvlTree::new();
    for &key in keys {
        assert!(tree.insert(key, key));
        assert_invariants(&tree);
    }
    tree
}

#[test]
fn test_insert_without_rotation() {
    let tree = tree_of(&[50, 30, 70, 10]);
    assert_eq!(tree.keys(Traversal::In), vec![10, 30, 50, 70]);
    assert_eq!(root_key(&tree), Some(50));
}

#[test]
fn test_right_right_rotation() {
    // Ascending run forces a single left rotation on the third insert
    let tree = tree_of(&[10, 20, 30]);
    assert_eq!(root_key(&tree), Some(20));

    let root = tree.root.as_ref().expect("non-empty");
    assert_eq!(root.left.as_ref().map(|n| n.key), Some(10));
    assert_eq!(root.right.as_ref().map(|n| n.key), Some(30));
    assert_eq!(tree.height(), 2);
}

#[test]
fn test_left_left_rotation() {
    let tree = tree_of(&[30, 20, 10]);
    assert_eq!(root_key(&tree), Some(20));
    assert_eq!(tree.height(), 2);
}

#[test]
fn test_left_right_rotation() {
    let tree = tree_of(&[30, 10, 20]);
    assert_eq!(root_key(&tree), Some(20));
    assert_eq!(tree.keys(Traversal::In), vec![10, 20, 30]);
}

#[test]
fn test_right_left_rotation() {
    let tree = tree_of(&[10, 30, 20]);
    assert_eq!(root_key(&tree), Some(20));
    assert_eq!(tree.keys(Traversal::In), vec![10, 20, 30]);
}

#[test]
fn test_duplicate_insert_leaves_tree_unchanged() {
    let mut tree = tree_of(&[50, 30, 70]);
    let before = tree.keys(Traversal::Pre);

    assert!(!tree.insert(30, 999));

    assert_eq!(tree.keys(Traversal::Pre), before);
    assert_eq!(tree.get(&30), Some(&30));
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_sorted_inserts_stay_logarithmic() {
    let tree = tree_of(&(1..=256).collect::<Vec<_>>());
    assert_eq!(tree.len(), 256);
    // A perfectly balanced tree of 256 keys has height 9; AVL allows a
    // small constant factor over that, nowhere near the 256 of a chain.
    assert!(tree.height() <= 13, "height {} too large", tree.height());
    assert_eq!(tree.keys(Traversal::In), (1..=256).collect::<Vec<_>>());
}

#[test]
fn test_interleaved_inserts_keep_invariants() {
    let mut tree = AvlTree::new();
    // Deterministic scatter over 0..500
    let mut key: u32 = 0;
    for step in 0..500u32 {
        key = (key + 173) % 500;
        tree.insert(key, step);
        assert_invariants(&tree);
    }
    let inorder = tree.keys(Traversal::In);
    let mut sorted = inorder.clone();
    sorted.sort_unstable();
    assert_eq!(inorder, sorted);
}

#[test]
fn test_traversal_lengths_match_node_count() {
    let tree = tree_of(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    for order in [Traversal::Pre, Traversal::In, Traversal::Post] {
        assert_eq!(tree.keys(order).len(), tree.len());
    }
}

#[test]
fn test_lookup_miss_is_none() {
    let tree = tree_of(&[50, 30, 70, 10]);
    assert_eq!(tree.get(&99), None);
    assert!(!tree.contains(&99));
}

#[test]
fn test_remove_leaf_and_rebalance() {
    //      4
    //     / \
    //    2   5
    //   / \
    //  1   3
    let mut tree = tree_of(&[4, 2, 5, 1, 3]);

    // Removing 5 leaves 4 left-heavy; a right rotation restores balance
    assert_eq!(tree.remove(&5), Some(5));
    assert_invariants(&tree);
    assert_eq!(root_key(&tree), Some(2));
    assert_eq!(tree.keys(Traversal::In), vec![1, 2, 3, 4]);
}

#[test]
fn test_remove_root_with_two_children() {
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);

    // The in-order successor (5) replaces the root
    assert_eq!(tree.remove(&4), Some(4));
    assert_invariants(&tree);
    assert_eq!(tree.get(&4), None);
    assert_eq!(tree.keys(Traversal::In), vec![1, 2, 3, 5, 6, 7]);
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_remove_missing_key() {
    let mut tree = tree_of(&[2, 1, 3]);
    assert_eq!(tree.remove(&42), None);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_drain_in_insertion_order() {
    let keys: Vec<u32> = (1..=100).collect();
    let mut tree = tree_of(&keys);
    for &key in &keys {
        assert_eq!(tree.remove(&key), Some(key));
        assert_invariants(&tree);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_iter_ascending() {
    let tree = tree_of(&[50, 30, 70, 10]);
    let keys: Vec<u32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![10, 30, 50, 70]);
}

#[test]
fn test_get_mut() {
    let mut tree = AvlTree::new();
    tree.insert(7, String::from("sete"));
    if let Some(name) = tree.get_mut(&7) {
        name.push('!');
    }
    assert_eq!(tree.get(&7).map(String::as_str), Some("sete!"));
}
