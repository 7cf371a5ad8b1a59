//! Tests for tree traversal iterators.

use treevec::{NodeId, Tree};

/// Builds the sample tree used throughout these tests.
///
/// ```text
/// root
/// |-- child1
/// |   |-- child1_1
/// |   |   `-- child1_1_1
/// |   `-- child1_2
/// `-- child2
///     |-- child2_1
///     `-- child2_2
/// ```
fn sample_tree() -> Tree<&'static str> {
    let mut tree = Tree::new();
    let root = tree.add("root", None).expect("should succeed");
    let child1 = tree.add("child1", Some(root)).expect("should succeed");
    let child1_1 = tree.add("child1_1", Some(child1)).expect("should succeed");
    tree.add("child1_1_1", Some(child1_1))
        .expect("should succeed");
    tree.add("child1_2", Some(child1)).expect("should succeed");
    let child2 = tree.add("child2", Some(root)).expect("should succeed");
    tree.add("child2_1", Some(child2)).expect("should succeed");
    tree.add("child2_2", Some(child2)).expect("should succeed");
    tree
}

fn id_of(tree: &Tree<&'static str>, value: &str) -> NodeId {
    tree.iter()
        .find(|node| *node.value() == value)
        .expect("the value is in the sample tree")
        .id()
}

#[test]
fn iter_yields_the_stored_sequence() {
    let tree = sample_tree();
    assert_eq!(
        tree.iter().map(|node| *node.value()).collect::<Vec<_>>(),
        [
            "root",
            "child1",
            "child1_1",
            "child1_1_1",
            "child1_2",
            "child2",
            "child2_1",
            "child2_2",
        ],
    );
    assert_eq!(tree.iter().len(), 8);
}

#[test]
fn iter_is_double_ended() {
    let tree = sample_tree();
    assert_eq!(
        tree.iter().rev().map(|node| *node.value()).collect::<Vec<_>>(),
        [
            "child2_2",
            "child2_1",
            "child2",
            "child1_2",
            "child1_1_1",
            "child1_1",
            "child1",
            "root",
        ],
    );
}

#[test]
fn iter_of_empty_tree_is_empty() {
    let tree = Tree::<i32>::new();
    assert_eq!(tree.iter().count(), 0);
}

#[test]
fn children_are_direct_children_only() {
    let tree = sample_tree();
    let child1 = id_of(&tree, "child1");

    assert_eq!(
        tree.children(child1)
            .expect("the node is alive")
            .map(|node| *node.value())
            .collect::<Vec<_>>(),
        ["child1_1", "child1_2"],
    );
}

#[test]
fn children_of_a_leaf_is_empty() {
    let tree = sample_tree();
    let leaf = id_of(&tree, "child1_1_1");

    assert_eq!(tree.children(leaf).expect("the node is alive").count(), 0);
}

#[test]
fn descendants_cover_the_subtree_in_pre_order() {
    let tree = sample_tree();
    let child1 = id_of(&tree, "child1");

    assert_eq!(
        tree.descendants(child1)
            .expect("the node is alive")
            .map(|node| *node.value())
            .collect::<Vec<_>>(),
        ["child1_1", "child1_1_1", "child1_2"],
    );
}

#[test]
fn subtree_includes_the_node_itself() {
    let tree = sample_tree();
    let child1 = id_of(&tree, "child1");

    assert_eq!(
        tree.subtree(child1)
            .expect("the node is alive")
            .map(|node| *node.value())
            .collect::<Vec<_>>(),
        ["child1", "child1_1", "child1_1_1", "child1_2"],
    );
    assert_eq!(tree.subtree(child1).expect("the node is alive").len(), 4);
}

#[test]
fn subtree_of_the_root_is_the_whole_tree() {
    let tree = sample_tree();
    let root = tree.root().expect("the sample tree has a root");

    assert_eq!(tree.subtree(root).expect("the root is alive").count(), 8);
}

#[test]
fn breadth_first_goes_layer_by_layer() {
    let tree = sample_tree();
    let root = tree.root().expect("the sample tree has a root");

    // Each layer is scanned in sequence order, so cousins are grouped by
    // position, not by parent.
    assert_eq!(
        tree.breadth_first(root)
            .expect("the root is alive")
            .map(|node| *node.value())
            .collect::<Vec<_>>(),
        [
            "child1",
            "child2",
            "child1_1",
            "child1_2",
            "child2_1",
            "child2_2",
            "child1_1_1",
        ],
    );
}

#[test]
fn breadth_first_is_scoped_to_the_subtree() {
    let tree = sample_tree();
    let child1 = id_of(&tree, "child1");

    assert_eq!(
        tree.breadth_first(child1)
            .expect("the node is alive")
            .map(|node| *node.value())
            .collect::<Vec<_>>(),
        ["child1_1", "child1_2", "child1_1_1"],
    );
}

#[test]
fn breadth_first_of_a_leaf_is_empty() {
    let tree = sample_tree();
    let leaf = id_of(&tree, "child2_2");

    assert_eq!(
        tree.breadth_first(leaf).expect("the node is alive").count(),
        0,
    );
}

#[test]
fn ancestors_walk_up_to_the_root() {
    let tree = sample_tree();
    let deepest = id_of(&tree, "child1_1_1");

    assert_eq!(
        tree.ancestors(deepest)
            .expect("the node is alive")
            .map(|node| *node.value())
            .collect::<Vec<_>>(),
        ["child1_1", "child1", "root"],
    );
}

#[test]
fn ancestors_of_the_root_is_empty() {
    let tree = sample_tree();
    let root = tree.root().expect("the sample tree has a root");

    assert_eq!(tree.ancestors(root).expect("the root is alive").count(), 0);
}

#[test]
fn node_ref_exposes_the_same_traversals() {
    let tree = sample_tree();
    let child1 = tree
        .get(id_of(&tree, "child1"))
        .expect("the node is alive");

    assert_eq!(
        child1.children().map(|node| *node.value()).collect::<Vec<_>>(),
        ["child1_1", "child1_2"],
    );
    assert_eq!(
        child1.ancestors().map(|node| *node.value()).collect::<Vec<_>>(),
        ["root"],
    );
    let parent = child1.parent().expect("child1 is not the root");
    assert_eq!(*parent.value(), "root");
    assert!(parent.parent().is_none());
}

#[test]
fn iterators_are_fused() {
    let tree = sample_tree();
    let root = tree.root().expect("the sample tree has a root");

    let mut iter = tree.children(root).expect("the root is alive");
    assert!(iter.by_ref().count() == 2);
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());

    let mut bfs = tree.breadth_first(root).expect("the root is alive");
    for _ in bfs.by_ref() {}
    assert!(bfs.next().is_none());
}
