#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_leaf() {
    let node = BstNode::new("leaf");
    assert!(node.is_leaf());
    assert_eq!(node.data, "leaf");
    assert_eq!(BstNode::from("leaf"), node);
}

#[test]
fn test_children() {
    let mut root = BstNode::with_children(5, Some(BstNode::new(3)), None);
    assert!(!root.is_leaf(), "A node with only one child isn't a leaf.");

    root.right = Some(Box::new(BstNode::new(8)));
    root.left = None;
    assert!(!root.is_leaf());
    assert_eq!(root.right.as_ref().map(|node| node.data), Some(8));

    root.right = None;
    assert!(root.is_leaf(), "Removing every child should make the node a leaf again.");
}

#[test]
fn test_clone_and_eq() {
    let tree = BstNode::with_children(
        2,
        Some(BstNode::new(1)),
        Some(BstNode::with_children(4, Some(BstNode::new(3)), None)),
    );
    let mut cloned = tree.clone();
    assert_eq!(tree, cloned, "Clones should copy every subtree.");

    if let Some(right) = cloned.right.as_mut() {
        right.data = 5;
    }
    assert_ne!(tree, cloned, "Clones shouldn't share subtrees.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let tree = BstNode::with_children(
        counter.clone(),
        Some(BstNode::new(counter.clone())),
        Some(BstNode::new(counter.clone())),
    );
    drop(tree);
    assert_eq!(counter.drops(), 3, "Dropping a node should drop its whole subtree.");
}
