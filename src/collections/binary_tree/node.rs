/// A single node of a binary search tree, holding its `data` and owning up to two subtrees.
///
/// BstNode is a plain record: it stores whatever it is given and doesn't enforce any ordering
/// between a node and its children. Keeping `left` less than `data` and `right` greater is up to
/// the tree built from it.
///
/// # Examples
/// ```
/// # use linear_collections::collections::binary_tree::BstNode;
/// let root = BstNode::with_children(2, Some(BstNode::new(1)), Some(BstNode::new(3)));
/// assert!(!root.is_leaf());
/// assert_eq!(root.left.as_ref().map(|node| node.data), Some(1));
/// assert!(root.right.as_ref().is_some_and(|node| node.is_leaf()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BstNode<T> {
    pub data: T,
    pub left: Option<Box<BstNode<T>>>,
    pub right: Option<Box<BstNode<T>>>,
}

impl<T> BstNode<T> {
    /// Creates a new node holding `data`, without any children.
    pub const fn new(data: T) -> BstNode<T> {
        BstNode {
            data,
            left: None,
            right: None,
        }
    }

    /// Creates a new node holding `data`, which takes ownership of the provided subtrees.
    pub fn with_children(
        data: T,
        left: Option<BstNode<T>>,
        right: Option<BstNode<T>>,
    ) -> BstNode<T> {
        BstNode {
            data,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Returns true if the node has neither a left nor a right child.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> From<T> for BstNode<T> {
    fn from(data: T) -> Self {
        BstNode::new(data)
    }
}
