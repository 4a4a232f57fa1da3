use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated through Box<T> rather than alloc, because Box<T> has the special
// property that dereferencing it allows a value to be moved out of the heap.

/// A pointer to a heap allocated [`Node`]. Each node is owned by exactly one link: either the
/// `next` of its predecessor or the head of the collection holding it. Ownership is only
/// reclaimed through [`NodeRef::take_node`].
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Moves `node` onto the heap, returning the only reference to it.
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        // SAFETY: Box::into_raw never returns a null pointer.
        NodeRef(unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) })
    }

    /// Moves the node back off of the heap, deallocating it.
    ///
    /// # Safety
    /// The node must still be allocated, and no copy of this NodeRef may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The caller guarantees that the node is still allocated and uniquely reclaimed.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: Collections only hold NodeRefs to allocated nodes, and tie the returned lifetime
        // to a borrow of themselves.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value, with collections tying the lifetime to a mutable borrow.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: Collections only hold NodeRefs to allocated nodes.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Collections only hold NodeRefs to allocated nodes, and only call this while
        // holding a mutable borrow of themselves.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// A singly linked node. The last node of a chain has no `next`.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// Walks `count` links forward from `node`.
///
/// # Safety
/// There must be at least `count` nodes following `node`.
pub(crate) unsafe fn seek<T>(mut node: NodeRef<T>, count: usize) -> NodeRef<T> {
    for _ in 0..count {
        // SAFETY: The caller guarantees that the chain is long enough.
        node = unsafe { node.next().unwrap_unchecked() };
    }
    node
}

/// Deallocates every node of the chain starting at `head`, dropping their values. Iterative, so
/// that long chains can't overflow the stack.
///
/// # Safety
/// Every node in the chain must be allocated and not referenced again afterwards.
pub(crate) unsafe fn drop_chain<T>(head: Link<T>) {
    let mut curr = head;
    while let Some(ptr) = curr {
        // SAFETY: The caller guarantees that the whole chain is allocated and unused after this.
        let node = unsafe { ptr.take_node() };
        curr = node.next;
    }
}
