use std::marker::PhantomData;

use super::Iter;
use crate::collections::contiguous::DynamicArray;
use crate::collections::linked::iter::ChainIter;
use crate::collections::linked::length::{Length, ONE};
use crate::collections::linked::node::{self, Node, NodeRef};
use crate::collections::traits::Collection;
use crate::collections::traits::collection::impl_collection_traits;
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// A last-in-first-out stack of singly linked nodes. Each node links to the one pushed before it,
/// so pushing and popping only ever touch the top of the chain.
///
/// Iteration visits items from the bottom of the stack to the top, which is the order they were
/// pushed in. Because the links run the other way, [`iter`](LinkedStack::iter) first collects the
/// chain into a [`DynamicArray`] and then walks it backwards.
///
/// LinkedStack has no interior mutability, so sharing one between threads requires external
/// synchronization for any mutation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedStack.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `iter` | `O(n)` |
///
/// # Examples
/// ```
/// # use linear_collections::collections::linked::LinkedStack;
/// let mut stack = LinkedStack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
/// assert_eq!(stack.to_string(), "[1, 2, 3]");
/// assert_eq!(stack.pop(), 3);
/// assert_eq!(*stack.peek(), 2);
/// ```
pub struct LinkedStack<T> {
    pub(crate) state: StackState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum StackState<T> {
    #[default]
    Empty,
    Full(StackContents<T>),
}

use StackState::*;

pub(crate) struct StackContents<T> {
    pub len: Length,
    pub top: NodeRef<T>,
}

impl<T> LinkedStack<T> {
    /// Creates a new LinkedStack with no items.
    pub const fn new() -> LinkedStack<T> {
        LinkedStack {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of items on the stack.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(StackContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the stack contains no items.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Adds `item` to the top of the stack.
    pub fn push(&mut self, item: T) {
        match &mut self.state {
            Empty => {
                self.state = Full(StackContents {
                    len: ONE,
                    top: NodeRef::from_node(Node {
                        value: item,
                        next: None,
                    }),
                })
            },
            Full(contents) => {
                contents.len = contents.len.checked_add(1).expect("Capacity overflow!");
                contents.top = NodeRef::from_node(Node {
                    value: item,
                    next: Some(contents.top),
                });
            },
        }
    }

    /// Removes and returns the item at the top of the stack, or an error if it is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        match &mut self.state {
            Empty => Err(EmptyCollection),
            Full(StackContents { len, top }) => {
                // SAFETY: The top node is allocated and is about to be replaced as the top.
                let node = unsafe { top.take_node() };

                match (len.checked_sub(1), node.next) {
                    (Some(new_len), Some(next)) => {
                        *top = next;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Removes and returns the item at the top of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Returns a reference to the item at the top of the stack, or an error if it is empty.
    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        match &self.state {
            Empty => Err(EmptyCollection),
            Full(StackContents { top, .. }) => Ok(top.value()),
        }
    }

    /// Returns a reference to the item at the top of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().throw()
    }

    /// Returns a mutable reference to the item at the top of the stack, or an error if it is
    /// empty.
    pub fn try_peek_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        match &mut self.state {
            Empty => Err(EmptyCollection),
            Full(StackContents { top, .. }) => Ok(top.value_mut()),
        }
    }

    /// Returns a mutable reference to the item at the top of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn peek_mut(&mut self) -> &mut T {
        self.try_peek_mut().throw()
    }

    /// Removes every item from the stack.
    pub fn clear(&mut self) {
        *self = LinkedStack::new();
    }

    /// Returns a borrowed iterator over every item, from the bottom of the stack to the top.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut items = DynamicArray::with_capacity(self.len());
        // Descending the chain visits the items from the top down.
        items.extend(self.chain());
        Iter {
            inner: items.into_iter().rev(),
        }
    }

    /// Returns an iterator that follows the links from the top of the stack to the bottom.
    pub(crate) const fn chain(&self) -> ChainIter<'_, T> {
        match &self.state {
            Empty => ChainIter::new(None, 0),
            Full(StackContents { len, top }) => ChainIter::new(Some(*top), len.get()),
        }
    }
}

impl<T> Collection<T> for LinkedStack<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        self.len()
    }

    /// Pushes `item` onto the top of the stack.
    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.iter()
    }
}

impl_collection_traits!(LinkedStack);

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        if let Full(StackContents { top, .. }) = self.state {
            // SAFETY: The stack owns every node in the chain and is never used again.
            unsafe { node::drop_chain(Some(top)) }
        }
    }
}

// SAFETY: A LinkedStack uniquely owns all of its nodes, so it is safe for Send when T: Send.
unsafe impl<T: Send> Send for LinkedStack<T> {}
// SAFETY: LinkedStack's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that LinkedStack<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for LinkedStack<T> {}
