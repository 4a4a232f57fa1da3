use std::marker::PhantomData;

use crate::collections::linked::iter::ChainIter;
use crate::collections::linked::length::{Length, ONE};
use crate::collections::linked::node::{self, Node, NodeRef};
use crate::collections::traits::Collection;
use crate::collections::traits::collection::impl_collection_traits;
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A first-in-first-out queue of singly linked nodes, with pointers to both ends of the chain.
/// Items are added after the rear and removed from the front, which are both `O(1)`.
///
/// The rear node never has a successor. An empty queue has neither a front nor a rear, which is
/// represented by a single `Empty` state so that the two can never disagree.
///
/// LinkedQueue has no interior mutability, so sharing one between threads requires external
/// synchronization for any mutation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedQueue.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `remove` | `O(i)` |
/// | `clear` | `O(n)` |
///
/// # Examples
/// ```
/// # use linear_collections::collections::linked::LinkedQueue;
/// let mut queue = LinkedQueue::new();
/// queue.add(1);
/// queue.add(2);
/// queue.add(3);
/// assert_eq!(queue.remove(1), 2);
/// assert_eq!(queue.to_string(), "[1, 3]");
/// assert_eq!(queue.pop(), 1);
/// ```
pub struct LinkedQueue<T> {
    pub(crate) state: QueueState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum QueueState<T> {
    #[default]
    Empty,
    Full(QueueContents<T>),
}

use QueueState::*;

pub(crate) struct QueueContents<T> {
    pub len: Length,
    pub front: NodeRef<T>,
    pub rear: NodeRef<T>,
}

impl<T> LinkedQueue<T> {
    /// Creates a new LinkedQueue with no items.
    pub const fn new() -> LinkedQueue<T> {
        LinkedQueue {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of items in the queue.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(QueueContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the queue contains no items.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Adds `item` to the rear of the queue.
    pub fn add(&mut self, item: T) {
        let node = NodeRef::from_node(Node {
            value: item,
            next: None,
        });

        match &mut self.state {
            Empty => {
                self.state = Full(QueueContents {
                    len: ONE,
                    front: node,
                    rear: node,
                })
            },
            Full(contents) => {
                contents.len = contents.len.checked_add(1).expect("Capacity overflow!");
                *contents.rear.next_mut() = Some(node);
                contents.rear = node;
            },
        }
    }

    /// Adds `item` to the rear of the queue. The same as [`add`](LinkedQueue::add).
    pub fn enqueue(&mut self, item: T) {
        self.add(item);
    }

    /// Removes and returns the item at the front of the queue, or an error if it is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front().ok_or(EmptyCollection)
    }

    /// Removes and returns the item at the front of the queue.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Returns a reference to the item at the front of the queue, or an error if it is empty.
    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        match &self.state {
            Empty => Err(EmptyCollection),
            Full(QueueContents { front, .. }) => Ok(front.value()),
        }
    }

    /// Returns a reference to the item at the front of the queue.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().throw()
    }

    /// Removes and returns the item at `index`, where index 0 is the front of the queue and
    /// `len - 1` is the rear. Removing index 0 is the same as [`pop`](LinkedQueue::pop).
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] without modifying anything unless `0 <= index < len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len();
        let out_of_bounds = IndexOutOfBounds { index, len };

        if index >= len {
            return Err(out_of_bounds);
        }
        if index == 0 {
            return self.pop_front().ok_or(out_of_bounds);
        }

        let Full(contents) = &mut self.state else {
            return Err(out_of_bounds);
        };

        // SAFETY: index < len, so there are at least index - 1 nodes after the front.
        let prev = unsafe { node::seek(contents.front, index - 1) };
        // SAFETY: prev is at index - 1 < len - 1, so it has a successor. That successor is
        // unlinked below, so it is never used again.
        let node = unsafe { prev.next().unwrap_unchecked().take_node() };
        *prev.next_mut() = node.next;

        if node.next.is_none() {
            #[cfg(feature = "log")]
            log::trace!("LinkedQueue removed its rear at index {index}, rear moved back one node");

            contents.rear = prev;
        }
        // SAFETY: index >= 1 and index < len, so len was at least 2.
        contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };

        Ok(node.value)
    }

    /// Removes and returns the item at `index`, where index 0 is the front of the queue and
    /// `len - 1` is the rear.
    ///
    /// # Panics
    /// Panics unless `0 <= index < len`.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes every item from the queue.
    pub fn clear(&mut self) {
        *self = LinkedQueue::new();
    }

    /// Returns a borrowed iterator over every item, from the front of the queue to the rear.
    pub const fn iter(&self) -> ChainIter<'_, T> {
        match &self.state {
            Empty => ChainIter::new(None, 0),
            Full(QueueContents { len, front, .. }) => ChainIter::new(Some(*front), len.get()),
        }
    }

    /// Removes the front node, returning to the empty state if it was the only one.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(QueueContents { len, front, .. }) => {
                // SAFETY: The front node is allocated and is about to be replaced as the front.
                let node = unsafe { front.take_node() };

                match (len.checked_sub(1), node.next) {
                    (Some(new_len), Some(next)) => {
                        *front = next;
                        *len = new_len;
                    },
                    // The rear was the front, so both are cleared together.
                    _ => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }
}

impl<T> Collection<T> for LinkedQueue<T> {
    type Iter<'a> = ChainIter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        self.len()
    }

    /// Adds `item` to the rear of the queue.
    fn add(&mut self, item: T) {
        self.add(item);
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.iter()
    }
}

impl_collection_traits!(LinkedQueue);

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        if let Full(QueueContents { front, .. }) = self.state {
            // SAFETY: The queue owns every node in the chain and is never used again.
            unsafe { node::drop_chain(Some(front)) }
        }
    }
}

// SAFETY: A LinkedQueue uniquely owns all of its nodes, so it is safe for Send when T: Send.
unsafe impl<T: Send> Send for LinkedQueue<T> {}
// SAFETY: LinkedQueue's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that LinkedQueue<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}
