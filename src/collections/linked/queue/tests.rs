#![cfg(test)]

use super::*;
use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::Collection;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

fn items<T: Copy>(queue: &LinkedQueue<T>) -> DynamicArray<T> {
    queue.iter().copied().collect()
}

#[test]
fn test_fifo_order() {
    let mut queue = LinkedQueue::new();
    for i in 1..=5 {
        queue.add(i);
        assert_eq!(*queue.peek(), 1, "The front shouldn't change when adding to the rear.");
        assert_eq!(queue.len(), i);
    }

    for i in 1..=5 {
        assert_eq!(queue.pop(), i, "Items should be popped in the order they were added.");
    }
    assert!(queue.is_empty());
}

#[test]
fn test_empty_errors() {
    let mut queue: LinkedQueue<u8> = LinkedQueue::new();
    assert_eq!(queue.try_pop(), Err(EmptyCollection));
    assert_eq!(queue.try_peek(), Err(EmptyCollection));

    queue.add(1);
    queue.pop();
    assert_eq!(
        queue.try_pop(),
        Err(EmptyCollection),
        "A drained queue should behave like a new one."
    );

    queue.add(2);
    assert_eq!(*queue.peek(), 2, "A drained queue should still accept items.");

    assert_panics!({
        LinkedQueue::<u8>::new().pop();
    });
    assert_panics!({
        LinkedQueue::<u8>::new().peek();
    });
}

#[test]
fn test_remove_front() {
    let mut a: LinkedQueue<_> = (0..4).collect();
    let mut b = a.clone();

    assert_eq!(a.remove(0), b.pop(), "Removing index 0 should match popping.");
    assert_eq!(a, b);
    assert_eq!(*a.peek(), 1);
}

#[test]
fn test_remove_middle() {
    let mut queue = LinkedQueue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);

    assert_eq!(queue.remove(1), 2);
    assert_eq!(*items(&queue), [1, 3]);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_remove_rear() {
    let mut queue: LinkedQueue<_> = (0..3).collect();

    assert_eq!(queue.remove(2), 2);
    assert_eq!(*items(&queue), [0, 1]);

    queue.add(5);
    assert_eq!(
        *items(&queue),
        [0, 1, 5],
        "Adding after removing the rear should link to the new rear."
    );

    assert_eq!(queue.remove(1), 1);
    assert_eq!(queue.remove(1), 5);
    assert_eq!(queue.remove(0), 0);
    assert!(queue.is_empty());

    queue.add(6);
    assert_eq!(*items(&queue), [6]);
}

#[test]
fn test_remove_out_of_bounds() {
    let mut queue: LinkedQueue<_> = (0..3).collect();
    assert_eq!(queue.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(queue.try_remove(usize::MAX), Err(IndexOutOfBounds { index: usize::MAX, len: 3 }));
    assert_eq!(*items(&queue), [0, 1, 2], "A rejected remove shouldn't modify the queue.");

    assert_eq!(
        LinkedQueue::<u8>::new().try_remove(0),
        Err(IndexOutOfBounds { index: 0, len: 0 })
    );
    assert_panics!({
        LinkedQueue::<u8>::new().remove(0);
    });
}

#[test]
fn test_iteration() {
    let queue: LinkedQueue<_> = ["front", "middle", "rear"].into_iter().collect();

    let mut iter = queue.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&"front"));
    assert_eq!(iter.clone().count(), 2, "Cloned iterators should continue from the same place.");
    assert_eq!(iter.len(), 2);

    assert_eq!((&queue).into_iter().count(), 3, "Iterating shouldn't modify the queue.");

    let mut owned = queue.into_iter();
    assert_eq!(owned.next(), Some("front"));
    assert_eq!(owned.len(), 2);
    assert_eq!(*owned.collect::<DynamicArray<_>>(), ["middle", "rear"]);

    let empty: LinkedQueue<u8> = LinkedQueue::new();
    assert_eq!(empty.iter().next(), None);
}

#[test]
fn test_clear() {
    let mut queue: LinkedQueue<_> = (0..10).collect();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.try_peek(), Err(EmptyCollection));

    queue.add(1);
    assert_eq!(*items(&queue), [1]);
}

#[test]
fn test_collection_contract() {
    let a = LinkedQueue::from_source([1, 2, 3]);
    let b: LinkedQueue<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(a, b, "Queues built by the same adds should be equal.");
    assert!(!Collection::is_empty(&a));
    assert_eq!(a.to_string(), "[1, 2, 3]");

    let joined = &a + &b;
    assert_eq!(joined.to_string(), "[1, 2, 3, 1, 2, 3]");
    assert_eq!(*joined.peek(), 1, "The left operand's items should be at the front.");
    assert_eq!(b.len(), 3, "Borrowed concatenation shouldn't modify the operands.");

    let mut extended = a.clone();
    extended.extend([4, 5]);
    assert_eq!(extended.to_string(), "[1, 2, 3, 4, 5]");
    assert_ne!(extended, a);

    assert_eq!(
        format!("{:?}", LinkedQueue::from_source(['x'])),
        "LinkedQueue { contents: ['x'], len: 1 }"
    );
    assert_eq!(LinkedQueue::<u8>::new().to_string(), "[]");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut queue = LinkedQueue::new();
    for _ in 0..10 {
        queue.add(counter.clone());
    }

    drop(queue.remove(4));
    assert_eq!(counter.drops(), 1, "Removing should only drop the removed item.");

    let mut iter = queue.into_iter();
    drop(iter.next());
    assert_eq!(counter.drops(), 2);

    drop(iter);
    assert_eq!(counter.drops(), 10, "Dropping the iterator should drop every remaining item.");
}

#[test]
fn test_zst_support() {
    let mut queue = LinkedQueue::new();
    for _ in 0..5 {
        queue.add(ZeroSizedType);
    }
    assert_eq!(queue.remove(4), ZeroSizedType);
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.into_iter().count(), 4);
}
