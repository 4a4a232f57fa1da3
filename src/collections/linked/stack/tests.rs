#![cfg(test)]

use super::*;
use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::Collection;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_lifo_order() {
    let mut stack = LinkedStack::new();
    for i in 1..=5 {
        stack.push(i);
        assert_eq!(*stack.peek(), i, "Peek should return the item that was just pushed.");
        assert_eq!(stack.len(), i, "Peek shouldn't change the size.");
    }

    for i in (1..=5).rev() {
        assert_eq!(stack.pop(), i, "Items should be popped in reverse order.");
    }
    assert!(stack.is_empty());
}

#[test]
fn test_empty_errors() {
    let mut stack: LinkedStack<u8> = LinkedStack::new();
    assert_eq!(stack.try_pop(), Err(EmptyCollection));
    assert_eq!(stack.try_peek(), Err(EmptyCollection));

    stack.push(1);
    stack.push(2);
    stack.pop();
    stack.pop();
    assert_eq!(
        stack.try_pop(),
        Err(EmptyCollection),
        "A drained stack should behave like a new one."
    );
    assert_eq!(stack.try_peek_mut(), Err(EmptyCollection));

    assert_panics!({
        LinkedStack::<u8>::new().pop();
    });
    assert_panics!({
        LinkedStack::<u8>::new().peek();
    });
}

#[test]
fn test_peek_mut_and_clear() {
    let mut stack: LinkedStack<_> = (0..3).collect();
    *stack.peek_mut() = 10;
    assert_eq!(stack.to_string(), "[0, 1, 10]");

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);

    stack.push(4);
    assert_eq!(*stack.peek(), 4, "A cleared stack should still be usable.");
}

#[test]
fn test_iteration_order() {
    let mut stack = LinkedStack::new();
    stack.push("bottom");
    stack.push("middle");
    stack.push("top");

    assert_eq!(
        *stack.iter().copied().collect::<DynamicArray<_>>(),
        ["bottom", "middle", "top"],
        "Iteration should go from bottom to top."
    );
    assert_eq!(stack.iter().len(), 3);
    assert_eq!(stack.iter().next_back(), Some(&"top"));
    assert_eq!(stack.len(), 3, "Iterating shouldn't modify the stack.");

    assert_eq!(
        *stack.into_iter().collect::<DynamicArray<_>>(),
        ["bottom", "middle", "top"],
        "Owned iteration should use the same order."
    );

    let empty: LinkedStack<u8> = LinkedStack::new();
    assert_eq!(empty.iter().next(), None);
}

#[test]
fn test_large_stack() {
    let mut stack = LinkedStack::new();
    for i in 0..100_000_u32 {
        stack.push(i);
    }

    assert_eq!(stack.iter().next(), Some(&0), "Iterating a deep stack shouldn't recurse.");
    assert_eq!(stack.iter().count(), 100_000);
    drop(stack);
}

#[test]
fn test_collection_contract() {
    let a: LinkedStack<_> = LinkedStack::from_source([1, 2, 3]);
    let b: LinkedStack<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(a, b, "Stacks built by the same adds should be equal.");
    assert_eq!(a.to_string(), "[1, 2, 3]");
    assert!(!Collection::is_empty(&a));

    let shorter: LinkedStack<_> = [1, 2].into_iter().collect();
    assert_ne!(a, shorter, "Stacks with different sizes shouldn't be equal.");
    assert_ne!(
        a,
        [3, 2, 1].into_iter().collect::<LinkedStack<_>>(),
        "Order should matter for equality."
    );

    let joined = &a + &shorter;
    assert_eq!(joined.to_string(), "[1, 2, 3, 1, 2]");
    assert_eq!(*joined.peek(), 2, "The right operand's items should be on top.");
    assert_eq!(a.len(), 3, "Borrowed concatenation shouldn't modify the operands.");

    let consumed = a.clone() + shorter;
    assert_eq!(consumed, joined);

    let cloned = joined.clone();
    assert_eq!(cloned, joined);

    assert_eq!(
        format!("{:?}", LinkedStack::from_source(['a', 'b'])),
        "LinkedStack { contents: ['a', 'b'], len: 2 }"
    );
    assert_eq!(LinkedStack::<u8>::new().to_string(), "[]");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut stack = LinkedStack::new();
    for _ in 0..10 {
        stack.push(counter.clone());
    }

    drop(stack.pop());
    assert_eq!(counter.drops(), 1);

    drop(stack);
    assert_eq!(counter.drops(), 10, "Dropping the stack should drop every remaining item.");
}
