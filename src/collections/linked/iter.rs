use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::node::Link;

/// A borrowed iterator over a chain of singly linked nodes, following the links from the head
/// of the chain to its end.
pub struct ChainIter<'a, T> {
    pub(crate) next: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> ChainIter<'a, T> {
    pub(crate) const fn new(head: Link<T>, len: usize) -> ChainIter<'a, T> {
        ChainIter {
            next: head,
            remaining: len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = *node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for ChainIter<'_, T> {}

impl<T> ExactSizeIterator for ChainIter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> Clone for ChainIter<'_, T> {
    fn clone(&self) -> Self {
        ChainIter::new(self.next, self.remaining)
    }
}
