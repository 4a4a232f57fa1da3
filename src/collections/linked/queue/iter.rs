use std::iter::FusedIterator;

use super::LinkedQueue;
use crate::collections::linked::iter::ChainIter;

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;

    type IntoIter = ChainIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// An owned iterator over a [`LinkedQueue`], which dequeues items from the front until the queue
/// is empty. Any items left when the iterator is dropped are dropped with it.
pub struct IntoIter<T> {
    pub(crate) queue: LinkedQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.queue.len()
    }
}
