use std::iter::{FusedIterator, Rev};

use super::LinkedStack;
use crate::collections::contiguous::DynamicArray;
use crate::collections::contiguous::array::IntoIter as ArrayIntoIter;

/// A borrowed iterator over a [`LinkedStack`], from the bottom of the stack to the top. See
/// [`LinkedStack::iter`].
pub struct Iter<'a, T> {
    pub(crate) inner: Rev<ArrayIntoIter<&'a T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedStack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Pops every item off of the stack, yielding them from the bottom of the stack to the top
    /// like [`LinkedStack::iter`].
    fn into_iter(mut self) -> Self::IntoIter {
        let mut items = DynamicArray::with_capacity(self.len());
        while let Ok(item) = self.try_pop() {
            items.append(item);
        }
        IntoIter {
            inner: items.into_iter().rev(),
        }
    }
}

/// An owned iterator over a [`LinkedStack`], from the bottom of the stack to the top.
pub struct IntoIter<T> {
    pub(crate) inner: Rev<ArrayIntoIter<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
