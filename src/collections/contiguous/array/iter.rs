use std::alloc;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::slice;

use super::FixedArray;
#[allow(unused)]
use crate::collections::contiguous::DynamicArray;

impl<T> IntoIterator for FixedArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, len) = self.into_parts();
        // SAFETY: The FixedArray has been decomposed, so the iterator takes over its allocation
        // and all len initialized elements.
        unsafe { IntoIter::from_raw(ptr, len, len) }
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FixedArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned type for owned iteration over a [`FixedArray`] or [`DynamicArray`]. See
/// [`FixedArray::into_iter`] and [`DynamicArray::into_iter`].
///
/// The iterator owns the original allocation and releases it when dropped, along with any
/// elements which weren't yielded.
pub struct IntoIter<T> {
    pub(crate) buf: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> IntoIter<T> {
    /// Creates an IntoIter over the first `len` elements of an allocation with room for `cap`.
    ///
    /// # Safety
    /// `buf` must have been allocated in the global allocator with the layout of `cap` elements of
    /// `T` (or be dangling for a zero-sized layout), and the first `len` elements must be
    /// initialized. Ownership of the allocation and those elements passes to the iterator.
    pub(crate) const unsafe fn from_raw(buf: NonNull<T>, len: usize, cap: usize) -> IntoIter<T> {
        IntoIter {
            buf,
            cap,
            start: 0,
            end: len,
            _phantom: PhantomData,
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Elements in start..end haven't been yielded and are still initialized.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }

        let layout = FixedArray::<T>::make_layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: buf was allocated with this layout, which isn't zero-sized.
            unsafe { alloc::dealloc(self.buf.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is within the initialized range. Incrementing start afterwards means
            // the value is effectively moved out of the allocation.
            let value = unsafe { self.buf.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is within the initialized range and won't be
            // read again.
            let value = unsafe { self.buf.add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}
