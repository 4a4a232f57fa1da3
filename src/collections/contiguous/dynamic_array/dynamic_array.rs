use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::FixedArray;
#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, InvalidSize, ValueNotFound};
use crate::util::fmt::write_list;
use crate::util::result::ResultExtension;

const INITIAL_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, which stores its elements in a [`FixedArray`] and
/// replaces it with one of double the capacity whenever it runs out of room.
///
/// Doubling bounds the total number of element moves across `n` appends to `O(n)`, so appending
/// is amortized `O(1)`. Capacity is never reduced, even as elements are removed.
///
/// DynamicArray has no interior mutability, so sharing one between threads requires external
/// synchronization for any mutation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `k`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-k)` |
/// | `remove` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, `append` will take
/// `O(n)`.
pub struct DynamicArray<T> {
    pub(crate) arr: FixedArray<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length 0 and capacity 1.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.capacity(), 1);
    /// ```
    pub fn new() -> DynamicArray<T> {
        Self::with_capacity(INITIAL_CAP)
    }

    /// Creates a new DynamicArray with room for `cap` elements before it needs to grow. A
    /// capacity of zero is raised to one, so that doubling always makes room.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_capacity(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            arr: FixedArray::<T>::new_uninit(cap.max(INITIAL_CAP)),
            len: 0,
        }
    }

    /// Returns the number of elements stored in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the DynamicArray can hold before it has to grow.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..3 {
    ///     arr.append(i);
    /// }
    /// assert_eq!(arr.capacity(), 4);
    /// ```
    pub const fn capacity(&self) -> usize {
        self.arr.len()
    }

    /// Returns a reference to the element at index `k`, or an error unless `0 <= k < len`.
    pub fn try_at(&self, k: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(k)?;
        // SAFETY: k < len and all values < len are initialized.
        Ok(unsafe { self.arr[k].assume_init_ref() })
    }

    /// Returns a reference to the element at index `k`.
    ///
    /// # Panics
    /// Panics unless `0 <= k < len`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<_> = ["x", "y"].into_iter().collect();
    /// assert_eq!(*arr.at(1), "y");
    /// assert!(arr.try_at(2).is_err());
    /// ```
    pub fn at(&self, k: usize) -> &T {
        self.try_at(k).throw()
    }

    /// Returns a mutable reference to the element at index `k`, or an error unless `0 <= k < len`.
    pub fn try_at_mut(&mut self, k: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(k)?;
        // SAFETY: k < len and all values < len are initialized.
        Ok(unsafe { self.arr[k].assume_init_mut() })
    }

    /// Returns a mutable reference to the element at index `k`.
    ///
    /// # Panics
    /// Panics unless `0 <= k < len`.
    pub fn at_mut(&mut self, k: usize) -> &mut T {
        self.try_at_mut(k).throw()
    }

    /// Adds `value` to the end of the DynamicArray, doubling the capacity first if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::<u8>::new();
    /// for i in 0..=5 {
    ///     arr.append(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(arr.capacity(), 8);
    /// ```
    pub fn append(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.arr[self.len] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Inserts `value` at index `k`, shifting every element from `k` onwards one place to the
    /// right. Inserting at `len` is equivalent to [`append`](DynamicArray::append).
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] without modifying anything unless `0 <= k <= len`.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub fn try_insert(&mut self, k: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if k > self.len {
            return Err(IndexOutOfBounds { index: k, len: self.len });
        }

        if self.len == self.capacity() {
            self.grow();
        }

        // Move the uninitialized slot at len down to k, shifting the rightmost element first.
        for j in (k + 1..=self.len).rev() {
            self.arr.swap(j, j - 1);
        }
        self.arr[k] = MaybeUninit::new(value);
        self.len += 1;

        Ok(())
    }

    /// Inserts `value` at index `k`, shifting every element from `k` onwards one place to the
    /// right.
    ///
    /// # Panics
    /// Panics unless `0 <= k <= len`, or if the memory layout of the DynamicArray would have a
    /// size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..3).collect();
    /// arr.insert(1, 100);
    /// arr.insert(1, 200);
    /// arr.insert(5, 300);
    /// assert_eq!(&*arr, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, k: usize, value: T) {
        self.try_insert(k, value).throw()
    }

    /// Removes and returns the last element, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.take_slot(self.len))
        }
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: The first len values were initialized. len has already been reset, so even if a
        // drop panics, the values won't be dropped again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Replaces the backing FixedArray with one of double the capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = self.capacity()
            .checked_mul(GROWTH_FACTOR)
            .expect("Capacity overflow!");
        self.resize(new_cap);
    }

    /// Moves all elements into a newly allocated FixedArray with capacity `new_cap`, which must be
    /// at least len. The old allocation is released without dropping anything, because all of its
    /// initialized values have been moved.
    pub(crate) fn resize(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        let new_arr = FixedArray::<T>::new_uninit(new_cap);
        // SAFETY: Both allocations are valid for at least len elements, and are distinct.
        unsafe {
            ptr::copy_nonoverlapping(self.arr.ptr.as_ptr(), new_arr.ptr.as_ptr(), self.len);
        }

        #[cfg(feature = "log")]
        log::trace!(
            "DynamicArray resized from {} to {} (len {})",
            self.capacity(),
            new_cap,
            self.len
        );

        self.arr = new_arr;
    }

    /// Moves the value out of the slot at `index`, leaving it uninitialized. The caller must have
    /// already removed `index` from the initialized range.
    fn take_slot(&mut self, index: usize) -> T {
        // SAFETY: All callers pass an index that was initialized and is now outside of len, so it
        // will never be read again.
        unsafe { mem::replace(&mut self.arr[index], MaybeUninit::uninit()).assume_init() }
    }

    /// Checks that the provided index refers to an element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Removes and returns the first element equal to `value`, shifting every following element one
    /// place to the left to close the gap.
    ///
    /// # Errors
    /// Returns [`ValueNotFound`] without modifying anything if no element is equal to `value`.
    pub fn try_remove(&mut self, value: &T) -> Result<T, ValueNotFound> {
        let k = self.index_of(value).ok_or(ValueNotFound)?;

        // Move the matched value to the end, shifting the rest left by one.
        for j in k..self.len - 1 {
            self.arr.swap(j, j + 1);
        }
        self.len -= 1;

        Ok(self.take_slot(self.len))
    }

    /// Removes and returns the first element equal to `value`, shifting every following element one
    /// place to the left to close the gap.
    ///
    /// # Panics
    /// Panics if no element is equal to `value`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "hello".chars().collect();
    /// assert_eq!(arr.remove(&'l'), 'l');
    /// assert_eq!(&*arr, &['h', 'e', 'l', 'o']);
    /// assert!(arr.try_remove(&'z').is_err());
    /// ```
    pub fn remove(&mut self, value: &T) -> T {
        self.try_remove(value).throw()
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T> From<FixedArray<T>> for DynamicArray<T> {
    /// Reuses the allocation of a FixedArray, giving a DynamicArray that is exactly full.
    fn from(value: FixedArray<T>) -> Self {
        let (ptr, len) = value.into_parts();
        DynamicArray {
            // SAFETY: MaybeUninit<T> has the same layout as T, so the allocation and length are
            // still valid.
            arr: unsafe { FixedArray::from_raw_parts(ptr.cast(), len) },
            len,
        }
    }
}

impl<T> TryFrom<DynamicArray<T>> for FixedArray<T> {
    type Error = InvalidSize;

    /// Moves the elements of a DynamicArray into a FixedArray of exactly its length, which fails
    /// if it is empty.
    fn try_from(mut value: DynamicArray<T>) -> Result<Self, Self::Error> {
        if value.len == 0 {
            return Err(InvalidSize { size: 0 });
        }

        value.resize(value.len);

        let value = ManuallyDrop::new(value);
        // SAFETY: The capacity is now exactly len and every element is initialized. The
        // DynamicArray is never dropped, so ownership passes to the FixedArray.
        Ok(unsafe { FixedArray::from_raw_parts(value.arr.ptr.cast(), value.len) })
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
        // Implicitly drop self.arr, containing only MaybeUninit values. Doing so deallocates the
        // owned memory.
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len values are initialized and the allocation is properly aligned for
        // them. The borrow checker prevents mutation while the slice is alive.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing any other access.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_capacity(self.capacity());

        for value in self.iter() {
            arr.append(value.clone());
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
