use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, InvalidSize};
use crate::util::fmt::write_list;
use crate::util::result::ResultExtension;

/// An array with a length that is chosen at runtime and then never changes. Every element access
/// is bounds checked.
///
/// FixedArray owns a single allocation in the global allocator, holding exactly `len` initialized
/// elements. It can't be empty: constructing one with a length of zero fails with
/// [`InvalidSize`].
///
/// FixedArray has no interior mutability, so sharing one between threads requires external
/// synchronization for any mutation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the FixedArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct FixedArray<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> FixedArray<T> {
    /// Returns the length of the FixedArray, which is fixed at construction.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::FixedArray;
    /// let arr: FixedArray<u8> = FixedArray::new(3);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always returns false, a FixedArray holds at least one element.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Creates a FixedArray with `len` elements, each produced by calling `f` with its index.
    ///
    /// # Errors
    /// Returns [`InvalidSize`] if `len` is zero.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::FixedArray;
    /// let arr = FixedArray::try_from_fn(4, |i| i * 10).unwrap();
    /// assert_eq!(&*arr, &[0, 10, 20, 30]);
    /// assert!(FixedArray::try_from_fn(0, |i| i).is_err());
    /// ```
    pub fn try_from_fn<F>(len: usize, f: F) -> Result<FixedArray<T>, InvalidSize>
    where
        F: FnMut(usize) -> T,
    {
        if len == 0 {
            return Err(InvalidSize { size: len });
        }
        Ok(Self::from_fn_unchecked(len, f))
    }

    /// Creates a FixedArray from an iterator that knows its exact length.
    ///
    /// # Errors
    /// Returns [`InvalidSize`] if the iterator is empty.
    ///
    /// # Panics
    /// Panics if the iterator yields fewer items than it reported.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::FixedArray;
    /// let arr = FixedArray::try_from_iter_sized(['a', 'b', 'c']).unwrap();
    /// assert_eq!(arr.len(), 3);
    /// assert_eq!(*arr.get(2), 'c');
    /// ```
    pub fn try_from_iter_sized<I>(iter: I) -> Result<FixedArray<T>, InvalidSize>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let len = iter.len();
        if len == 0 {
            return Err(InvalidSize { size: len });
        }

        let arr = Self::new_uninit(len);
        let mut written = 0;
        for (index, item) in iter.take(len).enumerate() {
            // SAFETY: take(len) keeps index < len, which is within the allocated range.
            unsafe { arr.ptr.add(index).write(MaybeUninit::new(item)) }
            written += 1;
        }

        // If this fails, the written values are leaked rather than dropped, which is safe.
        assert_eq!(written, len, "Iterator yielded fewer items than its reported length!");

        // SAFETY: All len values have been written.
        Ok(unsafe { arr.assume_init() })
    }

    /// Returns a reference to the element at `index`, or an error if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the element is allocated and initialized.
        Ok(unsafe { self.ptr.add(index).as_ref() })
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::FixedArray;
    /// let arr = FixedArray::filled(2, "x");
    /// assert_eq!(*arr.get(1), "x");
    /// ```
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, or an error if `index` is out of
    /// bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the element is allocated and initialized. The borrow of self
        // prevents any other access for the lifetime of the reference.
        Ok(unsafe { self.ptr.add(index).as_mut() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Stores `value` at `index`, dropping the previous element. Nothing is modified if `index` is
    /// out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::FixedArray;
    /// let mut arr: FixedArray<i32> = FixedArray::new(2);
    /// assert!(arr.try_set(1, 5).is_ok());
    /// assert!(arr.try_set(2, 5).is_err());
    /// assert_eq!(&*arr, &[0, 5]);
    /// ```
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        *self.try_get_mut(index)? = value;
        Ok(())
    }

    /// Stores `value` at `index`, dropping the previous element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T) {
        self.try_set(index, value).throw()
    }

    /// Checks that the provided index is within the bounds of self.
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

    /// Decomposes a FixedArray into its pointer and length, without dropping or deallocating
    /// anything.
    pub(crate) const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.len);
        mem::forget(self);
        ret
    }

    /// Creates a FixedArray from its raw components.
    ///
    /// # Safety
    /// `ptr` must have been allocated in the global allocator with the layout of `len` elements of
    /// `T` (or be dangling for a zero-sized layout), with all `len` elements initialized. Ownership
    /// of the allocation passes to the FixedArray.
    pub(crate) const unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> FixedArray<T> {
        FixedArray {
            ptr,
            len,
            _phantom: PhantomData,
        }
    }

    /// Creates a FixedArray with `len` elements without checking that `len` is non-zero. Only
    /// used internally by types which treat the FixedArray as raw storage.
    pub(crate) fn from_fn_unchecked<F>(len: usize, mut f: F) -> FixedArray<T>
    where
        F: FnMut(usize) -> T,
    {
        let arr = Self::new_uninit(len);

        for i in 0..len {
            // SAFETY: Layout::array has already checked that the allocation size fits within
            // isize::MAX and i is within the allocated range.
            unsafe { arr.ptr.add(i).write(MaybeUninit::new(f(i))) }
        }

        // SAFETY: All values have been initialized.
        unsafe { arr.assume_init() }
    }

    /// Allocates storage for `len` elements, all uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn new_uninit(len: usize) -> FixedArray<MaybeUninit<T>> {
        let layout = FixedArray::<MaybeUninit<T>>::make_layout(len);
        let ptr = FixedArray::<MaybeUninit<T>>::make_ptr(layout);

        FixedArray {
            ptr,
            len,
            _phantom: PhantomData,
        }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `len`
    /// elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(len: usize) -> Layout {
        Layout::array::<T>(len).expect("Capacity overflow!")
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Default> FixedArray<T> {
    /// Creates a FixedArray of `len` elements, each set to the default value of `T`.
    ///
    /// # Errors
    /// Returns [`InvalidSize`] if `len` is zero.
    pub fn try_new(len: usize) -> Result<FixedArray<T>, InvalidSize> {
        Self::try_from_fn(len, |_| T::default())
    }

    /// Creates a FixedArray of `len` elements, each set to the default value of `T`.
    ///
    /// # Panics
    /// Panics if `len` is zero, or if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::FixedArray;
    /// let arr: FixedArray<Option<u8>> = FixedArray::new(3);
    /// assert_eq!(&*arr, &[None, None, None]);
    /// ```
    pub fn new(len: usize) -> FixedArray<T> {
        Self::try_new(len).throw()
    }
}

impl<T: Clone> FixedArray<T> {
    /// Creates a FixedArray of `len` clones of `value`.
    ///
    /// # Errors
    /// Returns [`InvalidSize`] if `len` is zero.
    pub fn try_filled(len: usize, value: T) -> Result<FixedArray<T>, InvalidSize> {
        Self::try_from_fn(len, |_| value.clone())
    }

    /// Creates a FixedArray of `len` clones of `value`.
    ///
    /// # Panics
    /// Panics if `len` is zero, or if memory layout size exceeds [`isize::MAX`].
    pub fn filled(len: usize, value: T) -> FixedArray<T> {
        Self::try_filled(len, value).throw()
    }

    /// Overwrites every element with a clone of `value`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::FixedArray;
    /// let mut arr = FixedArray::try_from_iter_sized([1, 2, 3]).unwrap();
    /// arr.clear(7);
    /// assert_eq!(&*arr, &[7, 7, 7]);
    /// ```
    pub fn clear(&mut self, value: T) {
        self.fill(value);
    }
}

impl<T> FixedArray<MaybeUninit<T>> {
    /// Assume that all values of a `FixedArray<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that every element is properly initialized. Failing to
    /// do so is undefined behavior.
    pub(crate) unsafe fn assume_init(self) -> FixedArray<T> {
        let (ptr, len) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T and the caller guarantees that every
        // element is initialized.
        unsafe { FixedArray::from_raw_parts(ptr.cast(), len) }
    }
}

impl<T> Drop for FixedArray<T> {
    fn drop(&mut self) {
        // SAFETY: All len elements are initialized and are never accessed again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
        }

        let layout = FixedArray::<T>::make_layout(self.len);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for FixedArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(len) and is therefore valid and properly
        // aligned for len elements, all of which are initialized. The borrow checker prevents
        // mutation throughout the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for FixedArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for FixedArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for FixedArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for FixedArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for FixedArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: FixedArrays rely on a uniquely owned pointer and are therefore safe for Send when
// T: Send.
unsafe impl<T: Send> Send for FixedArray<T> {}
// SAFETY: FixedArray's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that FixedArray<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for FixedArray<T> {}

impl<T: Clone> Clone for FixedArray<T> {
    fn clone(&self) -> Self {
        Self::from_fn_unchecked(self.len, |i| self[i].clone())
    }
}

impl<T: PartialEq> PartialEq for FixedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for FixedArray<T> {}

impl<T: Hash> Hash for FixedArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for FixedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for FixedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
