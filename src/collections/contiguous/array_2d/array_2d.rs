use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};
use std::slice;

use crate::collections::contiguous::FixedArray;
#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, InvalidSize};
use crate::util::fmt::write_list;
use crate::util::result::ResultExtension;

/// A two dimensional array with a fixed number of rows and columns, indexed by `(row, col)`.
///
/// Each row is its own [`FixedArray`] of length `num_cols`, held in a FixedArray of length
/// `num_rows`. Both dimensions are chosen at construction and never change.
///
/// # Examples
/// ```
/// # use linear_collections::collections::contiguous::FixedArray2D;
/// let mut grid: FixedArray2D<u8> = FixedArray2D::new(2, 3);
/// grid[(1, 2)] = 5;
/// assert_eq!(grid.num_rows(), 2);
/// assert_eq!(grid.num_cols(), 3);
/// assert_eq!(*grid.get((1, 2)), 5);
/// assert!(grid.try_get((2, 0)).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedArray2D<T> {
    pub(crate) rows: FixedArray<FixedArray<T>>,
}

impl<T> FixedArray2D<T> {
    /// Creates a FixedArray2D with every element produced by calling `f` with its `(row, col)`.
    ///
    /// # Errors
    /// Returns [`InvalidSize`] if either dimension is zero.
    pub fn try_from_fn<F>(num_rows: usize, num_cols: usize, mut f: F) -> Result<Self, InvalidSize>
    where
        F: FnMut(usize, usize) -> T,
    {
        if num_cols == 0 {
            return Err(InvalidSize { size: num_cols });
        }

        let rows = FixedArray::try_from_fn(num_rows, |row| {
            FixedArray::from_fn_unchecked(num_cols, |col| f(row, col))
        })?;

        Ok(FixedArray2D { rows })
    }

    /// Returns the number of rows.
    pub const fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns, which is the same for every row.
    pub fn num_cols(&self) -> usize {
        // There is always at least one row.
        self.rows[0].len()
    }

    /// Returns a reference to the element at `(row, col)`, or an error for whichever coordinate is
    /// out of bounds first.
    pub fn try_get(&self, (row, col): (usize, usize)) -> Result<&T, IndexOutOfBounds> {
        self.rows.try_get(row)?.try_get(col)
    }

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either coordinate is out of bounds.
    pub fn get(&self, index: (usize, usize)) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a mutable reference to the element at `(row, col)`, or an error for whichever
    /// coordinate is out of bounds first.
    pub fn try_get_mut(&mut self, (row, col): (usize, usize)) -> Result<&mut T, IndexOutOfBounds> {
        self.rows.try_get_mut(row)?.try_get_mut(col)
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either coordinate is out of bounds.
    pub fn get_mut(&mut self, index: (usize, usize)) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Stores `value` at `(row, col)`. Nothing is modified if either coordinate is out of bounds.
    pub fn try_set(&mut self, index: (usize, usize), value: T) -> Result<(), IndexOutOfBounds> {
        *self.try_get_mut(index)? = value;
        Ok(())
    }

    /// Stores `value` at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either coordinate is out of bounds.
    pub fn set(&mut self, index: (usize, usize), value: T) {
        self.try_set(index, value).throw()
    }

    /// Returns the row at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> &FixedArray<T> {
        self.rows.get(index)
    }

    /// Returns an iterator over every row, from the first to the last.
    pub fn rows(&self) -> slice::Iter<'_, FixedArray<T>> {
        self.rows.iter()
    }
}

impl<T: Default> FixedArray2D<T> {
    /// Creates a FixedArray2D with every element set to the default value of `T`.
    ///
    /// # Errors
    /// Returns [`InvalidSize`] if either dimension is zero.
    pub fn try_new(num_rows: usize, num_cols: usize) -> Result<Self, InvalidSize> {
        Self::try_from_fn(num_rows, num_cols, |_, _| T::default())
    }

    /// Creates a FixedArray2D with every element set to the default value of `T`.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self::try_new(num_rows, num_cols).throw()
    }
}

impl<T: Clone> FixedArray2D<T> {
    /// Creates a FixedArray2D with every element set to a clone of `value`.
    ///
    /// # Errors
    /// Returns [`InvalidSize`] if either dimension is zero.
    pub fn try_filled(num_rows: usize, num_cols: usize, value: T) -> Result<Self, InvalidSize> {
        Self::try_from_fn(num_rows, num_cols, |_, _| value.clone())
    }

    /// Creates a FixedArray2D with every element set to a clone of `value`.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn filled(num_rows: usize, num_cols: usize, value: T) -> Self {
        Self::try_filled(num_rows, num_cols, value).throw()
    }

    /// Overwrites every element of every row with a clone of `value`.
    pub fn clear(&mut self, value: T) {
        for row in self.rows.iter_mut() {
            row.clear(value.clone());
        }
    }
}

impl<T> Index<(usize, usize)> for FixedArray2D<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<(usize, usize)> for FixedArray2D<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T: Debug> Debug for FixedArray2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray2D")
            .field("rows", &RowsDebug(&self.rows))
            .field("num_rows", &self.num_rows())
            .field("num_cols", &self.num_cols())
            .finish()
    }
}

struct RowsDebug<'a, T>(&'a FixedArray<FixedArray<T>>);

impl<T: Debug> Debug for RowsDebug<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(|row| &**row)).finish()
    }
}

impl<T: Display> Display for FixedArray2D<T> {
    /// Writes one bracketed row per line.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index != 0 {
                writeln!(f)?;
            }
            write_list(f, row.iter())?;
        }
        Ok(())
    }
}
