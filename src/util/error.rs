use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the valid range of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection, which the index must be less than.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A fixed-size collection was constructed with a size that can't hold any elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSize {
    /// The size that was rejected.
    pub size: usize,
}

impl Display for InvalidSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid size {}, fixed-size collections must hold at least one element!",
            self.size
        )
    }
}

impl Error for InvalidSize {}

/// A search by value didn't find a matching element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNotFound;

impl Display for ValueNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value not found in collection!")
    }
}

impl Error for ValueNotFound {}

/// An element was requested from a collection with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Collection is empty!")
    }
}

impl Error for EmptyCollection {}

/// Any of the errors produced by this crate's collections, for use with `?` when a caller deals
/// with more than one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`InvalidSize`].
    InvalidSize(InvalidSize),
    /// See [`ValueNotFound`].
    ValueNotFound(ValueNotFound),
    /// See [`EmptyCollection`].
    EmptyCollection(EmptyCollection),
}
