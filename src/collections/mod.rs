//! Linear collection types, built up from raw allocations and linked nodes.
//!
//! # Purpose
//! These types cover the classic linear ADTs: fixed and growable arrays, a stack and a queue of
//! linked nodes, and the node a binary search tree is made of. They exist to show how each
//! structure manages its own memory, rather than to wrap the ones in [`std`].
//!
//! # Method
//! The contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing a lot of repetitive slice functionality. The linked types share their equality,
//! formatting and concatenation through the [`Collection`](traits::Collection) trait.
//!
//! # Errors
//! Every fallible method has a `try_` form returning one of the error types re-exported here, and
//! a panicking form for when failure is a bug. [`CollectionError`] combines all of them, so that
//! they can be propagated together with `?`.

#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;

#[doc(inline)]
pub use crate::util::error::{
    CollectionError, EmptyCollection, IndexOutOfBounds, InvalidSize, ValueNotFound,
};
