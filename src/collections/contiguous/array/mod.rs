//! A module containing [`FixedArray`] and associated types.
//!
//! The only other included type is [`IntoIter`] for owned iteration over a FixedArray.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration, so a fresh iterator always starts from index 0.
//!
//! [`FixedArray`] is also re-exported under the parent module.

mod array;
mod iter;
mod tests;

pub use array::*;
pub use iter::*;
