//! A module containing [`DynamicArray`] and associated types.
//!
//! Currently, the only other included type is [`IntoIter`] for owned iteration over a DynamicArray,
//! which is a re-export of [`array::IntoIter`](super::array::IntoIter).
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;
mod iter;

pub use dynamic_array::*;
pub use iter::*;
