//! A module containing [`FixedArray2D`], a grid of [`FixedArray`](super::FixedArray) rows.
//!
//! [`FixedArray2D`] is also re-exported under the parent module.

mod array_2d;
mod tests;

pub use array_2d::*;
