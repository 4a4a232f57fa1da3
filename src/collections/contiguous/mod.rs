//! Contiguous collection types. [`FixedArray`] and [`FixedArray2D`] have a size fixed at
//! construction, while [`DynamicArray`] grows as elements are added.
#![warn(missing_docs)]

pub mod array;
pub mod array_2d;
pub mod dynamic_array;

#[doc(inline)]
pub use array::FixedArray;
#[doc(inline)]
pub use array_2d::FixedArray2D;
#[doc(inline)]
pub use dynamic_array::DynamicArray;
