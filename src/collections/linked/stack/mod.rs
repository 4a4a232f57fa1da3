//! A module containing [`LinkedStack`] and its iterators.

mod iter;
mod linked_stack;
mod tests;

pub use iter::*;
pub use linked_stack::*;
