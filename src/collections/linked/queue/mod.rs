//! A module containing [`LinkedQueue`] and its iterators.

mod iter;
mod linked_queue;
mod tests;

pub use iter::*;
pub use linked_queue::*;
