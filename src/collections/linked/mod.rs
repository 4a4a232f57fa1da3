//! Collections built from singly linked nodes: [`LinkedStack`] and [`LinkedQueue`]. Both share
//! the same node type and chain iterator, and track their length as a [`NonZero`] while they
//! hold any items.
//!
//! [`NonZero`]: std::num::NonZero

pub mod iter;
pub(crate) mod length;
pub(crate) mod node;
pub mod queue;
pub mod stack;

#[doc(inline)]
pub use iter::ChainIter;
#[doc(inline)]
pub use queue::LinkedQueue;
#[doc(inline)]
pub use stack::LinkedStack;
