//! Binary tree building blocks. At the moment, this is only the [`BstNode`] record that a binary
//! search tree would be built from.

pub mod node;
mod tests;

#[doc(inline)]
pub use node::BstNode;
