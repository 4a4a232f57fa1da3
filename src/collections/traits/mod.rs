//! Traits shared between collection types. Currently this is only [`Collection`], the contract
//! implemented by node-based collections.

pub mod collection;

#[doc(inline)]
pub use collection::Collection;
