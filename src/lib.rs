//! This crate is a set of linear collections, written from the allocation up.
//!
//! # Purpose
//! This crate is a learning project, with no expectation for it to be used in production. Each
//! structure is built on the one below it: [`FixedArray`](collections::contiguous::FixedArray)
//! owns a raw allocation, [`DynamicArray`](collections::contiguous::DynamicArray) grows by swapping
//! in larger FixedArrays, and the linked [`LinkedStack`](collections::linked::LinkedStack) and
//! [`LinkedQueue`](collections::linked::LinkedQueue) manage their own heap nodes.
//!
//! # Error Handling
//! Most operations that can fail come in two forms. The `try_` form returns a [`Result`] with a
//! strongly typed error, such as
//! [`IndexOutOfBounds`](collections::IndexOutOfBounds) or
//! [`EmptyCollection`](collections::EmptyCollection). The plain form panics with the same error's
//! message, which is more ergonomic when a failure could only be caused by a bug in the caller.
//! Capacity overflow always panics, because handling it on every append isn't worth it.
//!
//! All of the error types are structs implementing [`Error`](std::error::Error), and can be
//! converted into the [`CollectionError`](collections::CollectionError) enum for static dispatch.
//!
//! # Logging
//! With the `log` feature enabled (the default), the collections report internal events such as
//! a [`DynamicArray`](collections::contiguous::DynamicArray) resizing through the [`log`] facade at
//! the trace level. No logger is installed by this crate.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] at all, contiguous storage comes straight from the global
//! allocator. It depends on some derive macros because they remove the need for some very
//! repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
