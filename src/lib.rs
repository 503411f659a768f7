//! Collections that decide membership with a function of their elements.
//!
//! # Purpose
//! The standard library's sets compare elements with their own [`Hash`](std::hash::Hash) and
//! [`Eq`] implementations. That falls apart for records that carry an identifier but differ in
//! their other fields, such as two copies of the same book fetched at different times. The
//! [`HashSet`](collections::hash::HashSet) in this crate is instead given a hash function when
//! it's created, which projects each element to a key. Elements with equal keys are the same
//! element as far as the set is concerned, and the first one added wins.
//!
//! ```
//! use keyed_set::collections::hash::HashSet;
//!
//! #[derive(Debug, PartialEq)]
//! struct Book {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let mut books = HashSet::new(|book: &Book| book.id);
//! books
//!     .add(Book { id: 1, name: "a" })
//!     .add(Book { id: 2, name: "b" })
//!     .add(Book { id: 1, name: "c" });
//!
//! assert_eq!(books.len(), 2);
//! assert_eq!(books.first(), Some(&Book { id: 1, name: "a" }));
//! ```
//!
//! # Method
//! Elements live in an arena of slots linked together in insertion order, and an open-addressing
//! index maps the hash of each key to its slot. Removal unlinks the slot and recycles it, so
//! iteration never has to skip over gaps and always follows insertion order.
//!
//! # Error Handling
//! Almost nothing here can fail. The one exception is configuration:
//! [`HashSetBuilder`](collections::hash::set::HashSetBuilder) checks that a hash function was
//! provided and that the requested capacity can be indexed, reporting a strongly typed
//! [`ConfigError`](collections::hash::set::ConfigError) otherwise. Infallible constructors that
//! accept a capacity panic instead, as documented on each of them.
//!
//! When this crate employs errors via [`Result`]s, it does so with enums for static dispatch,
//! wrapping structs that implement [`Error`](std::error::Error).
//!
//! # Features
//! - `hash`: [`HashSet`](collections::hash::HashSet) and its companions.
//! - `traits`: the [`Set`](collections::traits::Set) trait, providing set algebra, along with
//!   operators (`|`, `&`, `^` and `-`) between HashSets.
//! - `collections-all` (default): all of the above.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
