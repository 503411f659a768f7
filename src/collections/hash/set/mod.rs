//! A module containing [`HashSet`] and associated types.
//!
//! A [`HashSet`] here decides uniqueness with a hash function supplied when it's created, rather
//! than with the [`Hash`](std::hash::Hash) and [`Eq`] implementations of its elements. The
//! function projects each element to a key, and elements with equal keys are the same as far as
//! the set is concerned. Elements are kept in the order their keys were first inserted.
//!
//! Sets sharing a hash function form a family. [`HashSetFactory`] creates members of a family and
//! [`HashSetBuilder`] validates the configuration of one.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating them in
//! place could change their keys.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod builder;
mod error;
mod hash_set;
mod index;
mod iter;
mod slots;
#[cfg(feature = "traits")]
mod ops;


pub use builder::*;
pub use error::*;
pub use hash_set::*;
pub use iter::*;
