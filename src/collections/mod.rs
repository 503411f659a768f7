//! General-purpose collection types.
//!
//! # Purpose
//! The collections here decide membership with a caller-supplied function instead of the element
//! type's own equality. This suits values that carry an identifier (a database id, a slug) but
//! whose other fields vary, where two copies of the same record should only be stored once.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
