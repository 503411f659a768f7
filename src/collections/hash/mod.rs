//! Collections whose membership is decided by hashing.

pub mod set;

#[doc(inline)]
pub use set::HashSet;
