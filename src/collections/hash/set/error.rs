use derive_more::{Display, Error, From, IsVariant};

#[doc(inline)]
pub use crate::util::error::CapacityOverflow;

/// A [`HashSetBuilder`](super::HashSetBuilder) was built without a hash function, which is the
/// only way a set knows what makes two values the same.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("a hash function must be specified to create a HashSet")]
pub struct MissingHashFn;

/// Errors raised while validating the configuration of a family of sets.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum ConfigError {
    MissingHashFn(MissingHashFn),
    CapacityOverflow(CapacityOverflow),
}
