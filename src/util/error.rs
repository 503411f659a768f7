use derive_more::{Display, Error};

/// The requested capacity can't be backed by a bucket array, either because the bucket count
/// overflows [`usize`] or because the allocation would exceed `isize::MAX` bytes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("capacity overflow: {cap} elements can't be indexed")]
pub struct CapacityOverflow {
    pub cap: usize,
}
