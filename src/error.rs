use thiserror::Error;

/// Failures reported by [`SegmentAllocator`](crate::SegmentAllocator).
///
/// None of them is fatal: a failed call leaves the allocator untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
  /// The size is zero or larger than the remaining declared capacity.
  #[error("invalid allocation size {size} (available: {available})")]
  InvalidSize { size: usize, available: usize },

  /// The size fits the declared capacity, but the address search found nothing.
  #[error("no free address for a block of {size}")]
  NoSpaceAvailable { size: usize },

  #[error("no used block at address {address}")]
  BlockNotFound { address: usize },
}
