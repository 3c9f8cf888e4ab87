use std::fmt;

use crate::block::Block;

/// Owned copy of the allocator state taken at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
  blocks: Vec<Block>,
  reserved: usize,
  capacity: usize,
}

impl Snapshot {
  pub(crate) fn new(
    blocks: Vec<Block>,
    reserved: usize,
    capacity: usize,
  ) -> Self {
    Self {
      blocks,
      reserved,
      capacity,
    }
  }

  pub fn blocks(&self) -> &[Block] {
    &self.blocks
  }

  pub fn reserved(&self) -> usize {
    self.reserved
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn used_blocks(&self) -> impl Iterator<Item = &Block> {
    self.blocks.iter().filter(|block| block.is_used())
  }

  pub fn available(&self) -> usize {
    self.capacity.saturating_sub(self.reserved)
  }
}

impl fmt::Display for Snapshot {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    writeln!(f, "Current memory usage:")?;

    for block in &self.blocks {
      writeln!(
        f,
        "Block of size {} at address {}. Status: {}.",
        block.size(),
        block.address(),
        if block.is_used() { "used" } else { "free" }
      )?;
    }

    write!(
      f,
      "Total memory reserved: {} of {}.",
      self.reserved, self.capacity
    )
  }
}

#[cfg(test)]
mod tests {
  use super::Snapshot;
  use crate::{SegmentAllocator, block::Block};

  #[test]
  fn test_report() {
    let mut allocator = SegmentAllocator::default();
    allocator.allocate(100).unwrap();
    allocator.allocate(200).unwrap();

    let expected = "\
Current memory usage:
Block of size 100 at address 0. Status: used.
Block of size 200 at address 100. Status: used.
Total memory reserved: 300 of 500.";

    assert_eq!(allocator.snapshot().to_string(), expected);
  }

  #[test]
  fn test_empty_report() {
    let snapshot = SegmentAllocator::new(64).snapshot();

    assert_eq!(snapshot.available(), 64);
    assert_eq!(snapshot.used_blocks().count(), 0);
    assert_eq!(
      snapshot.to_string(),
      "Current memory usage:\nTotal memory reserved: 0 of 64."
    );
  }

  #[test]
  fn test_snapshot_is_detached() {
    let mut allocator = SegmentAllocator::default();
    allocator.allocate(100).unwrap();

    let snapshot = allocator.snapshot();
    allocator.free(0).unwrap();

    assert_eq!(snapshot.blocks().len(), 1);
    assert_eq!(snapshot.reserved(), 100);
    assert!(allocator.is_empty());
  }

  #[test]
  fn test_available_never_underflows() {
    let snapshot = Snapshot::new(vec![Block::new(80, 0)], 80, 50);

    assert_eq!(snapshot.available(), 0);
    assert_eq!(snapshot.capacity(), 50);
  }
}
