use log::{debug, trace, warn};

use crate::{block::Block, error::AllocError, report::Snapshot};

/// Capacity of the reference segment.
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Clone)]
pub struct SegmentAllocator {
  capacity: usize,
  reserved: usize,
  blocks: Vec<Block>,
}

/// Outcome of a successful [`SegmentAllocator::free`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Released {
  block: Block,
  before_compaction: Snapshot,
}

impl Released {
  /// The freed block, carrying the address it had before compaction.
  pub fn block(&self) -> Block {
    self.block
  }

  /// Segment state with the freed block still listed as a hole.
  pub fn before_compaction(&self) -> &Snapshot {
    &self.before_compaction
  }
}

impl Default for SegmentAllocator {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}

impl SegmentAllocator {
  pub fn new(capacity: usize) -> Self {
    Self {
      capacity,
      reserved: 0,
      blocks: Vec::new(),
    }
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Sum of the sizes of every used block.
  pub fn reserved(&self) -> usize {
    self.reserved
  }

  /// Remaining declared capacity. Not necessarily contiguous.
  pub fn available(&self) -> usize {
    self.capacity - self.reserved
  }

  pub fn blocks(&self) -> &[Block] {
    &self.blocks
  }

  pub fn len(&self) -> usize {
    self.blocks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.blocks.is_empty()
  }

  /// Returns the used block starting at `address`, if any.
  pub fn lookup(
    &self,
    address: usize,
  ) -> Option<&Block> {
    self
      .blocks
      .iter()
      .find(|block| block.used && block.address == address)
  }

  pub fn snapshot(&self) -> Snapshot {
    Snapshot::new(self.blocks.clone(), self.reserved, self.capacity)
  }

  /// First free hole wins, whatever its size. Without holes the block goes
  /// right after the last one in the list, provided that still lies inside
  /// the segment.
  fn find_available_address(&self) -> Option<usize> {
    if let Some(hole) = self.blocks.iter().find(|block| !block.used) {
      trace!("reusing hole of {} at {}", hole.size, hole.address);
      return Some(hole.address);
    }

    let address = self.blocks.last().map_or(0, Block::end);
    trace!("append address {} (capacity {})", address, self.capacity);

    (address < self.capacity).then_some(address)
  }

  pub fn allocate(
    &mut self,
    size: usize,
  ) -> Result<usize, AllocError> {
    if size == 0 || size > self.available() {
      let err = AllocError::InvalidSize {
        size,
        available: self.available(),
      };
      warn!("allocation failed: {}", err);
      return Err(err);
    }

    let Some(address) = self.find_available_address() else {
      let err = AllocError::NoSpaceAvailable { size };
      warn!("allocation failed: {}", err);
      return Err(err);
    };

    self.blocks.push(Block::new(size, address));
    self.reserved += size;

    debug!(
      "allocated {} at {}, reserved = {}/{}",
      size, address, self.reserved, self.capacity
    );

    Ok(address)
  }

  /// Releases the used block at `address` and compacts the segment.
  ///
  /// Compaction may slide a later block down to `address`, so freeing the
  /// same address twice can succeed twice.
  pub fn free(
    &mut self,
    address: usize,
  ) -> Result<Released, AllocError> {
    let Some(block) = self
      .blocks
      .iter_mut()
      .find(|block| block.used && block.address == address)
    else {
      let err = AllocError::BlockNotFound { address };
      warn!("free failed: {}", err);
      return Err(err);
    };

    block.used = false;
    let released = *block;
    self.reserved -= released.size;

    debug!(
      "freed {} at {}, reserved = {}/{}",
      released.size, released.address, self.reserved, self.capacity
    );

    let before_compaction = self.snapshot();
    self.compact();

    Ok(Released {
      block: released,
      before_compaction,
    })
  }

  /// Drops every hole and renumbers the surviving blocks from address 0 in
  /// list order.
  pub fn compact(&mut self) {
    let before = self.blocks.len();
    self.blocks.retain(|block| block.used);

    let mut address = 0;
    for block in self.blocks.iter_mut() {
      block.address = address;
      address += block.size;
    }

    debug!(
      "compacted: {} hole(s) dropped, {} block(s) kept",
      before - self.blocks.len(),
      self.blocks.len()
    );
  }

  /// Forgets every block. The capacity is kept.
  pub fn reset(&mut self) {
    self.blocks.clear();
    self.reserved = 0;
    debug!("reset segment of {}", self.capacity);
  }
}
