#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
  pub(crate) size: usize,
  pub(crate) address: usize,
  pub(crate) used: bool,
}

impl Block {
  pub(crate) fn new(
    size: usize,
    address: usize,
  ) -> Self {
    Self {
      size,
      address,
      used: true,
    }
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn address(&self) -> usize {
    self.address
  }

  pub fn is_used(&self) -> bool {
    self.used
  }

  /// First address past the end of the block.
  pub fn end(&self) -> usize {
    self.address + self.size
  }
}
