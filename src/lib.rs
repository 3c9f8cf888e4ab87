//! # segalloc - A Bounded Segment Allocator
//!
//! This crate simulates a single fixed-capacity memory segment in which
//! variable-size blocks are allocated, freed and compacted. Addresses are plain
//! offsets into the segment; no real memory is touched.
//!
//! ## Overview
//!
//! ```text
//!   Segment (capacity = 500):
//!
//!   0         100                 300           450        500
//!   ┌─────────┬───────────────────┬─────────────┬──────────┐
//!   │  B0     │       B1          │     B2      │   free   │
//!   │ size 100│     size 200      │  size 150   │          │
//!   └─────────┴───────────────────┴─────────────┴──────────┘
//!                                               ▲
//!                                               └── next append address
//!
//!   reserved = 450, available = 50
//! ```
//!
//! Allocation first looks for a hole (a freed block still in the list) and
//! hands out its address. Without holes the new block is appended right
//! after the last block, as long as that address lies inside the segment.
//!
//! Every successful free compacts the segment at once:
//!
//! ```text
//!   free(100):
//!
//!   ┌─────────┬ ─ ─ ─ ─ ─ ─ ─ ─ ─ ┬─────────────┬──────────┐
//!   │  B0     │      (hole)       │     B2      │   free   │
//!   └─────────┴ ─ ─ ─ ─ ─ ─ ─ ─ ─ ┴─────────────┴──────────┘
//!
//!   compact:
//!
//!   0         100           250                            500
//!   ┌─────────┬─────────────┬──────────────────────────────┐
//!   │  B0     │     B2      │            free              │
//!   └─────────┴─────────────┴──────────────────────────────┘
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   segalloc
//!   ├── block      - Block (size, address, used flag)
//!   ├── error      - AllocError
//!   ├── report     - Snapshot and its textual report
//!   └── segment    - SegmentAllocator implementation
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use segalloc::{AllocError, SegmentAllocator};
//!
//! let mut allocator = SegmentAllocator::new(500);
//!
//! assert_eq!(allocator.allocate(100), Ok(0));
//! assert_eq!(allocator.allocate(200), Ok(100));
//!
//! allocator.free(0).unwrap();
//! assert_eq!(allocator.lookup(0).map(|block| block.size()), Some(200));
//!
//! assert_eq!(
//!   allocator.free(100),
//!   Err(AllocError::BlockNotFound { address: 100 })
//! );
//!
//! println!("{}", allocator.snapshot());
//! ```
//!
//! ## Limitations
//!
//! - **Single segment**: one allocator manages exactly one address space
//! - **First-fit only**: a reused hole is not checked against the requested size
//! - **No alignment**: blocks are packed back to back
//! - **Single-threaded**: wrap the allocator in one lock if it must be shared
//!
//! ## Logging
//!
//! Operations are logged through the [`log`] facade. The crate never installs a
//! logger; the `segment` demo uses `env_logger`, so `RUST_LOG=segalloc=debug`
//! shows every allocation, free and compaction.

mod block;
mod error;
mod report;
mod segment;

pub use block::Block;
pub use error::AllocError;
pub use report::Snapshot;
pub use segment::{DEFAULT_CAPACITY, Released, SegmentAllocator};
