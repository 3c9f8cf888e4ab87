use std::env;

use segalloc::{DEFAULT_CAPACITY, SegmentAllocator};

/// Allocates `size` and prints the outcome. The segment state follows a
/// successful allocation only.
fn allocate(
  allocator: &mut SegmentAllocator,
  size: usize,
) {
  match allocator.allocate(size) {
    Ok(address) => {
      println!("Allocated a block of {} at address {}.", size, address);
      println!("{}\n", allocator.snapshot());
    }
    Err(err) => println!("Allocation of {} failed: {}.", size, err),
  }
}

/// Frees the block at `address` and prints the outcome. On success the state
/// is printed as it was before compaction, with the freed block still listed.
fn free(
  allocator: &mut SegmentAllocator,
  address: usize,
) {
  match allocator.free(address) {
    Ok(released) => {
      let block = released.block();
      println!(
        "Freed the block of {} at address {}.",
        block.size(),
        block.address()
      );
      println!("{}\n", released.before_compaction());
    }
    Err(err) => println!("Free of address {} failed: {}.", address, err),
  }
}

fn main() {
  env_logger::init();

  // Optional first argument overrides the segment capacity.
  let capacity = match env::args().nth(1) {
    Some(arg) => match arg.parse() {
      Ok(capacity) => capacity,
      Err(err) => {
        eprintln!("invalid capacity {:?}: {}", arg, err);
        std::process::exit(2);
      }
    },
    None => DEFAULT_CAPACITY,
  };

  let mut allocator = SegmentAllocator::new(capacity);

  // --------------------------------------------------------------------
  // 1) Fill the segment. With the default capacity the 300 and 250
  //    requests exceed what is left and are rejected.
  // --------------------------------------------------------------------
  for size in [100, 200, 150, 300, 250] {
    allocate(&mut allocator, size);
  }

  // --------------------------------------------------------------------
  // 2) Free by address. Neither 200 nor 800 starts a block; 300 releases
  //    the third block and compacts the segment.
  // --------------------------------------------------------------------
  for address in [200, 800, 300] {
    free(&mut allocator, address);
  }

  // --------------------------------------------------------------------
  // 3) Requests larger than the remaining capacity are all rejected.
  // --------------------------------------------------------------------
  for size in [1200, 600, 600, 600] {
    allocate(&mut allocator, size);
  }

  println!("Final state:");
  println!("{}", allocator.snapshot());
}
