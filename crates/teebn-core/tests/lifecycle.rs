//! Allocation-tracking lifecycle tests.
//!
//! A counting global allocator verifies that every create/drop pair, and
//! every failing create, returns the process to its starting allocation
//! balance. Kept as a single test so no other test's allocations race the
//! counter.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicIsize, Ordering};

use teebn_core::{fill_random_bytes, BigNumCtx, NativeBackend, PrimeGenCtx};

struct CountingAlloc;

static OUTSTANDING: AtomicIsize = AtomicIsize::new(0);

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        OUTSTANDING.fetch_add(layout.size() as isize, Ordering::SeqCst);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        OUTSTANDING.fetch_sub(layout.size() as isize, Ordering::SeqCst);
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOC: CountingAlloc = CountingAlloc;

fn outstanding() -> isize {
    OUTSTANDING.load(Ordering::SeqCst)
}

#[test]
fn lifecycle_is_allocation_neutral() {
    let backend = NativeBackend;

    // Warm up any one-time allocations (randomness source, test harness).
    let mut warmup = [0u8; 16];
    fill_random_bytes(&backend, &mut warmup).unwrap();

    // Create-then-drop across a range of sizes.
    let before = outstanding();
    for byte_len in [4usize, 8, 32, 128, 256, 1024] {
        let bn = BigNumCtx::create(&backend, None, byte_len).unwrap();
        assert_eq!(bn.byte_len(), byte_len);
        drop(bn);
    }
    assert_eq!(outstanding(), before, "create/drop leaked");

    // Create with import, read back, drop.
    let before = outstanding();
    {
        let value = vec![0x5Au8; 64];
        let bn = BigNumCtx::create(&backend, Some(&value), 64).unwrap();
        assert_eq!(bn.to_value_bytes(&backend).unwrap(), value);
    }
    assert_eq!(outstanding(), before, "import/export leaked");

    // Failing creates must not leave anything behind.
    let before = outstanding();
    assert!(BigNumCtx::create(&backend, None, 0).is_err());
    assert!(BigNumCtx::create(&backend, None, 7).is_err());
    let short = [0u8; 3];
    assert!(BigNumCtx::create(&backend, Some(&short), 16).is_err());
    assert!(PrimeGenCtx::create(&backend, 0).is_err());
    assert_eq!(outstanding(), before, "failing create leaked");

    // Prime contexts.
    let before = outstanding();
    for bits in [64usize, 512, 2048] {
        let pg = PrimeGenCtx::create(&backend, bits).unwrap();
        assert_eq!(pg.max_bits(), bits);
        drop(pg);
    }
    assert_eq!(outstanding(), before, "prime create/drop leaked");

    // The entropy path allocates and releases its own generator context.
    let before = outstanding();
    let mut buf = [0u8; 48];
    fill_random_bytes(&backend, &mut buf).unwrap();
    assert_eq!(outstanding(), before, "entropy generator context leaked");
}
