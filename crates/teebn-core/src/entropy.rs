//! Hardware-backed random byte generation.
//!
//! Each request sizes, allocates, seeds, and discards its own generator
//! context, so independent call frames never share state and the path is
//! reentrant. The context is cleared before its memory is released, on
//! success and on failure alike.

use teebn_types::{BackendStatus, CoreError};

use crate::native::NativeBackend;
use crate::provider::NumBackend;
use crate::secmem::secure_zero;

/// Fill `buf` with cryptographically strong random bytes.
///
/// Either the whole buffer is populated or an error is returned and the
/// contents carry no guarantee. Backend faults are translated into the core
/// taxonomy: no-memory conditions map to `OutOfMemory`, argument and size
/// faults to `InvalidArg`, anything else to `Unexpected`. The generator is
/// not assumed to retry on failure.
pub fn fill_random_bytes(backend: &dyn NumBackend, buf: &mut [u8]) -> Result<(), CoreError> {
    if buf.is_empty() {
        return Err(CoreError::InvalidArg);
    }
    // The generator is bit-oriented; the bit count must be representable.
    let bits = buf.len().checked_mul(8).ok_or(CoreError::InvalidArg)?;

    let ctx_size = backend.prng_ctx_size()?;
    let mut ctx = Vec::new();
    ctx.try_reserve_exact(ctx_size)
        .map_err(|_| CoreError::OutOfMemory)?;
    ctx.resize(ctx_size, 0);

    let result = backend
        .prng_init(&mut ctx, bits)
        .and_then(|()| backend.prng_fill(&mut ctx, buf, bits));

    // Generator state may be related to the bytes just produced: clear it
    // before the allocation is returned, on every path.
    secure_zero(&mut ctx);

    result.map_err(CoreError::from)
}

/// Randomness callback for the backend's generator abstraction.
///
/// Matches [`BnRandFn`](crate::provider::BnRandFn). The backend side is
/// bit-granular while this source is byte-granular: a `bit_count` that is
/// not a multiple of 8, or that disagrees with the buffer length, is
/// rejected with `Size`. Any downstream failure collapses to the generic
/// `Failed` status.
pub fn bn_rand_source(buf: &mut [u8], bit_count: usize) -> Result<(), BackendStatus> {
    if bit_count % 8 != 0 {
        return Err(BackendStatus::Size);
    }
    if bit_count / 8 != buf.len() {
        return Err(BackendStatus::Size);
    }
    fill_random_bytes(&NativeBackend, buf).map_err(|_| BackendStatus::Failed)
}
