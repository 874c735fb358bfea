//! Secure memory utilities: non-elidable fills and constant-time comparison.
//!
//! A clear that the optimizer can prove dead is a disclosure bug, so every
//! fill here goes through volatile stores followed by a compiler fence (the
//! same barrier `zeroize` builds on). Secret comparison runs in constant
//! time: total work and control flow do not depend on where, or whether,
//! the inputs differ.

use core::ptr;
use core::sync::atomic::{compiler_fence, Ordering};

use subtle::{Choice, ConstantTimeEq};
use teebn_types::CoreError;
use zeroize::Zeroize;

/// Fill the first `count` bytes of `buf` with `fill`, without risk of
/// elision.
///
/// If `count` exceeds the buffer, exactly `buf.len()` bytes are filled and
/// `Overflow` is returned. The clamped fill still happens, so a caller that
/// ignores the status never ends up with an unclear buffer.
pub fn secure_fill(buf: &mut [u8], fill: u8, count: usize) -> Result<(), CoreError> {
    let n = count.min(buf.len());
    for byte in &mut buf[..n] {
        // Volatile stores are not candidates for dead-store elimination.
        unsafe { ptr::write_volatile(byte, fill) };
    }
    compiler_fence(Ordering::SeqCst);
    if count > buf.len() {
        Err(CoreError::Overflow)
    } else {
        Ok(())
    }
}

/// Clear the whole buffer. Infallible form used on every release path.
pub fn secure_zero(buf: &mut [u8]) {
    buf.zeroize();
}

/// Constant-time byte equality.
///
/// Equal-length slices are compared by OR-accumulating the XOR of each byte
/// pair and mapping the accumulator to a [`Choice`] without a
/// compiler-visible boolean branch. Empty slices compare equal. Slice
/// lengths are public, so a length mismatch may return early.
pub fn ct_bytes_eq(a: &[u8], b: &[u8]) -> Choice {
    if a.len() != b.len() {
        return Choice::from(0u8);
    }
    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }
    acc.ct_eq(&0u8)
}
