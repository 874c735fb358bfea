//! Big-number context lifecycle.
//!
//! A [`BigNumCtx`] owns the opaque backend context for one non-negative
//! arbitrary-precision integer. The handle records its logical byte length
//! at creation, and the whole context is overwritten through the barrier
//! clear before its memory is released, so key material never survives in a
//! freed allocation.

use teebn_types::CoreError;

use crate::provider::{NumBackend, WORD_SIZE};
use crate::secmem::secure_zero;

/// Opaque big-number context.
///
/// Exclusively owned by one execution context from creation to drop; not
/// meant for concurrent access.
pub struct BigNumCtx {
    ctx: Vec<u8>,
    byte_len: usize,
}

impl BigNumCtx {
    /// Create a context for a `byte_len`-byte non-negative integer,
    /// optionally importing an initial value.
    ///
    /// `byte_len` must be a positive multiple of [`WORD_SIZE`], and a
    /// supplied value must be exactly `byte_len` bytes. Any failure after
    /// the context buffer is allocated wipes and releases it before the
    /// error returns; a handle is never observable half-initialized.
    pub fn create(
        backend: &dyn NumBackend,
        initial: Option<&[u8]>,
        byte_len: usize,
    ) -> Result<Self, CoreError> {
        if byte_len == 0 || byte_len % WORD_SIZE != 0 {
            return Err(CoreError::InvalidArg);
        }
        if let Some(value) = initial {
            if value.len() != byte_len {
                return Err(CoreError::InvalidArg);
            }
        }
        let words = byte_len / WORD_SIZE;

        // Sizing faults are not transient; surface them without retry.
        let ctx_size = backend.bn_ctx_size(words)?;
        if ctx_size < byte_len {
            // The context must at least hold the value bytes.
            return Err(CoreError::Unexpected);
        }

        let mut ctx = Vec::new();
        ctx.try_reserve_exact(ctx_size)
            .map_err(|_| CoreError::OutOfMemory)?;
        ctx.resize(ctx_size, 0);

        // From here the handle owns the buffer, so the early returns below
        // run the wipe-then-release drop path.
        let mut bn = BigNumCtx { ctx, byte_len };
        backend.bn_init(&mut bn.ctx, words)?;
        if let Some(value) = initial {
            backend.bn_set(&mut bn.ctx, value)?;
        }
        Ok(bn)
    }

    /// Logical size of the held integer in bytes, as recorded at creation.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Number of backend words backing the integer.
    pub fn word_count(&self) -> usize {
        self.byte_len / WORD_SIZE
    }

    /// Total size of the backend context, bookkeeping included.
    pub fn ctx_len(&self) -> usize {
        self.ctx.len()
    }

    /// Raw context, for handing to external numeric routines.
    pub fn as_slice(&self) -> &[u8] {
        &self.ctx
    }

    /// Mutable raw context, for handing to external numeric routines.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.ctx
    }

    /// Read the current value back out as `byte_len` bytes.
    pub fn to_value_bytes(&self, backend: &dyn NumBackend) -> Result<Vec<u8>, CoreError> {
        let mut out = vec![0u8; self.byte_len];
        backend.bn_get(&self.ctx, &mut out)?;
        Ok(out)
    }

    /// Overwrite the whole context with zeros through the barrier clear.
    fn wipe(&mut self) {
        secure_zero(&mut self.ctx);
    }
}

impl Drop for BigNumCtx {
    // Clear before release, never release-then-clear.
    fn drop(&mut self) {
        self.wipe();
    }
}
