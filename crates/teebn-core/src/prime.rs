//! Prime-generation context lifecycle.
//!
//! A [`PrimeGenCtx`] owns the opaque search state an external prime-search
//! routine works in, sized from the maximum candidate width. It follows the
//! same wipe-before-release discipline as [`BigNumCtx`](crate::BigNumCtx):
//! the search state ends up holding prime candidates.

use teebn_types::CoreError;

use crate::provider::NumBackend;
use crate::secmem::secure_zero;

/// Opaque prime-search context for candidates of up to a fixed bit width.
pub struct PrimeGenCtx {
    ctx: Vec<u8>,
    max_bits: usize,
}

impl PrimeGenCtx {
    /// Create a prime-search context for candidates of up to `max_bits`
    /// bits.
    ///
    /// `max_bits` must be positive. An initialization fault wipes and
    /// releases the buffer before the error returns.
    pub fn create(backend: &dyn NumBackend, max_bits: usize) -> Result<Self, CoreError> {
        if max_bits == 0 {
            return Err(CoreError::InvalidArg);
        }

        let ctx_size = backend.prime_ctx_size(max_bits)?;
        let mut ctx = Vec::new();
        ctx.try_reserve_exact(ctx_size)
            .map_err(|_| CoreError::OutOfMemory)?;
        ctx.resize(ctx_size, 0);

        let mut pg = PrimeGenCtx { ctx, max_bits };
        backend.prime_init(&mut pg.ctx, max_bits)?;
        Ok(pg)
    }

    /// Maximum candidate width in bits, as recorded at creation.
    pub fn max_bits(&self) -> usize {
        self.max_bits
    }

    /// Total size of the backend context, bookkeeping included.
    pub fn ctx_len(&self) -> usize {
        self.ctx.len()
    }

    /// Raw context, for handing to external prime-search routines.
    pub fn as_slice(&self) -> &[u8] {
        &self.ctx
    }

    /// Mutable raw context, for handing to external prime-search routines.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.ctx
    }
}

impl Drop for PrimeGenCtx {
    fn drop(&mut self) {
        secure_zero(&mut self.ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::NativeBackend;
    use teebn_types::BackendStatus;

    #[test]
    fn test_create_rejects_zero_bits() {
        let backend = NativeBackend;
        let result = PrimeGenCtx::create(&backend, 0);
        assert_eq!(result.err(), Some(CoreError::InvalidArg));
    }

    #[test]
    fn test_create_2048() {
        let backend = NativeBackend;
        let pg = PrimeGenCtx::create(&backend, 2048).unwrap();
        assert_eq!(pg.max_bits(), 2048);
        assert!(pg.ctx_len() >= 2048 / 8);
    }

    #[test]
    fn test_create_small_widths() {
        let backend = NativeBackend;
        for bits in [1, 8, 31, 256, 4096] {
            let pg = PrimeGenCtx::create(&backend, bits).unwrap();
            assert_eq!(pg.max_bits(), bits);
        }
    }

    /// Backend double whose prime initialization always faults.
    struct PrimeInitFault;

    impl NumBackend for PrimeInitFault {
        fn bn_ctx_size(&self, words: usize) -> Result<usize, BackendStatus> {
            NativeBackend.bn_ctx_size(words)
        }
        fn bn_init(&self, ctx: &mut [u8], words: usize) -> Result<(), BackendStatus> {
            NativeBackend.bn_init(ctx, words)
        }
        fn bn_set(&self, ctx: &mut [u8], value: &[u8]) -> Result<(), BackendStatus> {
            NativeBackend.bn_set(ctx, value)
        }
        fn bn_get(&self, ctx: &[u8], out: &mut [u8]) -> Result<(), BackendStatus> {
            NativeBackend.bn_get(ctx, out)
        }
        fn prime_ctx_size(&self, max_bits: usize) -> Result<usize, BackendStatus> {
            NativeBackend.prime_ctx_size(max_bits)
        }
        fn prime_init(&self, _ctx: &mut [u8], _max_bits: usize) -> Result<(), BackendStatus> {
            Err(BackendStatus::NotSupported)
        }
        fn prng_ctx_size(&self) -> Result<usize, BackendStatus> {
            NativeBackend.prng_ctx_size()
        }
        fn prng_init(&self, ctx: &mut [u8], seed_bits: usize) -> Result<(), BackendStatus> {
            NativeBackend.prng_init(ctx, seed_bits)
        }
        fn prng_fill(
            &self,
            ctx: &mut [u8],
            out: &mut [u8],
            bits: usize,
        ) -> Result<(), BackendStatus> {
            NativeBackend.prng_fill(ctx, out, bits)
        }
    }

    #[test]
    fn test_init_fault_is_translated() {
        let backend = PrimeInitFault;
        let result = PrimeGenCtx::create(&backend, 512);
        assert_eq!(result.err(), Some(CoreError::Unexpected));
    }
}
