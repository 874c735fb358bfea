//! Built-in numeric backend.
//!
//! Contexts are raw byte buffers laid out as an 8-byte header (a magic tag
//! plus the word or bit count) followed by word data, keeping the
//! size-query / caller-allocates / init-partitions shape of the C numeric
//! libraries.
//! Generator output comes from the platform's trusted randomness source via
//! `getrandom` (RDRAND inside an enclave, `getentropy` elsewhere).

use teebn_types::BackendStatus;

use crate::provider::{NumBackend, WORD_SIZE};

const HEADER_LEN: usize = 8;

const BN_MAGIC: u32 = 0x5442_4e31; // "TBN1"
const PRIME_MAGIC: u32 = 0x5450_4731; // "TPG1"
const PRNG_MAGIC: u32 = 0x5452_4731; // "TRG1"

/// Generator state past the header: a 64-bit counter of bytes produced.
const PRNG_STATE_LEN: usize = 8;

/// The built-in [`NumBackend`]. Stateless; all state lives in the context
/// buffers callers own.
pub struct NativeBackend;

fn write_header(ctx: &mut [u8], magic: u32, count: u32) {
    ctx[..4].copy_from_slice(&magic.to_le_bytes());
    ctx[4..8].copy_from_slice(&count.to_le_bytes());
}

/// Validate the header tag and return the recorded count.
fn check_header(ctx: &[u8], magic: u32) -> Result<u32, BackendStatus> {
    if ctx.len() < HEADER_LEN {
        return Err(BackendStatus::Length);
    }
    let tag = u32::from_le_bytes([ctx[0], ctx[1], ctx[2], ctx[3]]);
    if tag != magic {
        return Err(BackendStatus::BadArg);
    }
    Ok(u32::from_le_bytes([ctx[4], ctx[5], ctx[6], ctx[7]]))
}

impl NumBackend for NativeBackend {
    fn bn_ctx_size(&self, words: usize) -> Result<usize, BackendStatus> {
        if words == 0 {
            return Err(BackendStatus::BadArg);
        }
        if words > u32::MAX as usize {
            return Err(BackendStatus::Size);
        }
        words
            .checked_mul(WORD_SIZE)
            .and_then(|data| data.checked_add(HEADER_LEN))
            .ok_or(BackendStatus::Size)
    }

    fn bn_init(&self, ctx: &mut [u8], words: usize) -> Result<(), BackendStatus> {
        let need = self.bn_ctx_size(words)?;
        if ctx.len() < need {
            return Err(BackendStatus::Length);
        }
        write_header(ctx, BN_MAGIC, words as u32);
        ctx[HEADER_LEN..need].fill(0);
        Ok(())
    }

    fn bn_set(&self, ctx: &mut [u8], value: &[u8]) -> Result<(), BackendStatus> {
        let words = check_header(ctx, BN_MAGIC)? as usize;
        let data_len = words * WORD_SIZE;
        if value.len() != data_len {
            return Err(BackendStatus::Length);
        }
        ctx[HEADER_LEN..HEADER_LEN + data_len].copy_from_slice(value);
        Ok(())
    }

    fn bn_get(&self, ctx: &[u8], out: &mut [u8]) -> Result<(), BackendStatus> {
        let words = check_header(ctx, BN_MAGIC)? as usize;
        let data_len = words * WORD_SIZE;
        if out.len() != data_len {
            return Err(BackendStatus::Length);
        }
        out.copy_from_slice(&ctx[HEADER_LEN..HEADER_LEN + data_len]);
        Ok(())
    }

    fn prime_ctx_size(&self, max_bits: usize) -> Result<usize, BackendStatus> {
        if max_bits == 0 {
            return Err(BackendStatus::BadArg);
        }
        if max_bits > u32::MAX as usize {
            return Err(BackendStatus::Size);
        }
        // Working storage for the candidate and one witness value.
        let words = max_bits.div_ceil(WORD_SIZE * 8);
        words
            .checked_mul(2 * WORD_SIZE)
            .and_then(|data| data.checked_add(HEADER_LEN))
            .ok_or(BackendStatus::Size)
    }

    fn prime_init(&self, ctx: &mut [u8], max_bits: usize) -> Result<(), BackendStatus> {
        let need = self.prime_ctx_size(max_bits)?;
        if ctx.len() < need {
            return Err(BackendStatus::Length);
        }
        write_header(ctx, PRIME_MAGIC, max_bits as u32);
        ctx[HEADER_LEN..need].fill(0);
        Ok(())
    }

    fn prng_ctx_size(&self) -> Result<usize, BackendStatus> {
        Ok(HEADER_LEN + PRNG_STATE_LEN)
    }

    fn prng_init(&self, ctx: &mut [u8], seed_bits: usize) -> Result<(), BackendStatus> {
        if seed_bits == 0 || seed_bits > u32::MAX as usize {
            return Err(BackendStatus::Size);
        }
        if ctx.len() < HEADER_LEN + PRNG_STATE_LEN {
            return Err(BackendStatus::Length);
        }
        write_header(ctx, PRNG_MAGIC, seed_bits as u32);
        ctx[HEADER_LEN..HEADER_LEN + PRNG_STATE_LEN].fill(0);
        Ok(())
    }

    fn prng_fill(
        &self,
        ctx: &mut [u8],
        out: &mut [u8],
        bits: usize,
    ) -> Result<(), BackendStatus> {
        check_header(ctx, PRNG_MAGIC)?;
        // The generator is bit-oriented but only serves whole bytes.
        if bits == 0 || bits % 8 != 0 {
            return Err(BackendStatus::Size);
        }
        let bytes = bits / 8;
        if bytes != out.len() {
            return Err(BackendStatus::Length);
        }
        getrandom::getrandom(out).map_err(|_| BackendStatus::Failed)?;
        let produced = u64::from_le_bytes([
            ctx[HEADER_LEN],
            ctx[HEADER_LEN + 1],
            ctx[HEADER_LEN + 2],
            ctx[HEADER_LEN + 3],
            ctx[HEADER_LEN + 4],
            ctx[HEADER_LEN + 5],
            ctx[HEADER_LEN + 6],
            ctx[HEADER_LEN + 7],
        ])
        .wrapping_add(bytes as u64);
        ctx[HEADER_LEN..HEADER_LEN + 8].copy_from_slice(&produced.to_le_bytes());
        Ok(())
    }
}
