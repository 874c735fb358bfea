//! Trait-based seam to the numeric backend.
//!
//! The numeric libraries this core fronts expose big-number and generator
//! state as opaque buffers: the caller asks for a context size, allocates,
//! and hands the buffer back for initialization. [`NumBackend`] keeps that
//! shape so an external library can be dropped in behind it;
//! [`NativeBackend`](crate::NativeBackend) is the built-in implementation.

use teebn_types::BackendStatus;

/// Word granularity of the backend big-number representation, in bytes.
///
/// A big-number byte length must be a positive multiple of this.
pub const WORD_SIZE: usize = 4;

/// Randomness callback consumed by the backend's generator abstraction.
///
/// The backend side is bit-granular; implementations may reject bit counts
/// they cannot serve. See [`bn_rand_source`](crate::bn_rand_source).
pub type BnRandFn = fn(&mut [u8], usize) -> Result<(), BackendStatus>;

/// Numeric backend primitives used by the context lifecycle layer.
///
/// Contexts are opaque byte buffers owned by the caller; the backend never
/// allocates. Faults are reported as [`BackendStatus`] values and translated
/// into the core taxonomy at the core's boundary.
pub trait NumBackend: Send + Sync {
    /// Context size in bytes for a big number of `words` words.
    ///
    /// The returned size includes backend bookkeeping and is never smaller
    /// than `words * WORD_SIZE`.
    fn bn_ctx_size(&self, words: usize) -> Result<usize, BackendStatus>;

    /// Initialize `ctx` to hold a big number of `words` words.
    fn bn_init(&self, ctx: &mut [u8], words: usize) -> Result<(), BackendStatus>;

    /// Import `value` into an initialized context as a non-negative integer.
    fn bn_set(&self, ctx: &mut [u8], value: &[u8]) -> Result<(), BackendStatus>;

    /// Export the value held by an initialized context into `out`.
    fn bn_get(&self, ctx: &[u8], out: &mut [u8]) -> Result<(), BackendStatus>;

    /// Context size in bytes for a prime-search state of up to `max_bits`
    /// bits.
    fn prime_ctx_size(&self, max_bits: usize) -> Result<usize, BackendStatus>;

    /// Initialize `ctx` as a prime-search state of up to `max_bits` bits.
    fn prime_init(&self, ctx: &mut [u8], max_bits: usize) -> Result<(), BackendStatus>;

    /// Context size in bytes for one random generator state.
    fn prng_ctx_size(&self) -> Result<usize, BackendStatus>;

    /// Initialize `ctx` as a generator state seeded for `seed_bits` bits of
    /// output.
    fn prng_init(&self, ctx: &mut [u8], seed_bits: usize) -> Result<(), BackendStatus>;

    /// Fill `out` with `bits` random bits from the generator state.
    fn prng_fill(&self, ctx: &mut [u8], out: &mut [u8], bits: usize)
        -> Result<(), BackendStatus>;
}
