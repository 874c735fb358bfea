#![doc = "Zeroizing big-number context lifecycle and side-channel-safe primitives for trusted execution environments."]

mod bigint;
mod entropy;
mod native;
mod prime;
mod provider;
mod secmem;

pub use bigint::BigNumCtx;
pub use entropy::{bn_rand_source, fill_random_bytes};
pub use native::NativeBackend;
pub use prime::PrimeGenCtx;
pub use provider::{BnRandFn, NumBackend, WORD_SIZE};
pub use secmem::{ct_bytes_eq, secure_fill, secure_zero};
