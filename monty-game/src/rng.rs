//! Seeded random streams for reproducible batches.

use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_chacha::ChaCha8Rng;
use sha2::Sha256;

/// Seed used when the caller supplies none.
pub const DEFAULT_SEED: u64 = 1337;

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl<R: rand::RngCore> CountingRng<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

/// Derive an independent stream seed from a user seed and a domain tag.
#[must_use]
pub fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}

/// Seed for trial `index` of a batch keyed by `user_seed`.
#[must_use]
pub fn derive_trial_seed(user_seed: u64, index: u64) -> u64 {
    let mut tag = [0u8; 14];
    tag[..6].copy_from_slice(b"trial-");
    tag[6..].copy_from_slice(&index.to_le_bytes());
    derive_stream_seed(user_seed, &tag)
}

/// Dedicated stream for one trial; safe to build on any thread.
#[must_use]
pub fn trial_rng(user_seed: u64, index: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_trial_seed(user_seed, index))
}

/// Single sequential stream for a whole batch.
#[must_use]
pub fn batch_rng(user_seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(derive_stream_seed(user_seed, b"batch"))
}
