//! Run-wide RNG seeding with ChaCha8.
//!
//! The whole run draws from a single ChaCha8Rng seeded once at startup.
//! Same seed -> same suite, always.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create the deterministic RNG for a run.
pub fn run_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
