//! Random sources for samplers.
//!
//! Samplers never own a generator; callers pass one in. Concurrent workers
//! each take their own stream from a [`SeedSource`] instead of sharing a
//! generator, so output depends only on the master seed and the stream id.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

/// Resolution of unit draws: values are `k / 10^18`.
pub const UNIT_DRAW_SCALE: i64 = 1_000_000_000_000_000_000;

const UNIT_DRAW_DECIMALS: u32 = 18;

/// Draw a decimal uniformly from `[0, 1)` with 18 fractional digits.
pub fn draw_unit<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    Decimal::new(rng.gen_range(0..UNIT_DRAW_SCALE), UNIT_DRAW_DECIMALS)
}

/// Derives independent deterministic generators from one master seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSource {
    seed: u64,
}

impl SeedSource {
    /// Create a seed source from a master seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The master seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generator for a numbered stream.
    ///
    /// Streams with different ids never overlap, so each worker (or each
    /// transaction) can be given its own without coordination.
    pub fn stream(&self, stream: u64) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(stream);
        rng
    }
}
