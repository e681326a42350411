//! Random sources for one generation run

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// ChaCha stream for general uniform/weighted draws
pub const DRAW_STREAM: u64 = 0;

/// ChaCha stream for the engagement normal sampler
pub const GAUSS_STREAM: u64 = 1;

/// Independent RNG streams used by the generator
///
/// All streams derive from one seed, each on its own ChaCha stream, so a
/// seeded run is fully replayable.
pub struct RandomSources {
    /// Uniform and weighted choices, probability checks
    pub draws: ChaCha8Rng,
    /// Normal-distributed engagement scores
    pub gauss: ChaCha8Rng,
}

impl RandomSources {
    pub fn seeded(seed: u64) -> Self {
        Self {
            draws: stream(seed, DRAW_STREAM),
            gauss: stream(seed, GAUSS_STREAM),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            draws: ChaCha8Rng::from_entropy(),
            gauss: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

fn stream(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}
