//! Thread-local RNG adapter.

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::domain::ports::RandomSource;

/// Production random source backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandomSource {
    rng: ThreadRng,
}

impl ThreadRandomSource {
    /// Creates a new source.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomSource for ThreadRandomSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.random()
    }
}
