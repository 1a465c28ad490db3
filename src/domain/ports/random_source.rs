//! Random source port definition.
//!
//! Particle spawning draws through this trait instead of a concrete RNG so
//! tests can supply a fixed sequence.

/// Source of uniform random draws.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform draw in `[min, max)`.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform index below `len`.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw an index from an empty range");
        let drawn = (self.next_f64() * len as f64) as usize;
        drawn.min(len - 1)
    }
}

/// Random source replaying a fixed sequence, cycling when exhausted.
#[cfg(test)]
pub struct FixedRandomSource {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl FixedRandomSource {
    /// Creates a source over the given sequence.
    ///
    /// # Panics
    /// Panics if the sequence is empty.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "fixed sequence must not be empty");
        Self { values, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for FixedRandomSource {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
