//! Seeded randomness behind sentence, blank and option draws

use rand::{
    Rng, SeedableRng,
    rngs::StdRng,
    seq::{IndexedRandom, SliceRandom},
};

/// Seeded random source for reproducible question generation
///
/// Exposes the four draw shapes the generator needs: uniform choice,
/// sampling without replacement, in-place shuffling and inclusive
/// integer ranges. Two sources built from the same seed produce the
/// same sequence of draws.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one element uniformly at random, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Sample `count` distinct elements uniformly without replacement
    ///
    /// # Errors
    ///
    /// Returns an error if `count` exceeds the number of available
    /// elements.
    pub fn sample<T: Clone>(
        &mut self,
        items: &[T],
        count: usize,
    ) -> crate::io::error::Result<Vec<T>> {
        if count > items.len() {
            return Err(crate::io::error::QuizError::InsufficientOptions {
                requested: count,
                available: items.len(),
            });
        }
        let indices = rand::seq::index::sample(&mut self.rng, items.len(), count);
        Ok(indices
            .iter()
            .filter_map(|index| items.get(index).cloned())
            .collect())
    }

    /// Shuffle a slice in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Draw a uniform integer from the inclusive range `[low, high]`
    ///
    /// # Panics
    ///
    /// Panics if `low` is greater than `high`.
    pub fn between(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}
