use rand::{Rng, SeedableRng, rngs::StdRng};

/// Injectable random source for every stochastic choice in a run
///
/// Wraps any [`Rng`]; seeded construction makes whole generation runs
/// reproducible.
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Wrap an existing random source
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generic weighted random selection
    ///
    /// Draws uniformly in `[0, total)` and subtracts weights in order until
    /// the remainder is non-positive. Returns index into weights array.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }

    /// Uniform index below `len`, `None` for an empty range
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniform pick from a slice
    pub fn choose<'s, T>(&mut self, items: &'s [T]) -> Option<&'s T> {
        self.index(items.len()).and_then(|i| items.get(i))
    }
}
