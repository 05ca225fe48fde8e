//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct owns the single random source of a
//! population. Every random decision of the algorithm (initial genes, shuffles,
//! roulette spins, crossover points, mutation rolls) is drawn from it, so a seeded
//! generator makes a whole run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genequation::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! for _ in 0..5 {
//!     assert!((0.0..1.0).contains(&rng.uniform()));
//! }
//!
//! let mut order = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut order);
//! order.sort();
//! assert_eq!(order, vec![1, 2, 3, 4, 5]);
//! ```

use rand::{
    distributions::{Distribution, Standard},
    rngs::StdRng,
    seq::SliceRandom,
    Rng, SeedableRng,
};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// genetic algorithm needs.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniform sample from `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns `true` with the given probability.
    ///
    /// A probability of `0.0` never succeeds and `1.0` always does.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.uniform() < probability
    }

    /// Returns a uniform index in `0..upper`, or `0` when `upper` is zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }

    /// Draws one value from the `Standard` distribution of `T`.
    pub fn sample<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.rng.gen()
    }

    /// Shuffles `items` in place with a uniform (Fisher–Yates) permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
