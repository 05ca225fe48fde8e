use tracing::trace;

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    gene::Gene,
    rng::RandomNumberGenerator,
};

/// Per-gene random replacement.
///
/// Every gene of every chromosome handed to [`PointMutation::mutate`] is
/// independently redrawn from the full alphabet with probability `rate`.
/// Values are left stale; recalculate afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMutation {
    rate: f64,
}

impl PointMutation {
    /// Creates a mutation operator.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is NaN or outside `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mutates `chromosomes` in place and returns the number of redrawn genes.
    pub fn mutate(
        &self,
        chromosomes: &mut [Chromosome],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let mut redrawn = 0;
        for chromosome in chromosomes.iter_mut() {
            for gene in chromosome.genes_mut() {
                if rng.chance(self.rate) {
                    *gene = rng.sample::<Gene>();
                    redrawn += 1;
                }
            }
        }
        trace!(redrawn, rate = self.rate, "mutated offspring");
        redrawn
    }
}
