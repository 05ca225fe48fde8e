use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A selection strategy that picks breeders through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) picks
/// individuals with probability proportional to their fitness. Picks are made
/// without replacement: every winner leaves the wheel, so each spin is
/// proportional to the fitness of the chromosomes still in the pool.
///
/// The pool is shuffled once before the first spin. Shuffling does not change
/// the odds, only the order in which the wheel is walked.
///
/// A chromosome with infinite fitness owns the whole wheel: when the pool holds
/// one, the first such chromosome in pool order is picked.
///
/// # Examples
///
/// ```
/// use genequation::chromosome::Chromosome;
/// use genequation::rng::RandomNumberGenerator;
/// use genequation::selection::RouletteWheelSelection;
///
/// let mut population: Vec<Chromosome> = ["1+1", "2*3", "9-4", "7"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// for (chromosome, fitness) in population.iter_mut().zip([0.5, 0.8, 0.3, 0.9]) {
///     chromosome.set_fitness(fitness);
/// }
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let selected = RouletteWheelSelection::new()
///     .select(&population, 2, &mut rng)
///     .unwrap();
///
/// assert_eq!(selected.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Selects `num_to_select` distinct chromosomes from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - More chromosomes are requested than the population holds
    /// - A chromosome has a negative or NaN fitness
    pub fn select(
        &self,
        population: &[Chromosome],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if num_to_select > population.len() {
            return Err(GeneticError::Configuration(format!(
                "Cannot select {} chromosomes from a population of {}",
                num_to_select,
                population.len()
            )));
        }

        if population
            .iter()
            .any(|c| c.fitness().is_nan() || c.fitness() < 0.0)
        {
            return Err(GeneticError::Configuration(
                "Roulette wheel selection requires non-negative fitness values".to_string(),
            ));
        }

        let mut pool = population.to_vec();
        rng.shuffle(&mut pool);

        let mut selected = Vec::with_capacity(num_to_select);
        while selected.len() < num_to_select {
            let idx = self.spin(&pool, rng);
            selected.push(pool.remove(idx));
        }

        Ok(selected)
    }

    /// Spins the wheel once over a non-empty pool and returns the winning index.
    fn spin(&self, pool: &[Chromosome], rng: &mut RandomNumberGenerator) -> usize {
        if let Some(idx) = pool.iter().position(|c| c.fitness() == f64::INFINITY) {
            return idx;
        }

        let total: f64 = pool.iter().map(Chromosome::fitness).sum();
        let slice = rng.uniform() * total;

        let mut total_so_far = 0.0;
        for (i, chromosome) in pool.iter().enumerate() {
            total_so_far += chromosome.fitness();
            if total_so_far > slice {
                return i;
            }
        }

        // Only reachable through rounding (or an all-zero wheel).
        pool.len() - 1
    }
}
