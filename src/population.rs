//! # Population
//!
//! The `Population` owns the live chromosomes, the target, and the single random
//! source of a run, and advances the whole collection one generation at a time.
//!
//! One call to [`Population::next_generation`]:
//!
//! 1. selects half of the population as breeders (roulette wheel, without
//!    replacement);
//! 2. breeds one child per breeder by single-point crossover;
//! 3. mutates the children;
//! 4. recalculates the children's values;
//! 5. replaces the population with breeders followed by children;
//! 6. rescores every chromosome.
//!
//! Termination is left to the caller, who checks [`Population::is_solved`].
//!
//! ## Example
//!
//! ```rust
//! use genequation::population::Population;
//! use genequation::rng::RandomNumberGenerator;
//!
//! let rng = RandomNumberGenerator::from_seed(42);
//! let mut population = Population::with_rng(10, 20, 3, 0.1, rng).unwrap();
//!
//! while !population.is_solved() && population.generation() < 10_000 {
//!     population.next_generation().unwrap();
//! }
//!
//! assert_eq!(population.chromosomes().len(), 20);
//! ```

use rayon::prelude::*;
use tracing::debug;

use crate::{
    breeding::{PointMutation, SinglePointCrossover},
    chromosome::Chromosome,
    error::Result,
    evolution::options::EvolutionOptions,
    fitness::TargetChallenge,
    rng::RandomNumberGenerator,
    selection::RouletteWheelSelection,
};

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: f64,
    pub worst_fitness: f64,
    pub average_fitness: f64,
}

#[derive(Debug, Clone)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
    challenge: TargetChallenge,
    gene_count: usize,
    selection: RouletteWheelSelection,
    crossover: SinglePointCrossover,
    mutation: PointMutation,
    rng: RandomNumberGenerator,
    generation: usize,
    parallel_threshold: usize,
}

impl Population {
    /// Creates a scored random population seeded from system entropy.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `gene_count` is zero, `count`
    /// is smaller than two or odd, or `mutation_rate` lies outside `[0, 1]`.
    pub fn new(
        target: i64,
        count: usize,
        gene_count: usize,
        mutation_rate: f64,
    ) -> Result<Self> {
        Self::with_rng(
            target,
            count,
            gene_count,
            mutation_rate,
            RandomNumberGenerator::new(),
        )
    }

    /// Like [`Population::new`], drawing every random decision from `rng`.
    pub fn with_rng(
        target: i64,
        count: usize,
        gene_count: usize,
        mutation_rate: f64,
        rng: RandomNumberGenerator,
    ) -> Result<Self> {
        let options = EvolutionOptions::new(target, count, gene_count, mutation_rate);
        Self::build(&options, rng)
    }

    /// Creates a population from `options`, seeded when `options` carries a seed.
    pub fn from_options(options: &EvolutionOptions) -> Result<Self> {
        let rng = options
            .get_seed()
            .map(RandomNumberGenerator::from_seed)
            .unwrap_or_default();
        Self::build(options, rng)
    }

    fn build(options: &EvolutionOptions, mut rng: RandomNumberGenerator) -> Result<Self> {
        options.validate()?;

        let gene_count = options.get_gene_count();
        let chromosomes = (0..options.get_population_size())
            .map(|_| Chromosome::random(gene_count, &mut rng))
            .collect::<Result<Vec<_>>>()?;

        let mut population = Self {
            chromosomes,
            challenge: TargetChallenge::new(options.get_target()),
            gene_count,
            selection: RouletteWheelSelection::new(),
            crossover: SinglePointCrossover::new(),
            mutation: PointMutation::new(options.get_mutation_rate())?,
            rng,
            generation: 0,
            parallel_threshold: options.get_parallel_threshold(),
        };
        population.score();

        debug!(
            target_value = options.get_target(),
            size = population.chromosomes.len(),
            gene_count,
            mutation_rate = options.get_mutation_rate(),
            "created population"
        );

        Ok(population)
    }

    /// Advances the population by one generation.
    ///
    /// # Errors
    ///
    /// Only fails if selection or breeding breaks its own preconditions, which a
    /// validated population never does.
    pub fn next_generation(&mut self) -> Result<()> {
        let mut parents = self.select_breeders()?;
        let mut children = self.crossover.breed(&mut parents, &mut self.rng)?;
        self.mutation.mutate(&mut children, &mut self.rng);
        for child in children.iter_mut() {
            child.recalculate();
        }

        self.chromosomes = parents;
        self.chromosomes.append(&mut children);
        self.score();
        self.generation += 1;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let stats = self.stats();
            debug!(
                generation = stats.generation,
                best = stats.best_fitness,
                average = stats.average_fitness,
                "advanced generation"
            );
        }

        Ok(())
    }

    /// Rescores every chromosome from its cached value.
    ///
    /// Values are never decoded here; they must already match the genes.
    pub fn score(&mut self) {
        let challenge = self.challenge;
        if self.chromosomes.len() >= self.parallel_threshold {
            self.chromosomes
                .par_iter_mut()
                .for_each(|c| c.set_fitness(challenge.score(c)));
        } else {
            self.chromosomes
                .iter_mut()
                .for_each(|c| c.set_fitness(challenge.score(c)));
        }
    }

    fn select_breeders(&mut self) -> Result<Vec<Chromosome>> {
        let num_to_select = self.chromosomes.len() / 2;
        self.selection
            .select(&self.chromosomes, num_to_select, &mut self.rng)
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// The first chromosome with the highest fitness.
    pub fn best(&self) -> Option<&Chromosome> {
        self.chromosomes.iter().reduce(|best, candidate| {
            if candidate.fitness() > best.fitness() {
                candidate
            } else {
                best
            }
        })
    }

    /// The first chromosome that evaluates exactly to the target.
    pub fn solution(&self) -> Option<&Chromosome> {
        self.chromosomes.iter().find(|c| c.is_solved())
    }

    pub fn is_solved(&self) -> bool {
        self.solution().is_some()
    }

    pub fn stats(&self) -> GenerationStats {
        let fitness = self.chromosomes.iter().map(Chromosome::fitness);
        let best_fitness = fitness.clone().fold(f64::NEG_INFINITY, f64::max);
        let worst_fitness = fitness.clone().fold(f64::INFINITY, f64::min);
        let average_fitness = fitness.sum::<f64>() / self.chromosomes.len() as f64;

        GenerationStats {
            generation: self.generation,
            best_fitness,
            worst_fitness,
            average_fitness,
        }
    }

    pub fn target(&self) -> i64 {
        self.challenge.target()
    }

    pub fn gene_count(&self) -> usize {
        self.gene_count
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation.rate()
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> usize {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chromosome::decode, error::GeneticError};

    fn seeded(target: i64, count: usize, gene_count: usize, rate: f64, seed: u64) -> Population {
        Population::with_rng(
            target,
            count,
            gene_count,
            rate,
            RandomNumberGenerator::from_seed(seed),
        )
        .unwrap()
    }

    fn assert_consistent(population: &Population) {
        for chromosome in population.chromosomes() {
            let value = decode(chromosome.genes());
            assert_eq!(chromosome.value(), value);

            let expected = 1.0 / (population.target() as f64 - value).abs();
            assert_eq!(chromosome.fitness(), expected);
            assert_eq!(chromosome.is_solved(), value == population.target() as f64);
        }
    }

    #[test]
    fn test_new_population_is_scored() {
        let population = seeded(50, 30, 9, 0.2, 1);

        assert_eq!(population.chromosomes().len(), 30);
        assert!(population.chromosomes().iter().all(|c| c.len() == 9));
        assert_consistent(&population);
    }

    #[test]
    fn test_size_is_invariant() {
        for size in [2, 4, 6, 10, 20, 34] {
            let mut population = seeded(77, size, 7, 0.2, size as u64);
            for _ in 0..25 {
                population.next_generation().unwrap();
                assert_eq!(population.chromosomes().len(), size);
            }
            assert_eq!(population.generation(), 25);
        }
    }

    #[test]
    fn test_fitness_matches_fresh_values() {
        let mut population = seeded(1000, 40, 11, 0.3, 9);
        for _ in 0..20 {
            population.next_generation().unwrap();
            assert_consistent(&population);
        }
    }

    #[test]
    fn test_parallel_scoring_matches_sequential() {
        let options = EvolutionOptions::builder()
            .target(64)
            .population_size(24)
            .gene_count(9)
            .mutation_rate(0.2)
            .seed(21)
            .parallel_threshold(1)
            .build();
        let mut parallel = Population::from_options(&options).unwrap();
        let mut sequential = seeded(64, 24, 9, 0.2, 21);

        for _ in 0..10 {
            parallel.next_generation().unwrap();
            sequential.next_generation().unwrap();
        }

        assert_eq!(parallel.chromosomes(), sequential.chromosomes());
    }

    #[test]
    fn test_zero_mutation_children_are_pure_crossover() {
        let mut population = seeded(500, 8, 9, 0.0, 3);
        population.next_generation().unwrap();

        let (parents, children) = population.chromosomes().split_at(4);
        for (pair, kids) in parents.chunks(2).zip(children.chunks(2)) {
            for i in 0..9 {
                // Each position of a child comes from one of its two parents,
                // and the two children split the pair's genes between them.
                let mut from_parents = [pair[0].genes()[i], pair[1].genes()[i]];
                let mut from_children = [kids[0].genes()[i], kids[1].genes()[i]];
                from_parents.sort();
                from_children.sort();
                assert_eq!(from_parents, from_children);
            }
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = seeded(321, 16, 9, 0.15, 77);
        let mut b = seeded(321, 16, 9, 0.15, 77);

        for _ in 0..30 {
            a.next_generation().unwrap();
            b.next_generation().unwrap();
        }

        assert_eq!(a.chromosomes(), b.chromosomes());
    }

    #[test]
    fn test_best_and_stats() {
        let population = seeded(40, 20, 5, 0.1, 12);
        let best = population.best().unwrap();
        let stats = population.stats();

        assert!(population
            .chromosomes()
            .iter()
            .all(|c| c.fitness() <= best.fitness()));
        assert_eq!(stats.best_fitness, best.fitness());
        assert!(stats.worst_fitness <= stats.average_fitness);
        assert!(stats.average_fitness <= stats.best_fitness);
        assert_eq!(stats.generation, 0);
    }

    #[test]
    fn test_solution_is_infinite_fitness() {
        // A single gene can only decode to 0..=9, and every digit gene decodes
        // to itself, so target 5 is hit as soon as a `5` appears.
        let mut population = seeded(5, 40, 1, 0.5, 2);
        while !population.is_solved() {
            population.next_generation().unwrap();
            assert!(population.generation() < 1_000);
        }

        let solution = population.solution().unwrap();
        assert_eq!(solution.value(), 5.0);
        assert_eq!(solution.fitness(), f64::INFINITY);
        assert!(population.best().unwrap().is_solved());
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        let cases = [
            (0, 3, 0.1),
            (21, 3, 0.1),
            (20, 0, 0.1),
            (20, 3, 1.5),
            (20, 3, -0.1),
        ];

        for (count, gene_count, rate) in cases {
            let result = Population::new(10, count, gene_count, rate);
            assert!(
                matches!(result, Err(GeneticError::Configuration(_))),
                "count {} gene_count {} rate {} should be rejected",
                count,
                gene_count,
                rate
            );
        }
    }
}
