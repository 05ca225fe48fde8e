//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of an evolution run:
//! the target number, the population shape, the mutation rate, and the knobs of
//! the driver loop (seed, generation cap, reporting cadence, logging level).
//!
//! ## Example
//!
//! ```rust
//! use genequation::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(10, 20, 3, 0.1);
//! assert!(custom_options.validate().is_ok());
//!
//! // Or through the builder
//! let built = EvolutionOptions::builder()
//!     .target(42)
//!     .population_size(60)
//!     .gene_count(9)
//!     .mutation_rate(0.05)
//!     .seed(7)
//!     .log_level(LogLevel::None)
//!     .build();
//! assert_eq!(built.get_seed(), Some(7));
//! ```
//!
//! ## Structs
//!
//! ### `EvolutionOptions`
//!
//! #### Fields
//!
//! - `target`: The number the evolved expression must evaluate to.
//! - `population_size`: The number of chromosomes alive in every generation. Must be even.
//! - `gene_count`: The fixed length of every chromosome.
//! - `mutation_rate`: The per-gene mutation probability applied to children.
//! - `seed`: An optional seed making the run reproducible.
//! - `max_generations`: An optional cap on the number of generations.
//! - `report_interval`: How many generations pass between two progress reports.
//! - `log_level`: The logging level, represented by the `LogLevel` enum.
//! - `parallel_threshold`: The population size from which scoring runs in parallel.
//!
//! ### `LogLevel`
//!
//! - `Verbose`: Reports every generation (at debug level) besides the periodic reports.
//! - `Minimal`: Only the periodic reports.
//! - `None`: Disables progress logging.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    target: i64,
    population_size: usize,
    gene_count: usize,
    mutation_rate: f64,
    seed: Option<u64>,
    max_generations: Option<usize>,
    report_interval: usize,
    log_level: LogLevel,
    /// Minimum population size scored in parallel
    parallel_threshold: usize,
}

const DEFAULT_TARGET: i64 = 123_456;
const DEFAULT_POPULATION_SIZE: usize = 140;
const DEFAULT_GENE_COUNT: usize = 15;
const DEFAULT_MUTATION_RATE: f64 = 0.2;
const DEFAULT_REPORT_INTERVAL: usize = 500;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

impl EvolutionOptions {
    pub fn new(
        target: i64,
        population_size: usize,
        gene_count: usize,
        mutation_rate: f64,
    ) -> Self {
        Self {
            target,
            population_size,
            gene_count,
            mutation_rate,
            ..Self::default()
        }
    }

    /// Checks the preconditions of the genetic algorithm.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if:
    /// - The gene count is zero
    /// - The population size is smaller than two or odd
    /// - The mutation rate is NaN or outside `[0, 1]`
    /// - The report interval is zero
    pub fn validate(&self) -> Result<()> {
        if self.gene_count == 0 {
            return Err(GeneticError::Configuration(
                "Gene count cannot be zero".to_string(),
            ));
        }

        if self.population_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if self.population_size % 2 != 0 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be even, got {}",
                self.population_size
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if self.report_interval == 0 {
            return Err(GeneticError::Configuration(
                "Report interval cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_target(&self) -> i64 {
        self.target
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_gene_count(&self) -> usize {
        self.gene_count
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    pub fn get_report_interval(&self) -> usize {
        self.report_interval
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Returns the minimum population size scored in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_target(&mut self, target: i64) {
        self.target = target;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_gene_count(&mut self, gene_count: usize) {
        self.gene_count = gene_count;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn set_max_generations(&mut self, max_generations: Option<usize>) {
        self.max_generations = max_generations;
    }

    pub fn set_report_interval(&mut self, report_interval: usize) {
        self.report_interval = report_interval;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            population_size: DEFAULT_POPULATION_SIZE,
            gene_count: DEFAULT_GENE_COUNT,
            mutation_rate: DEFAULT_MUTATION_RATE,
            seed: None,
            max_generations: None,
            report_interval: DEFAULT_REPORT_INTERVAL,
            log_level: LogLevel::Minimal,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    target: Option<i64>,
    population_size: Option<usize>,
    gene_count: Option<usize>,
    mutation_rate: Option<f64>,
    seed: Option<u64>,
    max_generations: Option<usize>,
    report_interval: Option<usize>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn target(mut self, value: i64) -> Self {
        self.target = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn gene_count(mut self, value: usize) -> Self {
        self.gene_count = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn report_interval(mut self, value: usize) -> Self {
        self.report_interval = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. Call `validate` on the result
    /// (or let the population do it) before running.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            target: self.target.unwrap_or(defaults.target),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            gene_count: self.gene_count.unwrap_or(defaults.gene_count),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            seed: self.seed,
            max_generations: self.max_generations,
            report_interval: self.report_interval.unwrap_or(defaults.report_interval),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}
