use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::{
    options::{EvolutionOptions, LogLevel},
    run_log::{RunLog, RunRecord},
};
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, OptionExt, Result},
    population::Population,
};

/// Represents the result of an evolution: the first chromosome that hit the
/// target and the generation it was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The number of generations advanced before the solution appeared.
    pub generation: usize,
    /// The solving chromosome.
    pub solution: Chromosome,
    /// The target the solution evaluates to.
    pub target: i64,
}

impl EvolutionResult {
    pub fn record(&self) -> RunRecord {
        RunRecord::new(self.generation, &self.solution, self.target)
    }
}

/// Drives a population until one chromosome evaluates exactly to the target.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher {
    options: EvolutionOptions,
    run_log: Option<RunLog>,
}

impl EvolutionLauncher {
    /// Creates a new `EvolutionLauncher` with the given options and no run log.
    pub fn new(options: EvolutionOptions) -> Self {
        Self {
            options,
            run_log: None,
        }
    }

    /// Appends every progress report, and the final solution, to `run_log`.
    pub fn with_run_log(mut self, run_log: RunLog) -> Self {
        self.run_log = Some(run_log);
        self
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn run_log(&self) -> Option<&RunLog> {
        self.run_log.as_ref()
    }

    /// Evolves a fresh population until a chromosome hits the target.
    ///
    /// The champion is reported every `report_interval` generations, starting
    /// with the initial population.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - `max_generations` is set and reached without a solution
    /// - The run log cannot be written
    pub fn run(&self) -> Result<EvolutionResult> {
        let mut population = Population::from_options(&self.options)?;
        self.run_population(&mut population)
    }

    /// Evolves `population` in place until a chromosome hits the target.
    ///
    /// Reporting cadence and the generation cap are taken from this
    /// launcher's options and measured against `population.generation()`.
    pub fn run_population(&self, population: &mut Population) -> Result<EvolutionResult> {
        let report_interval = self.options.get_report_interval();
        if report_interval == 0 {
            return Err(GeneticError::Configuration(
                "Report interval cannot be zero".to_string(),
            ));
        }

        info!(
            target_value = population.target(),
            size = population.chromosomes().len(),
            gene_count = population.gene_count(),
            mutation_rate = population.mutation_rate(),
            "starting evolution"
        );

        let mut last_step = Duration::ZERO;
        while !population.is_solved() {
            let generation = population.generation();

            if let Some(max) = self.options.get_max_generations() {
                if generation >= max {
                    return Err(GeneticError::MaxAttemptsReached(format!(
                        "No expression evaluated to {} within {} generations",
                        population.target(),
                        max
                    )));
                }
            }

            if generation % report_interval == 0 {
                self.report(population, last_step)?;
            } else if *self.options.get_log_level() == LogLevel::Verbose {
                if let Some(best) = population.best() {
                    debug!(generation, best = %best, value = best.value(), "champion");
                }
            }

            let started = Instant::now();
            population.next_generation()?;
            last_step = started.elapsed();
        }

        let solution = population.solution().cloned().ok_or_else_genetic(|| {
            GeneticError::Evolution("Population reported a solution but holds none".to_string())
        })?;

        let result = EvolutionResult {
            generation: population.generation(),
            solution,
            target: population.target(),
        };

        if let Some(run_log) = &self.run_log {
            run_log.append(&result.record())?;
        }

        if *self.options.get_log_level() != LogLevel::None {
            info!(
                generation = result.generation,
                fitness = result.solution.fitness(),
                "*** SOLUTION: {} = {}",
                result.solution,
                result.solution.value()
            );
        }

        Ok(result)
    }

    fn report(&self, population: &Population, last_step: Duration) -> Result<()> {
        let best = population
            .best()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let record = RunRecord::new(population.generation(), best, population.target());

        if let Some(run_log) = &self.run_log {
            run_log.append(&record)?;
        }

        if *self.options.get_log_level() != LogLevel::None {
            info!(
                elapsed = ?last_step,
                "{}: {} Value: {} Target: {} Error: {}",
                record.generation,
                record.expression,
                record.value,
                record.target,
                record.error()
            );
        }

        Ok(())
    }
}
