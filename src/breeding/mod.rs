//! # Breeding
//!
//! Offspring are produced in two steps: [`SinglePointCrossover`] pairs the
//! selected parents and exchanges gene tails, then [`PointMutation`] perturbs
//! the children gene by gene. Neither step decodes; the population recalculates
//! the children's values once both are done.
pub mod crossover;
pub mod mutation;

pub use crossover::SinglePointCrossover;
pub use mutation::PointMutation;
