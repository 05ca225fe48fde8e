pub mod breeding;
pub mod chromosome;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod gene;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use chromosome::Chromosome;
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use gene::Gene;
pub use population::Population;
