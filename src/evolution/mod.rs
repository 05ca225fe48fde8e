pub mod launcher;
pub mod options;
pub mod run_log;

pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use run_log::{RunLog, RunRecord};
