//! Evolves an arithmetic expression that evaluates to a target number.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use genequation::{
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel, RunLog},
    Result,
};
use tracing::{error, Level};

#[derive(Parser, Debug)]
#[command(name = "genequation")]
#[command(about = "Evolves an arithmetic expression that evaluates to a target number")]
struct Cli {
    /// Number the expression must evaluate to [default: 123456]
    target: Option<i64>,

    /// Chromosomes per generation, even and at least 2 [default: 140]
    population: Option<usize>,

    /// Genes per chromosome [default: 15]
    genes: Option<usize>,

    /// Per-gene mutation probability in [0, 1] [default: 0.2]
    mutation_rate: Option<f64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many generations
    #[arg(long)]
    max_generations: Option<usize>,

    /// Report the champion every N generations [default: 500]
    #[arg(long, value_name = "N")]
    report_every: Option<usize>,

    /// Append reports to this CSV file
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Append reports to a timestamped CSV file in this directory
    #[arg(long, value_name = "DIR", conflicts_with = "log")]
    log_dir: Option<PathBuf>,

    /// Report every generation
    #[arg(short, long)]
    verbose: bool,

    /// Suppress progress reports
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Overlays the given arguments on the default options and validates them.
    fn options(&self) -> Result<EvolutionOptions> {
        let mut options = EvolutionOptions::default();
        if let Some(target) = self.target {
            options.set_target(target);
        }
        if let Some(population) = self.population {
            options.set_population_size(population);
        }
        if let Some(genes) = self.genes {
            options.set_gene_count(genes);
        }
        if let Some(rate) = self.mutation_rate {
            options.set_mutation_rate(rate);
        }
        if let Some(interval) = self.report_every {
            options.set_report_interval(interval);
        }
        options.set_seed(self.seed);
        options.set_max_generations(self.max_generations);

        if self.verbose {
            options.set_log_level(LogLevel::Verbose);
        } else if self.quiet {
            options.set_log_level(LogLevel::None);
        }

        options.validate()?;
        Ok(options)
    }

    fn run_log(&self) -> Option<RunLog> {
        match (&self.log, &self.log_dir) {
            (Some(path), _) => Some(RunLog::new(path)),
            (None, Some(dir)) => Some(RunLog::timestamped(dir)),
            (None, None) => None,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = match cli.options() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let level = match options.get_log_level() {
        LogLevel::Verbose => Level::DEBUG,
        LogLevel::Minimal | LogLevel::None => Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let mut launcher = EvolutionLauncher::new(options);
    if let Some(run_log) = cli.run_log() {
        launcher = launcher.with_run_log(run_log);
    }

    match launcher.run() {
        Ok(result) => {
            println!(
                "{} = {} (generation {})",
                result.solution,
                result.solution.value(),
                result.generation
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};
    use genequation::GeneticError;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("genequation").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();

        assert_eq!(cli.options().unwrap(), EvolutionOptions::default());
        assert!(cli.run_log().is_none());
    }

    #[test]
    fn test_positional_and_flags() {
        let cli = parse(&[
            "10", "20", "3", "0.1", "--seed", "42", "--report-every", "5", "--log", "run.csv",
            "--quiet",
        ])
        .unwrap();
        let options = cli.options().unwrap();

        assert_eq!(options.get_target(), 10);
        assert_eq!(options.get_population_size(), 20);
        assert_eq!(options.get_gene_count(), 3);
        assert_eq!(options.get_mutation_rate(), 0.1);
        assert_eq!(options.get_seed(), Some(42));
        assert_eq!(options.get_report_interval(), 5);
        assert_eq!(options.get_log_level(), &LogLevel::None);
        assert_eq!(cli.run_log().unwrap().path().to_str(), Some("run.csv"));
    }

    #[test]
    fn test_negative_target() {
        let cli = parse(&["--", "-37"]).unwrap();

        assert_eq!(cli.options().unwrap().get_target(), -37);
    }

    #[test]
    fn test_log_dir_is_timestamped() {
        let cli = parse(&["--log-dir", "runs", "--verbose"]).unwrap();
        let run_log = cli.run_log().unwrap();

        assert!(run_log.path().starts_with("runs"));
        assert_eq!(cli.options().unwrap().get_log_level(), &LogLevel::Verbose);
    }

    #[test]
    fn test_rejects_malformed_arguments() {
        assert!(parse(&["ten"]).is_err());
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["1", "2", "3", "0.5", "9"]).is_err());
    }

    #[test]
    fn test_rejects_conflicting_flags() {
        let quiet_verbose = parse(&["--verbose", "--quiet"]).unwrap_err();
        assert_eq!(quiet_verbose.kind(), ErrorKind::ArgumentConflict);

        let both_logs = parse(&["--log", "run.csv", "--log-dir", "runs"]).unwrap_err();
        assert_eq!(both_logs.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_rejects_invalid_options() {
        let odd_population = parse(&["10", "21"]).unwrap();
        assert!(matches!(
            odd_population.options(),
            Err(GeneticError::Configuration(_))
        ));

        let zero_interval = parse(&["--report-every", "0"]).unwrap();
        assert!(zero_interval.options().is_err());
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let help = parse(&["--help"]).unwrap_err();

        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        assert_eq!(help.exit_code(), 0);
    }
}
