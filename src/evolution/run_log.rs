//! # RunLog
//!
//! Appends progress records of an evolution run to a CSV file, one line per
//! record:
//!
//! ```text
//! generation,expression,value,target,error
//! ```
//!
//! where `error` is `value - target`. The file is opened in append mode for every
//! record, so an interrupted run keeps everything written so far.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::{
    chromosome::Chromosome,
    error::{Result, ResultExt},
};

/// One reported line of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub generation: usize,
    pub expression: String,
    pub value: f64,
    pub target: i64,
}

impl RunRecord {
    pub fn new(generation: usize, chromosome: &Chromosome, target: i64) -> Self {
        Self {
            generation,
            expression: chromosome.to_string(),
            value: chromosome.value(),
            target,
        }
    }

    pub fn error(&self) -> f64 {
        self.value - self.target as f64
    }
}

impl fmt::Display for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.generation,
            self.expression,
            self.value,
            self.target,
            self.error()
        )
    }
}

#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A log in `dir` named after the current local time, e.g.
    /// `GenRun-2024-05-01_03-12-45-PM.csv`.
    pub fn timestamped(dir: impl AsRef<Path>) -> Self {
        let name = Local::now()
            .format("GenRun-%Y-%m-%d_%I-%M-%S-%p.csv")
            .to_string();
        Self::new(dir.as_ref().join(name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record` as one CSV line, creating the file if needed.
    pub fn append(&self, record: &RunRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .context(format!("Failed to open run log {}", self.path.display()))?;
        writeln!(file, "{}", record)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_log(name: &str) -> RunLog {
        let path = std::env::temp_dir().join(format!(
            "genequation-{}-{}.csv",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        RunLog::new(path)
    }

    #[test]
    fn test_record_format() {
        let chromosome: Chromosome = "9*9+3".parse().unwrap();
        let record = RunRecord::new(500, &chromosome, 100);

        assert_eq!(record.to_string(), "500,9*9+3,84,100,-16");
    }

    #[test]
    fn test_fractional_values() {
        let chromosome: Chromosome = "7/2".parse().unwrap();
        let record = RunRecord::new(0, &chromosome, 3);

        assert_eq!(record.to_string(), "0,7/2,3.5,3,0.5");
    }

    #[test]
    fn test_append_adds_lines() {
        let log = temp_log("append");
        let first: Chromosome = "1+1".parse().unwrap();
        let second: Chromosome = "5*2".parse().unwrap();

        log.append(&RunRecord::new(0, &first, 10)).unwrap();
        log.append(&RunRecord::new(7, &second, 10)).unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "0,1+1,2,10,-8\n7,5*2,10,10,0\n");
        fs::remove_file(log.path()).unwrap();
    }

    #[test]
    fn test_timestamped_name() {
        let log = RunLog::timestamped(std::env::temp_dir());
        let name = log.path().file_name().unwrap().to_string_lossy().to_string();

        assert!(name.starts_with("GenRun-"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let log = RunLog::new("/nonexistent-genequation-dir/run.csv");
        let chromosome: Chromosome = "1".parse().unwrap();

        assert!(log.append(&RunRecord::new(0, &chromosome, 1)).is_err());
    }
}
