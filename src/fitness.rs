//! # TargetChallenge
//!
//! Scores chromosomes by how close their decoded value lands to the target:
//! `1 / |target - value|`. An exact match divides by zero and yields positive
//! infinity, which is the terminal "solved" score.

use crate::chromosome::Chromosome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetChallenge {
    target: i64,
}

impl TargetChallenge {
    pub fn new(target: i64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Scores a decoded value. Never NaN.
    ///
    /// A value that overflowed to infinity, or became NaN through `inf * 0`,
    /// scores zero.
    pub fn score_value(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        1.0 / (self.target as f64 - value).abs()
    }

    /// Scores the cached value of `chromosome` without decoding it again.
    pub fn score(&self, chromosome: &Chromosome) -> f64 {
        self.score_value(chromosome.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_infinite() {
        let challenge = TargetChallenge::new(10);
        assert_eq!(challenge.score_value(10.0), f64::INFINITY);
    }

    #[test]
    fn test_inverse_distance() {
        let challenge = TargetChallenge::new(10);

        assert_eq!(challenge.score_value(8.0), 0.5);
        assert_eq!(challenge.score_value(14.0), 0.25);
        assert_eq!(challenge.score_value(-10.0), 0.05);
    }

    #[test]
    fn test_near_miss_is_finite_and_positive() {
        let challenge = TargetChallenge::new(3);
        let score = challenge.score_value(3.5);

        assert!(score.is_finite());
        assert!(score > 0.0);
    }

    #[test]
    fn test_non_finite_values_score_zero() {
        let challenge = TargetChallenge::new(7);

        assert_eq!(challenge.score_value(f64::NAN), 0.0);
        assert_eq!(challenge.score_value(f64::INFINITY), 0.0);
        assert_eq!(challenge.score_value(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_overflowing_expression_scores_zero() {
        // 9^331 overflows to infinity and the trailing `*0` turns it into NaN.
        let expression = format!("9{}*0", "*9".repeat(330));
        let chromosome: Chromosome = expression.parse().unwrap();

        assert_eq!(chromosome.len(), 663);
        assert!(chromosome.value().is_nan());
        assert_eq!(TargetChallenge::new(7).score(&chromosome), 0.0);
    }

    #[test]
    fn test_score_reads_cached_value() {
        let challenge = TargetChallenge::new(5);
        let mut chromosome: Chromosome = "2+3".parse().unwrap();
        assert_eq!(challenge.score(&chromosome), f64::INFINITY);

        // Edit without recalculating: scoring still sees the old value.
        chromosome.genes_mut()[2] = crate::gene::Gene::Four;
        assert_eq!(challenge.score(&chromosome), f64::INFINITY);

        chromosome.recalculate();
        assert_eq!(challenge.score(&chromosome), 1.0);
    }
}
