//! # Chromosome
//!
//! A `Chromosome` is one candidate expression: a fixed-length sequence of genes
//! together with its last decoded value and its last fitness score.
//!
//! Neither cached field is refreshed implicitly. Changing genes leaves `value`
//! stale until [`Chromosome::recalculate`] is called, and `fitness` is only
//! written by the population when it scores.
//!
//! ## Example
//!
//! ```rust
//! use genequation::chromosome::Chromosome;
//!
//! let chromosome: Chromosome = "5/0+2".parse().unwrap();
//! assert_eq!(chromosome.value(), 7.0);
//! assert_eq!(chromosome.to_string(), "5/0+2");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{
    error::{GeneticError, Result},
    gene::{Gene, Operator},
    rng::RandomNumberGenerator,
};

/// Decodes a gene sequence into its numeric value.
///
/// The scan alternates between looking for a number and looking for an
/// operator, starting with an implicit `+` on an accumulator of zero:
///
/// - a digit seen while looking for a number is applied with the current
///   operator, except that a division by zero is skipped and the scan keeps
///   looking for a number;
/// - an operator becomes the current operator and starts the search for the
///   next number; a run of operators leaves only the last one pending;
/// - digits seen while looking for an operator are ignored.
pub fn decode(genes: &[Gene]) -> f64 {
    let mut finding_number = true;
    let mut current = Operator::Add;
    let mut value = 0.0;

    for &gene in genes {
        if let Some(operator) = gene.operator() {
            current = operator;
            finding_number = true;
        } else if let Some(digit) = gene.digit().filter(|_| finding_number) {
            if let Some(next) = current.apply(value, digit) {
                value = next;
                finding_number = false;
            }
        }
    }

    value
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<Gene>,
    value: f64,
    /// Not serialized: a restored chromosome reads back as unscored and is
    /// rescored by its population.
    #[cfg_attr(feature = "serde", serde(skip))]
    fitness: f64,
}

impl Chromosome {
    /// Creates a chromosome of `gene_count` genes drawn uniformly from the
    /// whole alphabet. The value is decoded immediately.
    pub fn random(gene_count: usize, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let genes = (0..gene_count).map(|_| rng.sample::<Gene>()).collect();
        Self::from_genes(genes)
    }

    /// Creates a blank chromosome of `gene_count` genes to be filled in by the
    /// caller through [`Chromosome::genes_mut`].
    ///
    /// Every gene starts as `Gene::Zero` and the value is left at zero; call
    /// [`Chromosome::recalculate`] once the genes are in place.
    pub fn blank(gene_count: usize) -> Result<Self> {
        if gene_count == 0 {
            return Err(GeneticError::Configuration(
                "Gene count cannot be zero".to_string(),
            ));
        }

        Ok(Self {
            genes: vec![Gene::Zero; gene_count],
            value: 0.0,
            fitness: 0.0,
        })
    }

    /// Creates a chromosome from explicit genes and decodes it.
    pub fn from_genes(genes: Vec<Gene>) -> Result<Self> {
        if genes.is_empty() {
            return Err(GeneticError::Configuration(
                "Gene count cannot be zero".to_string(),
            ));
        }

        let value = decode(&genes);
        Ok(Self {
            genes,
            value,
            fitness: 0.0,
        })
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Mutable access to the genes. The slice cannot change length.
    pub fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false`: a chromosome holds at least one gene.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The value computed by the last call to [`Chromosome::recalculate`] (or
    /// at construction).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Re-decodes the genes and stores the result.
    pub fn recalculate(&mut self) -> f64 {
        self.value = decode(&self.genes);
        self.value
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Whether the last score marked this chromosome as an exact match.
    pub fn is_solved(&self) -> bool {
        self.fitness == f64::INFINITY
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.genes.iter().try_for_each(|gene| write!(f, "{}", gene))
    }
}

impl FromStr for Chromosome {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        let genes = s
            .chars()
            .map(Gene::from_symbol)
            .collect::<Result<Vec<_>>>()?;
        Self::from_genes(genes)
    }
}
