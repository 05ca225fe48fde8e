//! # SinglePointCrossover
//!
//! Pairs parents and swaps the gene tails of each pair at one crossover point.
//! The point is drawn uniformly from the middle third of the chromosome and kept
//! strictly inside it, so both children always carry genes from both parents
//! (whenever the chromosome has at least two genes).
use tracing::trace;

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    pub fn new() -> Self {
        Self
    }

    /// Draws a crossover point for a chromosome of `len` genes.
    ///
    /// The point lies in `len/3 .. 2*len/3` and, for `len >= 2`, in `1..len`.
    pub fn crossover_point(&self, len: usize, rng: &mut RandomNumberGenerator) -> usize {
        let third = len / 3;
        let point = third + rng.gen_index(third);
        if len >= 2 {
            point.clamp(1, len - 1)
        } else {
            point
        }
    }

    /// Crosses two parents at `point`.
    ///
    /// The first child takes `first[..point]` followed by `second[point..]`, the
    /// second child the complement. Children values are not decoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the parents differ in length or `point` lies past
    /// the end of the chromosome.
    pub fn cross(
        &self,
        first: &Chromosome,
        second: &Chromosome,
        point: usize,
    ) -> Result<(Chromosome, Chromosome)> {
        let len = first.len();
        if second.len() != len {
            return Err(GeneticError::Breeding(format!(
                "Cannot cross chromosomes of length {} and {}",
                len,
                second.len()
            )));
        }
        if point > len {
            return Err(GeneticError::Breeding(format!(
                "Crossover point {} is outside a chromosome of length {}",
                point, len
            )));
        }

        let mut child1 = Chromosome::blank(len)?;
        let mut child2 = Chromosome::blank(len)?;

        let (head1, tail1) = child1.genes_mut().split_at_mut(point);
        head1.copy_from_slice(&first.genes()[..point]);
        tail1.copy_from_slice(&second.genes()[point..]);

        let (head2, tail2) = child2.genes_mut().split_at_mut(point);
        head2.copy_from_slice(&second.genes()[..point]);
        tail2.copy_from_slice(&first.genes()[point..]);

        Ok((child1, child2))
    }

    /// Shuffles `parents` in place and breeds one child per parent.
    ///
    /// Parents are paired consecutively after the shuffle and every pair yields
    /// two children. With an odd number of parents the last one is crossed
    /// with the first and only its first child is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if `parents` is empty or the parents differ in length.
    pub fn breed(
        &self,
        parents: &mut [Chromosome],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        if parents.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        rng.shuffle(parents);
        let mut children = Vec::with_capacity(parents.len());

        for pair in parents.chunks_exact(2) {
            let point = self.crossover_point(pair[0].len(), rng);
            trace!(point, "crossing {} with {}", pair[0], pair[1]);
            let (child1, child2) = self.cross(&pair[0], &pair[1], point)?;
            children.push(child1);
            children.push(child2);
        }

        if parents.len() % 2 == 1 {
            let last = &parents[parents.len() - 1];
            let point = self.crossover_point(last.len(), rng);
            let (child, _) = self.cross(last, &parents[0], point)?;
            children.push(child);
        }

        Ok(children)
    }
}
