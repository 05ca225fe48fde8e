//! # Gene
//!
//! A gene is one symbol of a closed 14-symbol alphabet: the ten decimal digits
//! followed by the four binary arithmetic operators. Digits are declared in
//! numeric order, so the derived ordering matches their value.

use std::fmt;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Gene {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// The four arithmetic operators a gene can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Applies `digit` to `accumulator`.
    ///
    /// Returns `None` for a division by zero; the caller keeps its accumulator
    /// untouched in that case.
    pub fn apply(self, accumulator: f64, digit: u8) -> Option<f64> {
        let operand = f64::from(digit);
        match self {
            Operator::Add => Some(accumulator + operand),
            Operator::Subtract => Some(accumulator - operand),
            Operator::Multiply => Some(accumulator * operand),
            Operator::Divide if digit == 0 => None,
            Operator::Divide => Some(accumulator / operand),
        }
    }
}

impl Gene {
    /// Every gene symbol, digits first.
    pub const ALPHABET: [Gene; 14] = [
        Gene::Zero,
        Gene::One,
        Gene::Two,
        Gene::Three,
        Gene::Four,
        Gene::Five,
        Gene::Six,
        Gene::Seven,
        Gene::Eight,
        Gene::Nine,
        Gene::Add,
        Gene::Subtract,
        Gene::Multiply,
        Gene::Divide,
    ];

    /// Returns the numeric value of a digit gene, or `None` for an operator.
    pub fn digit(self) -> Option<u8> {
        if self <= Gene::Nine {
            Some(self as u8)
        } else {
            None
        }
    }

    /// Returns the operator encoded by this gene, or `None` for a digit.
    pub fn operator(self) -> Option<Operator> {
        match self {
            Gene::Add => Some(Operator::Add),
            Gene::Subtract => Some(Operator::Subtract),
            Gene::Multiply => Some(Operator::Multiply),
            Gene::Divide => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn is_digit(self) -> bool {
        self.digit().is_some()
    }

    pub fn is_operator(self) -> bool {
        self.operator().is_some()
    }

    /// The single-character rendering of this gene.
    pub fn symbol(self) -> char {
        match self {
            Gene::Add => '+',
            Gene::Subtract => '-',
            Gene::Multiply => '*',
            Gene::Divide => '/',
            digit => char::from(b'0' + digit as u8),
        }
    }

    /// Parses a single rendered symbol back into a gene.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(Gene::Add),
            '-' => Ok(Gene::Subtract),
            '*' => Ok(Gene::Multiply),
            '/' => Ok(Gene::Divide),
            '0'..='9' => Ok(Gene::ALPHABET[symbol as usize - '0' as usize]),
            other => Err(GeneticError::InvalidGene(other)),
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Gene {
    type Error = GeneticError;

    fn try_from(symbol: char) -> Result<Self> {
        Gene::from_symbol(symbol)
    }
}

/// Uniform over the whole alphabet.
impl Distribution<Gene> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Gene {
        Gene::ALPHABET[rng.gen_range(0..Gene::ALPHABET.len())]
    }
}
