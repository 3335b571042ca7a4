//! Reconstructed secrets

use num_bigint::BigInt;

use crate::rational::Rational;

/// The constant term of the interpolated polynomial
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Secret {
    Integer(BigInt),
    /// Only produced when fractions are explicitly allowed
    Fraction(Rational),
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Fraction(value) => write!(f, "{value}"),
        }
    }
}
