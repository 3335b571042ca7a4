//! A single reconstruction problem

use num_bigint::BigInt;
use tracing::warn;

use super::{Share, Threshold};
use crate::error::Result;
use crate::interpolate;

/// One secret-sharing case: declared share count, threshold and the shares
/// in the order they appeared in the input
///
/// The order matters: solving uses the first `k` shares and ignores the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretCase {
    n: usize,
    threshold: Threshold,
    shares: Vec<Share>,
}

impl SecretCase {
    /// Creates a case from already decoded shares
    ///
    /// A declared `n` that differs from the number of shares is logged, not
    /// rejected; only the threshold gates solving.
    #[must_use]
    pub fn new(n: usize, threshold: Threshold, shares: Vec<Share>) -> Self {
        if n != shares.len() {
            warn!(
                declared = n,
                actual = shares.len(),
                "declared share count does not match the shares present"
            );
        }
        Self {
            n,
            threshold,
            shares,
        }
    }

    /// Declared total number of shares
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Reconstructs the secret as an exact integer
    ///
    /// # Errors
    /// See [`interpolate::solve_constant`]
    pub fn solve(&self) -> Result<BigInt> {
        interpolate::solve_constant(self.threshold, &self.shares)
    }
}
