//! Threshold newtype for secret reconstruction

use crate::error::{Result, SecretError};

/// Threshold `k`: the number of shares interpolated, one more than the
/// degree of the hidden polynomial
///
/// Invariant: threshold >= 1 (enforced at construction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns a schema error if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polysecret::domain::Threshold;
    ///
    /// // A constant polynomial needs a single share
    /// let threshold = Threshold::new(1).unwrap();
    /// assert_eq!(*threshold, 1);
    /// assert_eq!(threshold.degree(), 0);
    ///
    /// // Invalid: at least one share is always needed
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            return Err(SecretError::schema("threshold k must be at least 1 (got 0)"));
        }
        Ok(Self(value))
    }

    /// Degree of the polynomial this threshold reconstructs
    #[must_use]
    pub fn degree(self) -> usize {
        self.0 - 1
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
