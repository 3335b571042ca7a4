//! Solver configuration

/// What to do when the interpolated constant term is not an integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Exactness {
    /// Fail with an exact-division error
    #[default]
    Strict,
    /// Report the reduced fraction as the secret
    AllowFraction,
}

/// Options shared by every case in a batch
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    exactness: Exactness,
    parallel: bool,
}

impl SolveConfig {
    /// Creates a new solver configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polysecret::domain::{Exactness, SolveConfig};
    ///
    /// let config = SolveConfig::new(Exactness::AllowFraction, false);
    /// assert_eq!(config.exactness(), Exactness::AllowFraction);
    /// assert!(!config.parallel());
    ///
    /// // Defaults are strict and sequential
    /// let config = SolveConfig::default();
    /// assert_eq!(config.exactness(), Exactness::Strict);
    /// ```
    #[must_use]
    pub fn new(exactness: Exactness, parallel: bool) -> Self {
        Self {
            exactness,
            parallel,
        }
    }

    #[must_use]
    pub fn exactness(&self) -> Exactness {
        self.exactness
    }

    /// Whether independent cases may be solved on a thread pool
    #[must_use]
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}
