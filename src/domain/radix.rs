//! `Radix` newtype for share value encodings

use crate::error::{Result, SecretError};

/// Numeral base of a share's encoded y-value (2..=36)
///
/// Digits beyond 9 are the letters `a..=z`, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;
    /// Largest supported base (ten digits plus 26 letters)
    pub const MAX: u32 = 36;

    /// Creates a new radix
    ///
    /// # Errors
    /// Returns a parse error if the base is outside 2..=36
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polysecret::domain::Radix;
    ///
    /// let hex = Radix::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Radix::new(1).is_err());
    /// assert!(Radix::new(37).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SecretError::parse(
                "base",
                &value.to_string(),
                format!("base must be between {} and {}", Self::MIN, Self::MAX),
            ));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Radix {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
