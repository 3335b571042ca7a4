//! Exact big-integer fractions
//!
//! Only the handful of operations Lagrange interpolation needs: construction
//! with normalization, addition, scaling by an integer and the final
//! integrality check.

use std::ops::{Add, Mul};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// A fraction in lowest terms with a positive denominator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Creates a normalized fraction, or `None` when `denom` is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use polysecret::rational::Rational;
    ///
    /// let half = Rational::new(BigInt::from(-3), BigInt::from(-6)).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    ///
    /// assert!(Rational::new(BigInt::from(1), BigInt::from(0)).is_none());
    /// ```
    #[must_use]
    pub fn new(numer: BigInt, denom: BigInt) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }
        let mut value = Self { numer, denom };
        value.normalize();
        Some(value)
    }

    #[must_use]
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }

    #[must_use]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Always positive
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Converts to an integer, handing the fraction back when it is not one
    ///
    /// # Errors
    /// Returns `self` unchanged if the denominator is not 1
    pub fn into_integer(self) -> Result<BigInt, Self> {
        if self.is_integer() {
            Ok(self.numer)
        } else {
            Err(self)
        }
    }

    fn normalize(&mut self) {
        if self.denom.is_negative() {
            self.numer = -std::mem::take(&mut self.numer);
            self.denom = -std::mem::take(&mut self.denom);
        }
        let g = self.numer.gcd(&self.denom);
        if !g.is_one() && !g.is_zero() {
            self.numer /= &g;
            self.denom /= &g;
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut sum = if self.denom == rhs.denom {
            Self {
                numer: self.numer + rhs.numer,
                denom: self.denom,
            }
        } else {
            Self {
                numer: self.numer * &rhs.denom + rhs.numer * &self.denom,
                denom: self.denom * rhs.denom,
            }
        };
        sum.normalize();
        sum
    }
}

impl Mul<&BigInt> for Rational {
    type Output = Self;

    fn mul(self, rhs: &BigInt) -> Self {
        let mut product = Self {
            numer: self.numer * rhs,
            denom: self.denom,
        };
        product.normalize();
        product
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
