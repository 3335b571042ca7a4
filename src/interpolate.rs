//! Lagrange interpolation at x = 0 over exact rationals
//!
//! For the selected points `(x_0, y_0) .. (x_{k-1}, y_{k-1})` the constant
//! term of the interpolating polynomial is
//!
//! ```text
//!           k-1        ---      (0 - x_j)
//!   f(0) =  sum  y_i * | |   -------------
//!           i=0      j != i   (x_i - x_j)
//! ```
//!
//! Every basis value is kept as a reduced fraction and the weighted sum is
//! accumulated exactly. Integrality is checked once, on the final sum.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::debug;

use crate::domain::{Share, Threshold};
use crate::error::{Result, SecretError};
use crate::rational::Rational;

/// Lagrange basis polynomial `L_i` evaluated at zero
///
/// # Errors
/// Returns `DuplicateAbscissa` if another point shares `x_i`
///
/// # Panics
/// Panics if `i` is out of bounds for `points`
pub fn basis_at_zero(points: &[Share], i: usize) -> Result<Rational> {
    let xi = &points[i].x;
    let mut numer = BigInt::one();
    let mut denom = BigInt::one();

    for (j, point) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        numer *= -&point.x;
        denom *= xi - &point.x;
    }

    Rational::new(numer, denom).ok_or_else(|| SecretError::DuplicateAbscissa { x: xi.clone() })
}

/// Value at zero of the unique polynomial of degree `points.len() - 1`
/// through all of `points`
///
/// No integrality check is made; an empty slice yields zero.
///
/// # Errors
/// Returns `DuplicateAbscissa` if two points share an x-coordinate
pub fn lagrange_at_zero(points: &[Share]) -> Result<Rational> {
    let mut acc = Rational::zero();
    for (i, point) in points.iter().enumerate() {
        let basis = basis_at_zero(points, i)?;
        debug!(x = %point.x, basis = %basis, "lagrange basis at zero");
        acc = acc + basis * &point.y;
    }
    Ok(acc)
}

/// Reconstructs the secret from the first `k` shares, in the order given
///
/// Shares past index `k - 1` are ignored.
///
/// # Errors
/// - `InsufficientShares` if fewer than `k` shares are supplied
/// - `DuplicateAbscissa` if two selected shares share an x-coordinate
/// - `ExactDivision` if the constant term is not an integer
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use polysecret::domain::{Share, Threshold};
/// use polysecret::interpolate::solve_constant;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // f(x) = x^2 + 3
/// let shares = [Share::new(1, 4), Share::new(2, 7), Share::new(3, 12)];
/// let secret = solve_constant(Threshold::new(3)?, &shares)?;
/// assert_eq!(secret, BigInt::from(3));
/// # Ok(())
/// # }
/// ```
pub fn solve_constant(k: Threshold, shares: &[Share]) -> Result<BigInt> {
    let value = solve_rational(k, shares)?;
    value.into_integer().map_err(|fraction| SecretError::ExactDivision {
        numerator: fraction.numer().clone(),
        denominator: fraction.denom().clone(),
    })
}

/// Like [`solve_constant`], but returns the exact fraction instead of
/// failing when the constant term is not an integer
///
/// # Errors
/// - `InsufficientShares` if fewer than `k` shares are supplied
/// - `DuplicateAbscissa` if two selected shares share an x-coordinate
pub fn solve_rational(k: Threshold, shares: &[Share]) -> Result<Rational> {
    let k = *k;
    if shares.len() < k {
        return Err(SecretError::InsufficientShares {
            threshold: k,
            available: shares.len(),
        });
    }
    debug!(k, available = shares.len(), "interpolating first k shares");
    lagrange_at_zero(&shares[..k])
}
