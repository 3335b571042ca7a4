//! Property tests for Lagrange reconstruction

use std::collections::BTreeSet;

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use polysecret::SecretError;
use polysecret::domain::{Share, Threshold};
use polysecret::interpolate::solve_constant;

/// Random integer polynomial of degree 0..=9, constant term first
#[derive(Clone, Debug)]
struct Polynomial(Vec<BigInt>);

impl Polynomial {
    fn threshold(&self) -> Threshold {
        Threshold::new(self.0.len()).unwrap()
    }

    fn secret(&self) -> &BigInt {
        &self.0[0]
    }

    fn eval(&self, x: &BigInt) -> BigInt {
        self.0
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, c| acc * x + c)
    }

    fn shares(&self, xs: &[u64]) -> Vec<Share> {
        xs.iter()
            .map(|&x| {
                let x = BigInt::from(x);
                let y = self.eval(&x);
                Share::new(x, y)
            })
            .collect()
    }
}

impl Arbitrary for Polynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let k = usize::arbitrary(g) % 10 + 1; // 1..=10

        let coefficients = (0..k)
            .map(|_| {
                // Mix small and multi-word coefficients
                let low = BigInt::from(i64::arbitrary(g));
                if bool::arbitrary(g) {
                    (low << 96) + BigInt::from(u64::arbitrary(g))
                } else {
                    low
                }
            })
            .collect();
        Polynomial(coefficients)
    }
}

/// Wrapper for distinct positive x-coordinates, small or large
#[derive(Clone, Debug)]
struct DistinctXs(Vec<u64>);

impl Arbitrary for DistinctXs {
    fn arbitrary(g: &mut Gen) -> Self {
        let large = bool::arbitrary(g);
        let mut seen = BTreeSet::new();
        let mut xs = Vec::new();

        while xs.len() < 20 {
            let x = if large {
                u64::arbitrary(g) % (u64::MAX / 2) + 1
            } else {
                u64::arbitrary(g) % 1_000 + 1
            };
            if seen.insert(x) {
                xs.push(x);
            }
        }
        DistinctXs(xs)
    }
}

/// Interpolating at least k points of an integer polynomial recovers f(0)
#[quickcheck]
fn prop_exact_reconstruction(poly: Polynomial, xs: DistinctXs, extra: u8) -> bool {
    let k = *poly.threshold();
    let count = (k + usize::from(extra % 4)).min(xs.0.len());
    let shares = poly.shares(&xs.0[..count]);

    solve_constant(poly.threshold(), &shares).ok().as_ref() == Some(poly.secret())
}

/// Only the first k shares matter: later ones may come from anywhere
#[quickcheck]
fn prop_trailing_shares_ignored(poly: Polynomial, noise: Polynomial, xs: DistinctXs) -> bool {
    let k = *poly.threshold();
    let mut shares = poly.shares(&xs.0[..k]);
    shares.extend(noise.shares(&xs.0[k..]));

    solve_constant(poly.threshold(), &shares).ok().as_ref() == Some(poly.secret())
}

/// Putting a different polynomial's shares first changes the result
#[quickcheck]
fn prop_order_selects_polynomial(poly: Polynomial, offset: i64, xs: DistinctXs) -> bool {
    let k = *poly.threshold();
    let offset = if offset == 0 { 1 } else { offset };

    // Same shape, different constant term
    let mut shifted = poly.clone();
    shifted.0[0] += offset;

    let first = poly.shares(&xs.0[..k]);
    let second = shifted.shares(&xs.0[k..2 * k]);

    let forward: Vec<Share> = first.iter().chain(&second).cloned().collect();
    let backward: Vec<Share> = second.iter().chain(&first).cloned().collect();

    let a = solve_constant(poly.threshold(), &forward).ok();
    let b = solve_constant(poly.threshold(), &backward).ok();

    a.as_ref() == Some(poly.secret()) && b.as_ref() == Some(shifted.secret()) && a != b
}

/// Fewer than k shares always fails with `InsufficientShares`
#[quickcheck]
fn prop_insufficient_shares_fail(poly: Polynomial, xs: DistinctXs) -> bool {
    let k = *poly.threshold();
    let shares = poly.shares(&xs.0[..k - 1]);

    matches!(
        solve_constant(poly.threshold(), &shares),
        Err(SecretError::InsufficientShares { threshold, available })
            if threshold == k && available == k - 1
    )
}

/// k = 1 returns the first share's y unchanged
#[quickcheck]
fn prop_threshold_one_returns_first_y(ys: Vec<i64>, x: u32) -> bool {
    let Some(&first) = ys.first() else {
        return true;
    };
    let shares: Vec<Share> = ys.iter().map(|&y| Share::new(x, y)).collect();

    solve_constant(Threshold::new(1).unwrap(), &shares).ok() == Some(BigInt::from(first))
}
