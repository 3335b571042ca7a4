//! Property tests for radix decoding

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use polysecret::codec::{encode_radix_value, parse_radix_value};
use polysecret::domain::Radix;

/// Bases the case records are expected to use
const BASES: [u32; 5] = [2, 8, 10, 16, 36];

/// Wrapper for a digit string valid in one of [`BASES`]
#[derive(Clone, Debug)]
struct DigitString {
    base: u32,
    digits: String,
}

impl Arbitrary for DigitString {
    fn arbitrary(g: &mut Gen) -> Self {
        let base = *g.choose(&BASES).unwrap_or(&10);
        let len = usize::arbitrary(g) % 60 + 1;

        let mut digits = String::with_capacity(len);
        for _ in 0..len {
            let d = u32::arbitrary(g) % base;
            digits.push(char::from_digit(d, base).unwrap_or('0'));
        }
        DigitString { base, digits }
    }
}

/// Decoding then re-encoding gives back the digits minus leading zeros
#[quickcheck]
fn prop_decode_encode_round_trip(input: DigitString) -> bool {
    let radix = Radix::new(input.base).unwrap();
    let Ok(value) = parse_radix_value(&input.digits, radix) else {
        return false;
    };

    let trimmed = input.digits.trim_start_matches('0');
    let expected = if trimmed.is_empty() { "0" } else { trimmed };

    encode_radix_value(&value, radix) == expected
}

/// Upper-case digits decode to the same value as lower-case ones
#[quickcheck]
fn prop_digits_are_case_insensitive(input: DigitString) -> bool {
    let radix = Radix::new(input.base).unwrap();
    let lower = parse_radix_value(&input.digits, radix).ok();
    let upper = parse_radix_value(&input.digits.to_uppercase(), radix).ok();
    lower.is_some() && lower == upper
}

/// Any signed integer survives encode then decode in every supported base
#[quickcheck]
fn prop_integer_round_trip(value: i64, high: u64, base: u8) -> bool {
    let base = u32::from(base) % (Radix::MAX - Radix::MIN + 1) + Radix::MIN;
    let radix = Radix::new(base).unwrap();
    let n = (BigInt::from(value) << 64) + BigInt::from(high);

    let digits = encode_radix_value(&n, radix);
    parse_radix_value(&digits, radix).ok() == Some(n)
}

/// A digit equal to the base is always rejected
#[quickcheck]
fn prop_out_of_range_digit_rejected(base: u8) -> bool {
    let base = u32::from(base) % (Radix::MAX - Radix::MIN) + Radix::MIN;
    let radix = Radix::new(base).unwrap();
    let Some(bad) = char::from_digit(base, base + 1) else {
        return false;
    };

    parse_radix_value(&format!("1{bad}"), radix).is_err()
}

/// A `_` anywhere after the first digit is rejected, never skipped
#[quickcheck]
fn prop_underscore_rejected(input: DigitString, position: usize) -> bool {
    let radix = Radix::new(input.base).unwrap();
    let at = position % input.digits.len() + 1;
    let mut digits = input.digits.clone();
    digits.insert(at, '_');

    parse_radix_value(&digits, radix).is_err()
}
