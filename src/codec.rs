//! Decoding of case records into typed shares
//!
//! A case record is a JSON object with one metadata entry and any number of
//! share entries:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Every key other than `"keys"` is a share's x-coordinate in base 10. The
//! share's y-coordinate is `value` read as a big integer in radix `base`.
//! Shares keep the order they have in the document, since solving uses the
//! first `k` of them.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use polysecret::codec::decode_case_str;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let case = decode_case_str(r#"{
//!     "keys": { "n": 2, "k": 2 },
//!     "1": { "base": "16", "value": "1a" },
//!     "2": { "base": 2, "value": "111" }
//! }"#)?;
//!
//! assert_eq!(*case.threshold(), 2);
//! assert_eq!(case.shares()[0].y, BigInt::from(26));
//! assert_eq!(case.shares()[1].y, BigInt::from(7));
//! # Ok(())
//! # }
//! ```

use num_bigint::BigInt;
use num_traits::Num;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{Radix, SecretCase, Share, Threshold};
use crate::error::{Result, SecretError};

/// Name of the metadata entry holding `n` and `k`
pub const METADATA_KEY: &str = "keys";

/// An integer that may be written either as a JSON number or as a string
///
/// Anything else (floats, out-of-range numbers, arrays) lands in `Other` so
/// that it is reported as unparseable rather than as a malformed record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntText {
    Number(i64),
    Text(String),
    Other(Value),
}

impl IntText {
    fn parse(&self, field: &'static str) -> Result<i64> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => {
                check_digits(field, text, 10)?;
                text.parse().map_err(|e| SecretError::parse(field, text, e))
            }
            Self::Other(value) => Err(SecretError::parse(
                field,
                &value.to_string(),
                "not an integer in the signed 64-bit range",
            )),
        }
    }
}

/// The `"keys"` metadata entry
#[derive(Debug, Clone, Deserialize)]
pub struct CaseMetadata {
    pub n: IntText,
    pub k: IntText,
}

/// One raw share entry, before its value is decoded
#[derive(Debug, Clone, Deserialize)]
pub struct ShareRecord {
    pub base: IntText,
    pub value: String,
}

/// Parses a digit string in the given radix
///
/// Digits beyond 9 are letters in either case. A leading `-` or `+` is
/// accepted.
///
/// # Errors
/// Returns a parse error if the string is empty or holds a digit that is not
/// valid in `radix`
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use polysecret::codec::parse_radix_value;
/// use polysecret::domain::Radix;
///
/// let y = parse_radix_value("1a", Radix::new(16).unwrap()).unwrap();
/// assert_eq!(y, BigInt::from(26));
///
/// assert!(parse_radix_value("12", Radix::new(2).unwrap()).is_err());
/// ```
pub fn parse_radix_value(digits: &str, radix: Radix) -> Result<BigInt> {
    check_digits("value", digits, *radix)?;
    BigInt::from_str_radix(digits, *radix).map_err(|_| {
        SecretError::parse(
            "value",
            digits,
            format!("not a valid base-{radix} number"),
        )
    })
}

/// Rejects anything but an optional sign followed by one or more digits of
/// `radix`
///
/// num-bigint skips `_` separators, which case records must not contain.
fn check_digits(field: &'static str, text: &str, radix: u32) -> Result<()> {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    if unsigned.is_empty() {
        return Err(SecretError::parse(field, text, "no digits"));
    }
    match unsigned.chars().find(|c| !c.is_digit(radix)) {
        Some(c) => Err(SecretError::parse(
            field,
            text,
            format!("{c:?} is not a base-{radix} digit"),
        )),
        None => Ok(()),
    }
}

/// Renders an integer as a lowercase digit string in the given radix
#[must_use]
pub fn encode_radix_value(value: &BigInt, radix: Radix) -> String {
    value.to_str_radix(*radix)
}

/// Decodes a single share entry keyed by its x-coordinate
///
/// # Errors
/// Returns a parse error if the key, base, or value cannot be parsed
pub fn decode_share(key: &str, record: &ShareRecord) -> Result<Share> {
    check_digits("key", key, 10)?;
    let x: BigInt = key
        .parse()
        .map_err(|e| SecretError::parse("key", key, e))?;

    let base = record.base.parse("base")?;
    let radix = u32::try_from(base)
        .map_err(|e| SecretError::parse("base", &base.to_string(), e))
        .and_then(Radix::new)?;

    let y = parse_radix_value(&record.value, radix)?;
    debug!(%x, %y, %radix, "decoded share");

    Ok(Share::new(x, y).with_encoding(radix, &record.value))
}

/// Decodes a parsed case record
///
/// # Errors
/// - Schema error if the record is not an object, the metadata entry or its
///   `n`/`k` fields are missing or malformed, `k` is zero, or a share entry
///   is not an object with `base` and `value`
/// - Parse error if a share's key, base, or value cannot be parsed
pub fn decode_case(record: &Value) -> Result<SecretCase> {
    let entries = record
        .as_object()
        .ok_or_else(|| SecretError::schema("case record must be a JSON object"))?;

    let metadata = entries
        .get(METADATA_KEY)
        .ok_or_else(|| SecretError::schema(format!("missing \"{METADATA_KEY}\" metadata entry")))?;
    let metadata = CaseMetadata::deserialize(metadata)
        .map_err(|e| SecretError::schema(format!("malformed \"{METADATA_KEY}\" entry: {e}")))?;

    let n = metadata
        .n
        .parse("n")
        .map_err(|e| SecretError::schema(format!("malformed n: {e}")))?;
    let n = usize::try_from(n)
        .map_err(|_| SecretError::schema(format!("n must not be negative (got {n})")))?;

    let k = metadata
        .k
        .parse("k")
        .map_err(|e| SecretError::schema(format!("malformed k: {e}")))?;
    let k = usize::try_from(k)
        .map_err(|_| SecretError::schema(format!("k must not be negative (got {k})")))?;
    let threshold = Threshold::new(k)?;

    let mut shares = Vec::with_capacity(entries.len().saturating_sub(1));
    for (key, entry) in entries {
        if key == METADATA_KEY {
            continue;
        }
        let share_record = ShareRecord::deserialize(entry)
            .map_err(|e| SecretError::schema(format!("malformed share {key:?}: {e}")))?;
        shares.push(decode_share(key, &share_record)?);
    }

    debug!(n, k, shares = shares.len(), "decoded case");
    Ok(SecretCase::new(n, threshold, shares))
}

/// Parses JSON text and decodes it as a case record
///
/// # Errors
/// Returns a schema error for invalid JSON, otherwise see [`decode_case`]
pub fn decode_case_str(text: &str) -> Result<SecretCase> {
    let record: Value = serde_json::from_str(text)
        .map_err(|e| SecretError::schema(format!("invalid JSON: {e}")))?;
    decode_case(&record)
}
