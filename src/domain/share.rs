//! Decoded share points

use num_bigint::BigInt;

use super::Radix;

/// Textual form a share's y-value was decoded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedValue {
    pub radix: Radix,
    pub digits: String,
}

/// A point `(x, y)` on the hidden polynomial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub x: BigInt,
    pub y: BigInt,
    /// Present when the share was decoded from a case record
    pub encoded: Option<EncodedValue>,
}

impl Share {
    #[must_use]
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            encoded: None,
        }
    }

    #[must_use]
    pub(crate) fn with_encoding(mut self, radix: Radix, digits: &str) -> Self {
        self.encoded = Some(EncodedValue {
            radix,
            digits: digits.to_string(),
        });
        self
    }
}

impl std::fmt::Display for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)?;
        if let Some(encoded) = &self.encoded {
            write!(f, " [{} in base {}]", encoded.digits, encoded.radix)?;
        }
        Ok(())
    }
}
