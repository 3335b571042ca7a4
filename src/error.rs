//! Error types for share decoding and secret reconstruction

use std::path::PathBuf;

use num_bigint::BigInt;
use thiserror::Error;

/// Everything that can go wrong while turning one case record into a secret.
///
/// Each variant is fatal for the case it was raised on and for that case only.
#[derive(Error, Debug)]
pub enum SecretError {
    /// The case record does not have the expected shape
    #[error("schema error: {0}")]
    Schema(String),

    /// A share key, base, or value could not be parsed
    #[error("cannot parse {field} {input:?}: {reason}")]
    Parse {
        field: &'static str,
        input: String,
        reason: String,
    },

    #[error("insufficient shares: need at least {threshold}, but only {available} provided")]
    InsufficientShares { threshold: usize, available: usize },

    /// The interpolated constant term is not an integer
    #[error("secret is not an integer: {numerator}/{denominator} does not divide exactly")]
    ExactDivision {
        numerator: BigInt,
        denominator: BigInt,
    },

    /// Two of the selected shares have the same x-coordinate
    #[error("duplicate x-coordinate {x} among the selected shares")]
    DuplicateAbscissa { x: BigInt },

    #[error("failed to read case {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SecretError {
    pub(crate) fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    pub(crate) fn parse(field: &'static str, input: &str, reason: impl ToString) -> Self {
        Self::Parse {
            field,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short machine-readable name of the failure kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Schema(_) => "schema",
            Self::Parse { .. } => "parse",
            Self::InsufficientShares { .. } => "insufficient_shares",
            Self::ExactDivision { .. } => "exact_division",
            Self::DuplicateAbscissa { .. } => "duplicate_abscissa",
            Self::Io { .. } => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, SecretError>;
