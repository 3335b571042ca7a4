//! Domain types for secret reconstruction
//!
//! This module contains validated newtypes and plain data for one reconstruction case:
//! - [`Threshold`] - Number of shares interpolated (k >= 1)
//! - [`Radix`] - Base of a share's encoded value (2..=36)
//! - [`Share`] - A decoded `(x, y)` point
//! - [`SecretCase`] - Declared n, threshold and the ordered shares
//! - [`Secret`] - The reconstructed constant term
//! - [`SolveConfig`] - Options for solving a batch of cases

mod case;
mod config;
mod radix;
mod secret;
mod share;
mod threshold;

pub use case::SecretCase;
pub use config::{Exactness, SolveConfig};
pub use radix::Radix;
pub use secret::Secret;
pub use share::{EncodedValue, Share};
pub use threshold::Threshold;
