// Internal library shared by the CLI, the WASM bindings and the tests

pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod interpolate;
pub mod rational;
pub mod wasm;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, SecretError};
