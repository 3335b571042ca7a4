use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{Exactness, SolveConfig};

/// How solved cases are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Secret for <case>: <secret>`
    #[default]
    Text,
    /// One JSON object per case
    Json,
}

#[derive(Parser)]
#[command(name = "polysecret")]
#[command(about = "Recover the constant term of a secret-sharing polynomial from radix-encoded shares")]
#[command(version)]
pub struct Cli {
    /// Log decoding and interpolation steps (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconstruct the secret of each case file
    Solve {
        /// Case files (JSON); reads a single case from stdin when omitted
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Report a non-integer secret as a reduced fraction instead of failing
        #[arg(long)]
        allow_fraction: bool,

        /// Solve independent cases on a thread pool
        #[arg(short, long)]
        parallel: bool,
    },
    /// Show the decoded shares of a case without solving it
    Inspect {
        /// Case file (JSON)
        file: PathBuf,
    },
}

/// Build the solver configuration from `solve` flags
#[must_use]
pub fn solve_config(allow_fraction: bool, parallel: bool) -> SolveConfig {
    let exactness = if allow_fraction {
        Exactness::AllowFraction
    } else {
        Exactness::Strict
    };
    SolveConfig::new(exactness, parallel)
}
