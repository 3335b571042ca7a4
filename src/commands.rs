use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::codec;
use crate::domain::{Exactness, Secret, SecretCase, SolveConfig};
use crate::error::{Result, SecretError};
use crate::interpolate;

/// Outcome of solving one case, tagged with the case's label
#[derive(Debug)]
pub struct CaseReport {
    pub label: String,
    pub outcome: Result<Secret>,
}

impl CaseReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Reconstruct the secret of a decoded case
///
/// # Errors
/// Returns an error if there are too few shares, two selected shares share
/// an x-coordinate, or (under [`Exactness::Strict`]) the secret is not an
/// integer
pub fn solve_case(case: &SecretCase, config: &SolveConfig) -> Result<Secret> {
    match config.exactness() {
        Exactness::Strict => interpolate::solve_constant(case.threshold(), case.shares())
            .map(Secret::Integer),
        Exactness::AllowFraction => {
            let value = interpolate::solve_rational(case.threshold(), case.shares())?;
            Ok(match value.into_integer() {
                Ok(integer) => Secret::Integer(integer),
                Err(fraction) => Secret::Fraction(fraction),
            })
        }
    }
}

/// Decode a JSON case record and reconstruct its secret
///
/// # Errors
/// Returns an error if decoding or solving fails
pub fn solve_text(text: &str, config: &SolveConfig) -> Result<Secret> {
    let case = codec::decode_case_str(text)?;
    solve_case(&case, config)
}

/// Read a case file into memory that is wiped on drop
///
/// # Errors
/// Returns an I/O error naming the path if the file cannot be read
pub fn read_case(path: &Path) -> Result<Zeroizing<String>> {
    std::fs::read_to_string(path)
        .map(Zeroizing::new)
        .map_err(|source| SecretError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Solve one labeled case, capturing its failure instead of propagating it
#[must_use]
pub fn solve_labeled(label: impl Into<String>, text: &str, config: &SolveConfig) -> CaseReport {
    let label = label.into();
    let outcome = solve_text(text, config);
    log_outcome(&label, &outcome);
    CaseReport { label, outcome }
}

/// Solve every case file independently
///
/// One case failing never stops the others. Reports come back in the same
/// order as `paths`, also when cases are solved in parallel.
#[must_use]
pub fn solve_files(paths: &[PathBuf], config: &SolveConfig) -> Vec<CaseReport> {
    #[cfg(feature = "parallel")]
    if config.parallel() {
        use rayon::prelude::*;

        debug!(cases = paths.len(), "solving cases in parallel");
        return paths
            .par_iter()
            .map(|path| solve_path(path, config))
            .collect();
    }

    paths.iter().map(|path| solve_path(path, config)).collect()
}

fn solve_path(path: &Path, config: &SolveConfig) -> CaseReport {
    let label = path.display().to_string();
    match read_case(path) {
        Ok(text) => solve_labeled(label, &text, config),
        Err(e) => {
            let outcome = Err(e);
            log_outcome(&label, &outcome);
            CaseReport { label, outcome }
        }
    }
}

fn log_outcome(label: &str, outcome: &Result<Secret>) {
    match outcome {
        Ok(secret) => debug!(case = label, %secret, "case solved"),
        Err(e) => warn!(case = label, kind = e.kind(), error = %e, "case failed"),
    }
}

/// Human-readable summary of a decoded case: parameters, every point with
/// its original encoding, and which points interpolation uses
#[must_use]
pub fn describe_case(case: &SecretCase) -> String {
    let k = case.threshold();
    let points: String = case
        .shares()
        .iter()
        .map(|share| format!("  {share}\n"))
        .collect();

    format!(
        "n: {}\nk: {k}\nNumber of points: {}\n\nPoints (x, y):\n{points}\nPolynomial degree: {}\nPoints used: {}\n",
        case.n(),
        case.shares().len(),
        k.degree(),
        case.shares().len().min(*k),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    const FRACTIONAL: &str = r#"{
        "keys": { "n": 2, "k": 2 },
        "1": { "base": "10", "value": "0" },
        "3": { "base": "10", "value": "1" }
    }"#;

    #[test]
    fn test_solve_text_sample() {
        let secret = solve_text(SAMPLE, &SolveConfig::default()).unwrap();
        assert_eq!(secret, Secret::Integer(BigInt::from(3)));
        assert_eq!(secret.to_string(), "3");
    }

    #[test]
    fn test_solve_text_strict_rejects_fraction() {
        let err = solve_text(FRACTIONAL, &SolveConfig::default()).unwrap_err();
        assert_eq!(err.kind(), "exact_division");
    }

    #[test]
    fn test_solve_text_allow_fraction() {
        let config = SolveConfig::new(Exactness::AllowFraction, false);
        let secret = solve_text(FRACTIONAL, &config).unwrap();
        assert!(matches!(secret, Secret::Fraction(_)));
        assert_eq!(secret.to_string(), "-1/2");

        // Integral results stay integers
        let secret = solve_text(SAMPLE, &config).unwrap();
        assert_eq!(secret, Secret::Integer(BigInt::from(3)));
    }

    #[test]
    fn test_solve_labeled_captures_failure() {
        let report = solve_labeled("broken", "{}", &SolveConfig::default());
        assert_eq!(report.label, "broken");
        assert!(!report.is_ok());
        assert_eq!(report.outcome.unwrap_err().kind(), "schema");
    }

    #[test]
    fn test_solve_files_missing_file_does_not_abort_batch() {
        let dir = std::env::temp_dir().join(format!("polysecret-commands-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.json");
        std::fs::write(&good, SAMPLE).unwrap();
        let missing = dir.join("missing.json");

        let reports = solve_files(&[missing.clone(), good.clone()], &SolveConfig::default());

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].label, missing.display().to_string());
        assert!(matches!(reports[0].outcome, Err(SecretError::Io { .. })));
        assert_eq!(reports[1].label, good.display().to_string());
        assert_eq!(
            reports[1].outcome.as_ref().unwrap(),
            &Secret::Integer(BigInt::from(3))
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_describe_case_lists_encodings() {
        let case = codec::decode_case_str(SAMPLE).unwrap();
        let summary = describe_case(&case);

        assert!(summary.contains("n: 4"));
        assert!(summary.contains("k: 3"));
        assert!(summary.contains("(2, 7) [111 in base 2]"));
        assert!(summary.contains("(6, 39) [213 in base 4]"));
        assert!(summary.contains("Polynomial degree: 2"));
        assert!(summary.contains("Points used: 3"));
    }

    #[test]
    fn test_describe_case_exact_layout_with_too_few_shares() {
        let case = codec::decode_case_str(
            r#"{ "keys": { "n": 1, "k": 2 }, "5": { "base": "16", "value": "ff" } }"#,
        )
        .unwrap();

        assert_eq!(
            describe_case(&case),
            "n: 1\nk: 2\nNumber of points: 1\n\nPoints (x, y):\n  (5, 255) [ff in base 16]\n\nPolynomial degree: 1\nPoints used: 1\n"
        );
    }
}
