//! WASM bindings for polysecret
//!
//! This module provides JavaScript-friendly bindings for decoding case records
//! and reconstructing their secret. Big integers cross the boundary as decimal
//! strings, since JavaScript numbers cannot hold them exactly.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::codec;
use crate::domain::{Secret, SecretCase, SolveConfig};
use crate::{Result, commands};

/// Initialize panic hook for better error messages in the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// A decoded point as shown to the browser
#[derive(Debug, Serialize, Deserialize)]
pub struct PointReport {
    pub x: String,
    pub y: String,
    /// Digits exactly as they appeared in the case record
    pub original_value: String,
    pub base: u32,
}

/// Decoded case parameters and points
#[derive(Debug, Serialize, Deserialize)]
pub struct InputReport {
    pub n: usize,
    pub k: usize,
    pub points: Vec<PointReport>,
}

/// Result of a solve operation (for JSON serialization)
#[derive(Debug, Serialize, Deserialize)]
pub struct SolveReport {
    pub input: InputReport,
    pub secret: String,
    /// Degree of the interpolated polynomial (k - 1)
    pub degree: usize,
    /// Number of leading points used for interpolation
    pub points_used: usize,
}

fn input_report(case: &SecretCase) -> InputReport {
    let points = case
        .shares()
        .iter()
        .map(|share| {
            let (original_value, base) = match &share.encoded {
                Some(encoded) => (encoded.digits.clone(), *encoded.radix),
                None => (share.y.to_string(), 10),
            };
            PointReport {
                x: share.x.to_string(),
                y: share.y.to_string(),
                original_value,
                base,
            }
        })
        .collect();

    InputReport {
        n: case.n(),
        k: *case.threshold(),
        points,
    }
}

/// Decode a case record into its report form
///
/// # Errors
/// Returns an error if the record cannot be decoded
pub fn decode_report(json: &str) -> Result<InputReport> {
    let case = codec::decode_case_str(json)?;
    Ok(input_report(&case))
}

/// Decode a case record and reconstruct its secret
///
/// # Errors
/// Returns an error if decoding or solving fails
pub fn solve_report(json: &str) -> Result<SolveReport> {
    let case = codec::decode_case_str(json)?;
    let secret: Secret = commands::solve_case(&case, &SolveConfig::default())?;
    let k = case.threshold();

    Ok(SolveReport {
        input: input_report(&case),
        secret: secret.to_string(),
        degree: k.degree(),
        points_used: *k,
    })
}

/// Reconstruct the secret of a case record
///
/// # Arguments
/// * `json` - The case record as JSON text
///
/// # Returns
/// JSON string containing the decoded input, the secret and the polynomial
/// degree, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const report = JSON.parse(wasm_solve(fileText));
/// console.log(`Secret: ${report.secret} (degree ${report.degree})`);
/// for (const p of report.input.points) {
///     console.log(`(${p.x}, ${p.y}) [${p.original_value} in base ${p.base}]`);
/// }
/// ```
#[wasm_bindgen]
pub fn wasm_solve(json: &str) -> std::result::Result<String, JsValue> {
    let report = solve_report(json).map_err(|e| JsValue::from_str(&format!("Solve failed: {e}")))?;

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Decode a case record without solving it
///
/// # Returns
/// JSON string containing `n`, `k` and the decoded points, or an error message
#[wasm_bindgen]
pub fn wasm_decode(json: &str) -> std::result::Result<String, JsValue> {
    let report =
        decode_report(json).map_err(|e| JsValue::from_str(&format!("Decode failed: {e}")))?;

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}
