//! WASM bindings for browser frontends

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{best_responses, find_equilibria, strict_equilibrium, PayoffMatrix, Player};

/// Parse a `{"rows": [[[p1, p2], ...], ...]}` document
fn parse_matrix(json: &str) -> Result<PayoffMatrix, JsError> {
    PayoffMatrix::from_json(json).map_err(|e| JsError::new(&e.to_string()))
}

/// Find all pure-strategy equilibria
///
/// # Arguments
/// * `matrix_json` - JSON payoff matrix
///
/// # Returns
/// Array of `{at: {row, col}, payoffs: [p1, p2]}`, zero-based
#[wasm_bindgen]
pub fn find_equilibria_json(matrix_json: &str) -> Result<JsValue, JsError> {
    let matrix = parse_matrix(matrix_json)?;
    let equilibria = find_equilibria(&matrix);

    serde_wasm_bindgen::to_value(&equilibria)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Full text report, one line per equilibrium
#[wasm_bindgen]
pub fn report_text(matrix_json: &str) -> Result<String, JsError> {
    let matrix = parse_matrix(matrix_json)?;
    Ok(strict_equilibrium(&matrix).to_string())
}

/// Best-response cells of one player (1 or 2)
#[wasm_bindgen]
pub fn best_responses_json(matrix_json: &str, player: u8) -> Result<JsValue, JsError> {
    let player = match player {
        1 => Player::One,
        2 => Player::Two,
        _ => return Err(JsError::new(&format!("Unknown player: {}", player))),
    };
    let matrix = parse_matrix(matrix_json)?;

    serde_wasm_bindgen::to_value(&best_responses(&matrix, player))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Validate a matrix document
///
/// Returns `{valid: true}` or `{valid: false, error: "..."}`.
/// Never throws.
#[wasm_bindgen]
pub fn validate_matrix(matrix_json: &str) -> JsValue {
    let result = match PayoffMatrix::from_json(matrix_json) {
        Ok(_) => ValidationResult { valid: true, error: None },
        Err(e) => ValidationResult { valid: false, error: Some(e.to_string()) },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// The default example game as a JSON document
#[wasm_bindgen]
pub fn default_matrix_json() -> Result<String, JsError> {
    serde_json::to_string(&PayoffMatrix::default())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
