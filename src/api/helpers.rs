//! Shared helpers for WASM API operations
//!
//! Serialization to JavaScript values and conversion of theory errors into
//! `JsValue` messages, with the failure logged before it crosses the boundary.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::errors::TheoryError;

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("[WASM] {}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a theory error (rejected user input) to a JsValue
pub fn theory_error(err: TheoryError) -> JsValue {
    let msg = err.to_string();
    log::warn!("[WASM] {}", msg);
    JsValue::from_str(&msg)
}
