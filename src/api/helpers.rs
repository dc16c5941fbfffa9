//! Shared helpers for WASM API operations
//!
//! Common patterns for serialization, deserialization and error handling
//! across all exported functions.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

// ============================================================================
// Error Helpers
// ============================================================================

/// Log `msg` and wrap it in a JS `Error`
pub fn js_error(msg: &str) -> JsValue {
    log::error!("{}", msg);
    js_sys::Error::new(msg).into()
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_error(&format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| js_error(&format!("{}: {}", error_context, e)))
}

/// Parse a host string with `FromStr`, mapping the error to a JS `Error`
pub fn parse<T>(text: &str, error_context: &str) -> Result<T, JsValue>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text.parse::<T>()
        .map_err(|e| js_error(&format!("{}: {}", error_context, e)))
}
