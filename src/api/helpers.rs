//! Shared helpers for the JavaScript-facing API
//!
//! Console output that must appear regardless of the `log` backend
//! (e.g. the single initialization failure line), plus options decoding.

use wasm_bindgen::prelude::*;

use crate::errors::BootstrapError;
use crate::models::BootstrapOptions;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

/// Log an error message with [chat-math] prefix
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_warn(msg: &str) {
    warn(&format!("[chat-math] {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[chat-math] {}", msg));
}

// ============================================================================
// Options Decoding
// ============================================================================

/// Read options from JS; `undefined`/`null` mean "all defaults"
pub fn options_from_js(value: JsValue) -> Result<BootstrapOptions, BootstrapError> {
    if value.is_undefined() || value.is_null() {
        return Ok(BootstrapOptions::default());
    }

    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = BootstrapError::Options(e.to_string());
        log_warn(&err.to_string());
        err
    })
}
