//! Error types for the bootstrapper
//!
//! Only a library load failure is a distinguished failure kind. DOM and
//! options errors exist so the wasm boundary can report setup problems
//! without panicking.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level bootstrap error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BootstrapError {
    /// The external typesetting script could not be fetched or executed
    #[error("library load failed: {0}")]
    LibraryLoad(String),

    /// A DOM call failed or a required node was missing
    #[error("dom: {0}")]
    Dom(String),

    /// Options passed in from JavaScript could not be read
    #[error("invalid options: {0}")]
    Options(String),
}

impl BootstrapError {
    /// Wrap a failed DOM call, keeping whatever text the JS exception carried
    pub fn dom(context: &str, err: JsValue) -> Self {
        match err.as_string() {
            Some(detail) => BootstrapError::Dom(format!("{}: {}", context, detail)),
            None => BootstrapError::Dom(context.to_string()),
        }
    }

    pub fn missing(what: &str) -> Self {
        BootstrapError::Dom(format!("no {}", what))
    }
}

impl From<BootstrapError> for JsValue {
    fn from(err: BootstrapError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
