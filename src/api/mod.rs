//! JavaScript-facing API
//!
//! - `helpers`: console output and options decoding
//!
//! Hosts (a userscript or a module script) call `startMathRendering` once;
//! `renderMath` is there for anything that wants to force a re-typeset.

pub mod helpers;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::BootstrapOptions;
use crate::{dom, init};

/// Start the bootstrapper. `options` may be omitted or partial.
#[wasm_bindgen(js_name = startMathRendering)]
pub fn start_math_rendering(options: JsValue) -> Result<(), JsValue> {
    let options = helpers::options_from_js(options)?;
    init::start(options).map_err(|e| {
        helpers::log_error(&format!("Failed to initialize MathJax: {}", e));
        JsValue::from(e)
    })
}

/// Queue a whole-page typeset; no-op until MathJax is loaded
#[wasm_bindgen(js_name = renderMath)]
pub fn render_math() {
    dom::render_math();
}

/// The options `startMathRendering` uses when given nothing
#[wasm_bindgen(js_name = defaultOptions)]
pub fn default_options() -> Result<JsValue, JsValue> {
    BootstrapOptions::default()
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
