//! Adapter to the external MathJax runtime
//!
//! MathJax 2.x only reads its configuration from `window.MathJax`, so that
//! global is written here and nowhere else.

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::errors::BootstrapError;
use crate::models::TypesetConfig;

const GLOBAL_NAME: &str = "MathJax";

/// Publish `config` at `window.MathJax`. Must run before the library script
/// executes, or MathJax falls back to its built-in defaults.
pub fn publish_config(window: &Window, config: &TypesetConfig) -> Result<(), BootstrapError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let value = config
        .serialize(&serializer)
        .map_err(|e| BootstrapError::Options(e.to_string()))?;

    let written = Reflect::set(window, &JsValue::from_str(GLOBAL_NAME), &value)
        .map_err(|e| BootstrapError::dom("window.MathJax", e))?;
    if !written {
        return Err(BootstrapError::Dom("window.MathJax is read-only".to_string()));
    }
    Ok(())
}

/// `window.MathJax.Hub`, once the library has installed it
fn hub(window: &Window) -> Option<JsValue> {
    let mathjax = Reflect::get(window, &JsValue::from_str(GLOBAL_NAME)).ok()?;
    if !mathjax.is_object() {
        return None;
    }
    let hub = Reflect::get(&mathjax, &JsValue::from_str("Hub")).ok()?;
    hub.is_object().then_some(hub)
}

/// Queue a whole-document typeset. Silently does nothing until the MathJax
/// hub exists, so it is safe to call at any time.
pub fn render_math() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(hub) = hub(&window) else {
        return;
    };
    let Some(queue) = Reflect::get(&hub, &JsValue::from_str("Queue"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return;
    };

    let job = Array::of2(&JsValue::from_str("Typeset"), &hub);
    if let Err(e) = queue.call1(&hub, &job) {
        log::debug!("MathJax.Hub.Queue threw: {:?}", e);
    }
}
