//! Script-tag loader for the typesetting library

use js_sys::Promise;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, HtmlScriptElement};

use crate::errors::BootstrapError;

/// Append one `<script src=url>` to `<head>` and wait for it to run.
///
/// Resolves on the script's `load` event and fails with
/// [`BootstrapError::LibraryLoad`] on `error`. There is no timeout and no retry.
pub async fn load_library(document: &Document, url: &str) -> Result<(), BootstrapError> {
    let head = document
        .head()
        .ok_or_else(|| BootstrapError::missing("document.head"))?;

    let script = document
        .create_element("script")
        .map_err(|e| BootstrapError::dom("create_element(script)", e))?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| BootstrapError::Dom("script cast failed".to_string()))?;
    script.set_type("text/javascript");
    script.set_src(url);

    // Handlers go on before the node is attached so a cached script can't
    // fire `load` before anyone is listening.
    let settled = script_settled(&script);
    head.append_child(&script)
        .map_err(|e| BootstrapError::dom("head.append_child", e))?;

    log::trace!("loading typesetting library from {}", url);
    JsFuture::from(settled)
        .await
        .map(|_| ())
        .map_err(|_| BootstrapError::LibraryLoad(format!("could not load {}", url)))
}

fn script_settled(script: &HtmlScriptElement) -> Promise {
    Promise::new(&mut |resolve, reject| {
        let onload = Closure::wrap(Box::new(move |_ev: Event| {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        }) as Box<dyn FnMut(_)>);
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::wrap(Box::new(move |ev: Event| {
            let _ = reject.call1(&JsValue::UNDEFINED, &ev);
        }) as Box<dyn FnMut(_)>);
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    })
}
