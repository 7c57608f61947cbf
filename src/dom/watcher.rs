//! Re-typeset whenever the page's DOM changes

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MutationObserver, MutationObserverInit, Node};

use super::typeset::render_math;
use crate::errors::BootstrapError;

/// Observe child-list changes anywhere under `root`.
///
/// Every delivered batch queues one typeset, whatever the records contain.
/// No debouncing: streamed chat content must never be missed. The observer
/// stays alive as long as `root` does, even if the returned handle is dropped.
pub fn watch_mutations(root: &Node) -> Result<MutationObserver, BootstrapError> {
    let callback = Closure::wrap(Box::new(move |records: Array, _observer: MutationObserver| {
        log::trace!("{} mutation record(s)", records.length());
        render_math();
    }) as Box<dyn FnMut(Array, MutationObserver)>);

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| BootstrapError::dom("MutationObserver::new", e))?;
    callback.forget();

    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    observer
        .observe_with_options(root, &init)
        .map_err(|e| BootstrapError::dom("MutationObserver.observe", e))?;

    Ok(observer)
}
