//! Browser-facing pieces
//!
//! Everything here talks to the page through `web-sys`. Closures handed to
//! the DOM are leaked with `forget()`: the nodes they belong to live for
//! the whole page, and nothing here is ever torn down.

pub mod button;
pub mod drag;
pub mod loader;
pub mod typeset;
pub mod watcher;

pub use button::create_render_button;
pub use drag::make_draggable;
pub use loader::load_library;
pub use typeset::{publish_config, render_math};
pub use watcher::watch_mutations;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, MouseEvent, Window};

use crate::errors::BootstrapError;

pub fn window() -> Result<Window, BootstrapError> {
    web_sys::window().ok_or_else(|| BootstrapError::missing("window"))
}

pub fn document(window: &Window) -> Result<Document, BootstrapError> {
    window.document().ok_or_else(|| BootstrapError::missing("document"))
}

/// Attach a mouse listener for the lifetime of the page
pub(crate) fn on_mouse(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(MouseEvent) + 'static,
) -> Result<(), BootstrapError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| BootstrapError::dom(event, e))?;
    cb.forget();
    Ok(())
}
