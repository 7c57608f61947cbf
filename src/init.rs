//! Startup ordering
//!
//! `start` publishes the configuration right away, then runs `initialize`
//! once the document has been parsed. A failed initialization is reported
//! with exactly one console error.

use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use crate::console_error;
use crate::dom;
use crate::errors::BootstrapError;
use crate::models::BootstrapOptions;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Load the library, then add the button, typeset once and start watching.
///
/// Any failure stops the sequence where it happened: a failed load leaves
/// no button and no observer behind. Only reachable through `start`, which
/// guarantees a single script tag and a single observer per page.
pub(crate) async fn initialize(options: BootstrapOptions) -> Result<(), BootstrapError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    dom::load_library(&document, &options.library_url).await?;

    dom::create_render_button(&document, &options)?;
    dom::render_math();

    let body = document
        .body()
        .ok_or_else(|| BootstrapError::missing("document.body"))?;
    // The observer stays registered for as long as <body> exists.
    dom::watch_mutations(&body)?;

    log::info!("math rendering ready");
    Ok(())
}

pub fn is_started() -> bool {
    STARTED.with(Cell::get)
}

/// Publish the configuration and schedule `initialize`.
///
/// Runs at most once per page; once a call has published the configuration,
/// later calls return `Ok(())` and do nothing. A call that fails before that
/// point leaves the page free to try again.
pub fn start(options: BootstrapOptions) -> Result<(), BootstrapError> {
    if is_started() {
        log::debug!("start called again, ignoring");
        return Ok(());
    }

    let window = dom::window()?;
    let document = dom::document(&window)?;
    dom::publish_config(&window, &options.typeset)?;
    STARTED.with(|started| started.set(true));

    if document.ready_state() == "loading" {
        log::debug!("document still loading, deferring to DOMContentLoaded");
        let on_ready = Closure::once_into_js(move |_ev: Event| spawn_initialize(options));
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .map_err(|e| BootstrapError::dom("DOMContentLoaded", e))?;
    } else {
        spawn_initialize(options);
    }
    Ok(())
}

fn spawn_initialize(options: BootstrapOptions) {
    spawn_local(async move {
        if let Err(err) = initialize(options).await {
            console_error!("Failed to initialize MathJax: {}", err);
        }
    });
}
