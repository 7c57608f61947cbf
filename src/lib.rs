//! In-page MathJax bootstrapper for chat interfaces
//!
//! Loads MathJax into the page, adds a draggable button that re-typesets on
//! click, and re-typesets whenever the page's DOM changes so streamed
//! messages get rendered as they arrive.

pub mod api;
pub mod dom;
pub mod errors;
pub mod init;
pub mod models;

pub use errors::BootstrapError;
pub use init::{is_started, start};
pub use models::*;

use wasm_bindgen::prelude::*;

// Runs when the module is instantiated; startup itself waits for the host
// to call `startMathRendering`.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("chat-math module initialized");
}
