//! Shared browser test helpers

#![allow(dead_code)]

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{MouseEvent, MouseEventInit, Window};

/// Counts `Hub.Queue(["Typeset", Hub])` calls into `window.__typesetJobs`
const QUEUE_BODY: &str = "if (job[0] === 'Typeset' && job[1] === this) { \
     window.__typesetJobs = (window.__typesetJobs || 0) + 1; }";

pub fn window() -> Window {
    web_sys::window().expect("no window")
}

pub fn set_global(name: &str, value: &JsValue) {
    Reflect::set(&window(), &JsValue::from_str(name), value).unwrap();
}

/// Replace `window.MathJax` with a stub hub that only counts typeset jobs
pub fn install_fake_hub() {
    let hub = Object::new();
    let queue = Function::new_with_args("job", QUEUE_BODY);
    Reflect::set(&hub, &JsValue::from_str("Queue"), &queue).unwrap();

    let mathjax = Object::new();
    Reflect::set(&mathjax, &JsValue::from_str("Hub"), &hub).unwrap();
    set_global("MathJax", &mathjax);
    reset_typeset_jobs();
}

/// A `data:` URL script that attaches the same stub hub to whatever
/// configuration object is already at `window.MathJax`
pub fn fake_library_url() -> String {
    let source = format!(
        "window.MathJax.Hub = {{ Queue: function (job) {{ {} }} }};",
        QUEUE_BODY
    );
    let encoded: String = js_sys::encode_uri_component(&source).into();
    format!("data:text/javascript,{}", encoded)
}

pub fn reset_typeset_jobs() {
    set_global("__typesetJobs", &JsValue::from_f64(0.0));
}

pub fn typeset_jobs() -> u32 {
    Reflect::get(&window(), &JsValue::from_str("__typesetJobs"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32
}

pub fn mouse(kind: &str, x: i32, y: i32, button: i16) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_button(button);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

pub async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Wait for a macrotask so pending mutation-observer callbacks have run
pub async fn next_tick() {
    sleep(0).await;
}

/// Poll `cond` every 10ms for up to two seconds
pub async fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if cond() {
            return true;
        }
        sleep(10).await;
    }
    cond()
}

const CONSOLE_LEVELS: [&str; 5] = ["error", "warn", "info", "log", "debug"];

/// Wrap the console methods so every call is counted per level
pub fn count_console_entries() {
    Function::new_no_args(
        "window.__consoleEntries = {}; window.__consoleOriginals = {}; \
         for (const level of ['error', 'warn', 'info', 'log', 'debug']) { \
             const original = console[level]; \
             window.__consoleEntries[level] = 0; \
             window.__consoleOriginals[level] = original; \
             console[level] = function () { \
                 window.__consoleEntries[level] += 1; \
                 return original.apply(console, arguments); \
             }; \
         }",
    )
    .call0(&JsValue::UNDEFINED)
    .unwrap();
}

pub fn restore_console() {
    Function::new_no_args(
        "for (const level in window.__consoleOriginals) { \
             console[level] = window.__consoleOriginals[level]; \
         }",
    )
    .call0(&JsValue::UNDEFINED)
    .unwrap();
}

pub fn console_entries(level: &str) -> u32 {
    let entries = Reflect::get(&window(), &JsValue::from_str("__consoleEntries")).unwrap();
    Reflect::get(&entries, &JsValue::from_str(level))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32
}

pub fn total_console_entries() -> u32 {
    CONSOLE_LEVELS.iter().map(|level| console_entries(level)).sum()
}

pub fn count_matching(selector: &str) -> u32 {
    window()
        .document()
        .unwrap()
        .query_selector_all(selector)
        .unwrap()
        .length()
}

pub fn render_buttons() -> u32 {
    count_matching("[data-chat-math]")
}
