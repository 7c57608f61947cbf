//! The floating "Render LaTeX" button

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::drag::make_draggable;
use super::on_mouse;
use super::typeset::render_math;
use crate::errors::BootstrapError;
use crate::models::BootstrapOptions;

/// Attribute marking the one button this crate owns on a page
pub const BUTTON_MARKER: &str = "data-chat-math";

const BACKGROUND_IDLE: &str = "rgba(255, 255, 255, 0.4)";
const BACKGROUND_HOVER: &str = "rgba(255, 255, 255, 0.6)";
const PRESSED_SCALE: &str = "scale(0.95)";
const RELEASED_SCALE: &str = "scale(1)";

/// `MouseEvent.button` value of the primary (usually left) button
const PRIMARY_BUTTON: i16 = 0;

/// Inline style for a button anchored `offset_px` from the bottom-right corner
pub fn button_css(offset_px: u32) -> String {
    format!(
        "position: fixed; bottom: {offset}px; right: {offset}px; z-index: 9999; \
         padding: 10px 20px; font-size: 16px; border-radius: 5px; \
         border: 2px solid #333; background-color: {background}; cursor: move; \
         transition: background-color 0.3s, transform 0.1s; user-select: none;",
        offset = offset_px,
        background = BACKGROUND_IDLE,
    )
}

/// Transform applied on press; only the primary button gets feedback
pub fn press_transform(button: i16) -> Option<&'static str> {
    (button == PRIMARY_BUTTON).then_some(PRESSED_SCALE)
}

/// The button already on the page, if any
pub fn find_render_button(document: &Document) -> Option<HtmlElement> {
    document
        .query_selector(&format!("[{}]", BUTTON_MARKER))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Create the render button, wire its handlers and append it to `<body>`.
///
/// Returns the existing button instead if one is already on the page.
pub fn create_render_button(
    document: &Document,
    options: &BootstrapOptions,
) -> Result<HtmlElement, BootstrapError> {
    if let Some(existing) = find_render_button(document) {
        log::debug!("render button already present");
        return Ok(existing);
    }

    let body = document
        .body()
        .ok_or_else(|| BootstrapError::missing("document.body"))?;

    let button = document
        .create_element("button")
        .map_err(|e| BootstrapError::dom("create_element(button)", e))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BootstrapError::Dom("button cast failed".to_string()))?;
    button.set_text_content(Some(&options.button_label));
    button
        .set_attribute(BUTTON_MARKER, "")
        .map_err(|e| BootstrapError::dom("set_attribute", e))?;
    button.style().set_css_text(&button_css(options.corner_offset_px));

    let el = button.clone();
    on_mouse(&button, "mouseenter", move |_| {
        let _ = el.style().set_property("background-color", BACKGROUND_HOVER);
    })?;

    let el = button.clone();
    on_mouse(&button, "mouseleave", move |_| {
        let _ = el.style().set_property("background-color", BACKGROUND_IDLE);
    })?;

    let el = button.clone();
    on_mouse(&button, "mousedown", move |ev| {
        if let Some(transform) = press_transform(ev.button()) {
            let _ = el.style().set_property("transform", transform);
        }
    })?;

    let el = button.clone();
    on_mouse(&button, "mouseup", move |_| {
        let _ = el.style().set_property("transform", RELEASED_SCALE);
    })?;

    on_mouse(&button, "click", |_| render_math())?;

    make_draggable(&button)?;

    body.append_child(&button)
        .map_err(|e| BootstrapError::dom("body.append_child", e))?;
    Ok(button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_feedback_only_for_primary() {
        assert_eq!(press_transform(0), Some("scale(0.95)"));
        assert_eq!(press_transform(1), None);
        assert_eq!(press_transform(2), None);
    }

    #[test]
    fn test_button_css_anchors_bottom_right() {
        let css = button_css(20);
        assert!(css.starts_with("position: fixed;"));
        assert!(css.contains("bottom: 20px; right: 20px;"));
        assert!(css.contains("z-index: 9999;"));
        assert!(css.contains("background-color: rgba(255, 255, 255, 0.4);"));
    }
}
