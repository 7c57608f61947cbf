//! Press-and-hold dragging for a single element
//!
//! The press is caught on the element; moves and the release are caught on
//! the document so the gesture survives the cursor leaving the element.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::errors::BootstrapError;
use crate::models::{DragDelta, DragState};

/// Make `element` draggable with any mouse button.
///
/// The press is not filtered by button, unlike the render button's own
/// press feedback, so a right- or middle-button drag also moves it.
pub fn make_draggable(element: &HtmlElement) -> Result<(), BootstrapError> {
    let document = element
        .owner_document()
        .ok_or_else(|| BootstrapError::missing("owner document"))?;
    let state = Rc::new(RefCell::new(DragState::Idle));

    let on_move = {
        let element = element.clone();
        let state = state.clone();
        Closure::wrap(Box::new(move |ev: MouseEvent| {
            ev.prevent_default();
            let delta = state.borrow_mut().move_to(ev.client_x(), ev.client_y());
            if let Some(delta) = delta {
                move_by(&element, delta);
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let on_move: Function = on_move.into_js_value().unchecked_into();

    let on_up = {
        let document = document.clone();
        let state = state.clone();
        Closure::wrap(Box::new(move |_ev: MouseEvent| {
            state.borrow_mut().release();
            document.set_onmouseup(None);
            document.set_onmousemove(None);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let on_up: Function = on_up.into_js_value().unchecked_into();

    let on_down = Closure::wrap(Box::new(move |ev: MouseEvent| {
        ev.prevent_default();
        state.borrow_mut().press(ev.client_x(), ev.client_y());
        document.set_onmouseup(Some(&on_up));
        document.set_onmousemove(Some(&on_move));
    }) as Box<dyn FnMut(MouseEvent)>);
    element.set_onmousedown(Some(on_down.as_ref().unchecked_ref()));
    on_down.forget();

    Ok(())
}

/// Switch to top/left anchoring and shift by `delta`
fn move_by(element: &HtmlElement, delta: DragDelta) {
    let (top, left) = delta.shift(element.offset_top(), element.offset_left());
    let style = element.style();
    let _ = style.set_property("top", &format!("{}px", top));
    let _ = style.set_property("left", &format!("{}px", left));
    let _ = style.set_property("bottom", "auto");
    let _ = style.set_property("right", "auto");
}
