//! Small DOM helpers shared across components.

use wasm_bindgen::JsCast;
use web_sys::window;

/// Move keyboard focus to the element with `id`, if present.
pub fn focus_by_id(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        let _ = element.focus();
    }
}

pub fn document_body() -> Option<web_sys::HtmlElement> {
    window()?.document()?.body()
}
