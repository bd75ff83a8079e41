use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire an `input` listener on a slider/color `<input>` and hand its current
/// value string to the handler.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let input = el.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(input) = input.dyn_ref::<web::HtmlInputElement>() {
                handler(input.value());
            }
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Like [`add_input_listener`] but fires on `change` (commit) instead of
/// every keystroke/drag tick.
pub fn add_change_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let input = el.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(input) = input.dyn_ref::<web::HtmlInputElement>() {
                handler(input.value());
            }
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire a `change` listener on a `<select>` and hand its value to the handler.
pub fn add_select_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let select = el.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(select) = select.dyn_ref::<web::HtmlSelectElement>() {
                handler(select.value());
            }
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Push a palette channel or intensity to a CSS custom property on `:root`;
/// the room styling and the render layer read these each frame.
pub fn set_css_variable(document: &web::Document, name: &str, value: &str) {
    if let Some(root) = document.document_element() {
        if let Some(el) = root.dyn_ref::<web::HtmlElement>() {
            let _ = el.style().set_property(name, value);
        }
    }
}

#[inline]
pub fn set_text_content(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Fire a bubbling `CustomEvent` on `window` for external listeners
/// (analytics, cross-component sync).
pub fn dispatch_window_event(event_name: &str) {
    if let Some(window) = web::window() {
        if let Ok(event) = web::CustomEvent::new(event_name) {
            let _ = window.dispatch_event(&event);
        }
    }
}
