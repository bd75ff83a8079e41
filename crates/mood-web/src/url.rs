use web_sys as web;

// URL sync for deep-linking: the store is seeded from `location.search` on
// startup and mirrored back with `history.replaceState` on every mood change
// so the address bar is always shareable.

pub fn current_query(window: &web::Window) -> String {
    window.location().search().unwrap_or_default()
}

pub fn replace_query(window: &web::Window, query_string: &str) {
    let location = window.location();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_owned());
    let url = format!("{pathname}?{query_string}");
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}

/// Absolute shareable URL for the current state (Share button / clipboard).
pub fn share_url(window: &web::Window, query_string: &str) -> String {
    let location = window.location();
    let origin = location.origin().unwrap_or_default();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_owned());
    format!("{origin}{pathname}?{query_string}")
}
