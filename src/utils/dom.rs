//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Find an element by id as an `HtmlElement`.
pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Focus an element by id.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(id: &str) -> bool {
    element_by_id(id).is_some_and(|el| el.focus().is_ok())
}

/// `navigator.platform` and `navigator.userAgent`, empty when unavailable.
pub fn platform_hints() -> (String, String) {
    let Some(navigator) = window().map(|w| w.navigator()) else {
        return (String::new(), String::new());
    };
    (
        navigator.platform().unwrap_or_default(),
        navigator.user_agent().unwrap_or_default(),
    )
}

/// `navigator.language`, e.g. `pt-BR`.
pub fn navigator_language() -> Option<String> {
    window()?.navigator().language()
}

/// A `data-*` attribute of the root `<html>` element.
pub fn root_data_attribute(name: &str) -> Option<String> {
    document()?.document_element()?.get_attribute(name)
}

/// A string-valued global on `window`.
pub fn window_string(name: &str) -> Option<String> {
    let window = window()?;
    js_sys::Reflect::get(&window, &name.into()).ok()?.as_string()
}

/// Milliseconds from `performance.now()`.
pub fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

/// `window.devicePixelRatio`, at least 1.
pub fn device_pixel_ratio() -> f64 {
    window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r >= 1.0)
        .unwrap_or(1.0)
}
