//! Thin `web-sys` wrappers for element lookup and small DOM mutations.
//!
//! Every helper swallows JS exceptions: a missing element or a refused
//! mutation leaves the page as it was. Refused mutations are logged at debug.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, KeyboardEvent, MouseEvent};

use crate::state::drawer::ScrollMode;

/// Log a refused DOM call at debug level and carry on.
pub fn log_failure<T>(call: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::debug!("{call} failed: {err:?}");
    }
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    log_failure("setAttribute", el.set_attribute(name, value));
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    log_failure("style.setProperty", el.style().set_property(property, value));
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element matching `selector` in `document`.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// First element matching `selector` below `root`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// All elements matching `selector` in `document`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| {
            (0..list.length())
                .filter_map(|i| list.get(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect()
        })
        .unwrap_or_default()
}

pub fn create(document: &Document, tag: &str) -> Option<HtmlElement> {
    document
        .create_element(tag)
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Add or remove `class` on `<body>`.
pub fn set_body_class(document: &Document, class: &str, enabled: bool) {
    if let Some(body) = document.body() {
        log_failure("classList.toggle", body.class_list().toggle_with_force(class, enabled));
    }
}

pub fn set_class(el: &Element, class: &str, enabled: bool) {
    log_failure("classList.toggle", el.class_list().toggle_with_force(class, enabled));
}

/// Show `el` with its stylesheet display, or hide it inline.
pub fn set_visible(el: &Element, visible: bool) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if visible {
        log_failure("style.removeProperty", el.style().remove_property("display"));
    } else {
        set_style(el, "display", "none");
    }
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}

pub fn scroll_to(target: &Element, mode: ScrollMode) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(match mode {
        ScrollMode::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollMode::Instant => web_sys::ScrollBehavior::Auto,
    });
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Replace the URL fragment without adding a history entry.
pub fn replace_fragment(href: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        log_failure("history.replaceState", history.replace_state_with_url(&JsValue::NULL, "", Some(href)));
    }
}

/// Attach a click listener for the lifetime of the page.
pub fn on_click(target: &EventTarget, handler: impl FnMut(MouseEvent) + 'static) {
    let cb = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    log_failure("addEventListener", target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()));
    cb.forget();
}

/// Attach a keydown listener for the lifetime of the page.
pub fn on_keydown(target: &EventTarget, handler: impl FnMut(KeyboardEvent) + 'static) {
    let cb = Closure::<dyn FnMut(KeyboardEvent)>::new(handler);
    log_failure("addEventListener", target.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref()));
    cb.forget();
}

/// Run `handler` once `event` fires on `target`.
pub fn once(target: &EventTarget, event: &str, handler: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(handler);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    log_failure(
        "addEventListener",
        target.add_event_listener_with_callback_and_add_event_listener_options(event, cb.unchecked_ref(), &options),
    );
}

/// `document.readyState`, read dynamically.
pub fn ready_state(document: &Document) -> Option<String> {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
}
