//! Copy-to-clipboard with a legacy fallback.
//!
//! The platform clipboard API is tried first. If it is missing or the write
//! is rejected, the text is copied through a temporary hidden textarea and
//! `document.execCommand("copy")`. The visitor always gets one "Copied!"
//! confirmation; failure of the fallback itself is not detected.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::error::ClipboardError;
use crate::state::toast::Notify;

pub const COPIED_MESSAGE: &str = "Copied!";

/// The two copy strategies, in the order they are tried.
#[allow(async_fn_in_trait)]
pub trait ClipboardBackend {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
    fn legacy_copy(&self, text: &str);
}

/// Copy `text` and confirm through `notifier`.
pub async fn copy_text<C, N>(clipboard: &C, notifier: &N, text: &str)
where
    C: ClipboardBackend,
    N: Notify,
{
    if let Err(err) = clipboard.write_text(text).await {
        log::debug!("clipboard write failed ({err}), using selection fallback");
        clipboard.legacy_copy(text);
    }
    notifier.notify(COPIED_MESSAGE);
}

/// `navigator.clipboard` with the textarea fallback.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WebClipboard;

#[cfg(feature = "csr")]
impl ClipboardBackend for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        use js_sys::{Function, Promise, Reflect};
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or(ClipboardError::Unsupported)?;
        // Looked up dynamically: insecure contexts have no `navigator.clipboard`.
        let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map_err(|_| ClipboardError::Unsupported)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unsupported);
        }
        let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(ClipboardError::Unsupported)?;
        let promise = write
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(rejected)?
            .dyn_into::<Promise>()
            .map_err(|_| ClipboardError::Unsupported)?;
        wasm_bindgen_futures::JsFuture::from(promise).await.map_err(rejected)?;
        Ok(())
    }

    fn legacy_copy(&self, text: &str) {
        use wasm_bindgen::JsCast;

        use crate::util::dom;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(area) = document.create_element("textarea") else {
            return;
        };
        let area = area.unchecked_into::<web_sys::HtmlTextAreaElement>();
        area.set_value(text);
        dom::set_attr(&area, "readonly", "");
        dom::set_attr(&area, "aria-hidden", "true");
        dom::set_style(&area, "position", "fixed");
        dom::set_style(&area, "left", "-9999px");
        dom::set_style(&area, "opacity", "0");

        if body.append_child(&area).is_ok() {
            area.select();
            dom::log_failure("execCommand", document.unchecked_ref::<web_sys::HtmlDocument>().exec_command("copy"));
        }
        area.remove();
    }
}

#[cfg(feature = "csr")]
fn rejected(err: wasm_bindgen::JsValue) -> ClipboardError {
    ClipboardError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
