//! Re-initialization of the page's animate-on-scroll library.
//!
//! The page template boots `AOS` with `once: true`. After the window `load`
//! event it is re-initialized so elements animate in both scroll directions.
//! A missing library, or one that throws, is ignored.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use serde::{Deserialize, Serialize};

/// Global the library installs on `window`.
pub const ANIMATION_GLOBAL: &str = "AOS";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    pub duration: u32,
    pub easing: String,
    pub once: bool,
    pub mirror: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self { duration: 900, easing: "ease-in-out".to_owned(), once: false, mirror: true }
    }
}

impl AnimationOptions {
    /// Options object as passed to `AOS.init`.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }
}

/// Call `AOS.init(options)` then `AOS.refresh()` if the library is loaded.
///
/// Returns `Ok(false)` when the library is absent.
#[cfg(feature = "csr")]
pub fn reinitialize(options: &AnimationOptions) -> Result<bool, wasm_bindgen::JsValue> {
    use js_sys::{Function, JSON, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return Ok(false);
    };
    let aos = Reflect::get(&window, &JsValue::from_str(ANIMATION_GLOBAL))?;
    if aos.is_undefined() || aos.is_null() {
        return Ok(false);
    }
    let init = Reflect::get(&aos, &JsValue::from_str("init"))?.dyn_into::<Function>()?;
    init.call1(&aos, &JSON::parse(&options.to_json())?)?;
    let refresh = Reflect::get(&aos, &JsValue::from_str("refresh"))?.dyn_into::<Function>()?;
    refresh.call0(&aos)?;
    Ok(true)
}
