//! WASM entry point.
//!
//! Installs logging, reads the page configuration, and runs every setup task
//! exactly once when the document is ready. The module may load before or
//! after `DOMContentLoaded`; both cases are handled.

use std::cell::Cell;

use leptos::prelude::Owner;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::components::toast::Toaster;
use crate::config::SiteConfig;
use crate::mount::{self, MountContext};
use crate::util::dom;

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(document) = dom::document() else {
        return;
    };
    let (config, config_err) = SiteConfig::from_document(&document);
    let _ = console_log::init_with_level(config.log_level());
    if let Some(err) = config_err {
        log::warn!("{err}; using defaults");
    }

    if dom::ready_state(&document).as_deref() == Some("loading") {
        let target = document.clone();
        dom::once(&target, "DOMContentLoaded", move || boot(document, config));
    } else {
        boot(document, config);
    }
}

fn boot(document: Document, config: SiteConfig) {
    if BOOTED.with(|booted| booted.replace(true)) {
        return;
    }
    let _ = leptos::task::Executor::init_wasm_bindgen();

    // Lives for the whole page; effects created by setup tasks hang off it.
    let owner = Owner::new();
    owner.with(|| {
        let toaster = Toaster::install(&document, config.toast_ms);
        let ctx = MountContext { document, config, toaster };
        mount::run_all(&ctx);
    });
    std::mem::forget(owner);
}
