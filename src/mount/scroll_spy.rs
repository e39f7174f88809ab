//! Intersection-observer wiring for scroll-spy link sets.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::MountSkip;
use crate::mount::MountContext;
use crate::state::spy::{ACTIVE_CLASS, NAV_LINK_SELECTOR, Observation, SpyState, fragment_target};
use crate::util::dom;

/// Scroll-spy for the primary navigation bar.
pub fn mount(ctx: &MountContext) -> Result<(), MountSkip> {
    let links = dom::query_all(&ctx.document, NAV_LINK_SELECTOR);
    observe_links(&ctx.document, links, ACTIVE_CLASS, &ctx.config.spy_thresholds)
}

/// Observe the sections `links` point to and keep `active_class` on the link
/// of the most visible one.
pub fn observe_links(
    document: &Document,
    links: Vec<Element>,
    active_class: &'static str,
    thresholds: &[f64],
) -> Result<(), MountSkip> {
    let hrefs = links
        .iter()
        .map(|a| a.get_attribute("href").unwrap_or_default())
        .collect::<Vec<_>>();
    let targets = hrefs
        .iter()
        .filter_map(|href| fragment_target(href))
        .filter_map(|id| document.get_element_by_id(id))
        .collect::<Vec<_>>();
    if targets.is_empty() {
        return Err(MountSkip::NoSections);
    }

    let state = RefCell::new(SpyState::new(hrefs));
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let samples = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Observation::new(entry.target().id(), entry.is_intersecting(), entry.intersection_ratio()))
                .collect::<Vec<_>>();
            let mut state = state.borrow_mut();
            if !state.observe(&samples) {
                return;
            }
            for (index, link) in links.iter().enumerate() {
                dom::set_class(link, active_class, state.is_active(index));
            }
        },
    );

    let init = IntersectionObserverInit::new();
    let threshold = thresholds
        .iter()
        .map(|t| wasm_bindgen::JsValue::from_f64(*t))
        .collect::<js_sys::Array>();
    init.set_threshold(&threshold);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|_| MountSkip::Unavailable("IntersectionObserver"))?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}
