//! Theme toggle placement and persistence.

use leptos::prelude::*;
use web_sys::{Document, Element};

use crate::components::theme_toggle::ThemeToggle;
use crate::error::MountSkip;
use crate::mount::MountContext;
use crate::state::theme::{DARK_BODY_CLASS, THEME_TOGGLE_ID, ThemeController, ThemeMode};
use crate::state::toast::Notify;
use crate::util::dom;
use crate::util::preference::LocalStorage;

const HEADER_SELECTOR: &str = "#header .container-fluid";

pub fn mount(ctx: &MountContext) -> Result<(), MountSkip> {
    let document = &ctx.document;
    let header = dom::query(document, HEADER_SELECTOR).ok_or(MountSkip::MissingAnchor(HEADER_SELECTOR))?;
    if document.get_element_by_id(THEME_TOGGLE_ID).is_some() {
        return Err(MountSkip::AlreadyMounted("#themeToggle"));
    }

    let mut controller = ThemeController::load(LocalStorage::new(), ctx.config.theme_storage_key.clone());
    let mode = RwSignal::new(controller.mode());
    let toaster = ctx.toaster;
    let page = document.clone();
    Effect::new(move |prev: Option<ThemeMode>| {
        let next = mode.get();
        match prev {
            // Markup may already carry the dark class; mounting only ever adds it.
            None => {
                if next.is_dark() {
                    dom::set_body_class(&page, DARK_BODY_CLASS, true);
                }
            }
            Some(prev) if prev != next => {
                dom::set_body_class(&page, DARK_BODY_CLASS, next.is_dark());
                controller.set(next);
                toaster.notify(next.announcement());
            }
            Some(_) => {}
        }
        next
    });

    // Render off-page, then move the button itself into place.
    let staging = dom::create(document, "div").ok_or(MountSkip::Unavailable("createElement"))?;
    leptos::mount::mount_to(staging.clone(), move || view! { <ThemeToggle mode/> }).forget();
    let button = staging
        .first_element_child()
        .ok_or(MountSkip::Unavailable("render"))?;
    place(document, &header, &button)
}

/// After the nav list, else after the social links, else at the end of the header.
fn place(document: &Document, header: &Element, button: &Element) -> Result<(), MountSkip> {
    let anchor = dom::query(document, "#navbar ul").or_else(|| dom::query(document, "#header .header-social-links"));
    if anchor.is_some_and(|a| a.insert_adjacent_element("afterend", button).is_ok()) {
        return Ok(());
    }
    header
        .append_child(button)
        .map(|_| ())
        .map_err(|_| MountSkip::Unavailable("appendChild"))
}
