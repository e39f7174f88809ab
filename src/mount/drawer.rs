//! Section drawer construction and trigger wiring.

use leptos::prelude::*;
use web_sys::{Document, Element};

use crate::components::section_drawer::SectionDrawer;
use crate::error::MountSkip;
use crate::mount::MountContext;
use crate::mount::scroll_spy;
use crate::state::drawer::{
    DRAWER_BODY_CLASS, DRAWER_ID, DRAWER_TOGGLE_ID, DrawerEvent, DrawerPlan, DrawerState, SectionLink,
};
use crate::state::spy::{ACTIVE_CLASS, NAV_LINK_SELECTOR};
use crate::util::dom;

const HEADER_SELECTOR: &str = "#header .container-fluid";

pub fn mount(ctx: &MountContext) -> Result<(), MountSkip> {
    let document = &ctx.document;
    if document.get_element_by_id("main").is_none() {
        return Err(MountSkip::MissingAnchor("#main"));
    }

    let links = section_links(document);
    let existing_toggle = document.get_element_by_id(DRAWER_TOGGLE_ID);
    let synthesize = match ctx.config.drawer.plan(links.len(), existing_toggle.is_some())? {
        DrawerPlan::HideToggle => {
            if let Some(toggle) = &existing_toggle {
                dom::set_visible(toggle, false);
            }
            return Err(MountSkip::NoSections);
        }
        DrawerPlan::Build { synthesize_toggle } => synthesize_toggle,
    };
    if document.get_element_by_id(DRAWER_ID).is_some() {
        return Err(MountSkip::AlreadyMounted("#sectionDrawer"));
    }
    let body = document.body().ok_or(MountSkip::MissingAnchor("body"))?;
    let toggle = match existing_toggle {
        Some(toggle) if !synthesize => toggle,
        _ => create_toggle(document)?,
    };

    dom::set_class(&toggle, "drawer-toggle", true);
    dom::set_attr(&toggle, "aria-label", "Open section menu");
    dom::set_attr(&toggle, "aria-controls", DRAWER_ID);
    dom::set_attr(&toggle, "aria-expanded", "false");

    let drawer = RwSignal::new(DrawerState::default());
    {
        let page = document.clone();
        let trigger = toggle.clone();
        Effect::new(move || {
            let state = drawer.get();
            dom::set_body_class(&page, DRAWER_BODY_CLASS, state.is_open());
            dom::set_attr(&trigger, "aria-expanded", state.aria_expanded());
        });
    }

    dom::on_click(&toggle, move |_| {
        drawer.update(|d| {
            d.handle(DrawerEvent::ToggleClicked);
        });
    });
    dom::on_keydown(document, move |ev| {
        if ev.key() == "Escape" && drawer.get_untracked().is_open() {
            drawer.update(|d| {
                d.handle(DrawerEvent::EscapePressed);
            });
        }
    });

    leptos::mount::mount_to(body, move || view! { <SectionDrawer drawer links/> }).forget();

    let drawer_links = dom::query_all(document, "#sectionDrawer .drawer-link");
    if let Err(skip) = scroll_spy::observe_links(document, drawer_links, ACTIVE_CLASS, &ctx.config.spy_thresholds) {
        log::debug!("drawer scroll spy skipped: {skip}");
    }
    Ok(())
}

/// Primary nav links that point at sections present on this page.
fn section_links(document: &Document) -> Vec<SectionLink> {
    dom::query_all(document, NAV_LINK_SELECTOR)
        .iter()
        .filter_map(|a| {
            let href = a.get_attribute("href")?;
            let text = a.text_content().unwrap_or_default();
            SectionLink::from_anchor(&href, &text, |id| document.get_element_by_id(id).is_some())
        })
        .collect()
}

/// Trigger button for pages that do not ship `#drawerToggle`.
fn create_toggle(document: &Document) -> Result<Element, MountSkip> {
    let header = dom::query(document, HEADER_SELECTOR).ok_or(MountSkip::MissingAnchor(HEADER_SELECTOR))?;
    let button = dom::create(document, "button").ok_or(MountSkip::Unavailable("createElement"))?;
    button.set_id(DRAWER_TOGGLE_ID);
    button.set_class_name("btn-soft");
    dom::set_attr(&button, "type", "button");
    button.set_inner_html(r#"<i class="bi bi-list"></i>"#);
    header
        .append_child(&button)
        .map_err(|_| MountSkip::Unavailable("appendChild"))?;
    Ok(button.into())
}
