//! Publication search row and list filtering.

use leptos::prelude::*;
use web_sys::Element;

use crate::components::publication_search::PublicationSearch;
use crate::error::MountSkip;
use crate::mount::MountContext;
use crate::state::search::{PublicationFilter, SEARCH_INPUT_ID, group_by_container};
use crate::util::dom;

pub fn mount(ctx: &MountContext) -> Result<(), MountSkip> {
    let document = &ctx.document;
    let section = document
        .get_element_by_id("publications")
        .ok_or(MountSkip::MissingAnchor("#publications"))?;
    let title =
        dom::query_in(&section, ".section-title").ok_or(MountSkip::MissingAnchor("#publications .section-title"))?;
    if document.get_element_by_id(SEARCH_INPUT_ID).is_some() {
        return Err(MountSkip::AlreadyMounted("#pubSearch"));
    }

    // Entries hide and show through their nearest enclosing list.
    let items = dom::query_all(document, "#publications li");
    let (groups, indices): (Vec<Element>, _) = group_by_container(
        items
            .iter()
            .map(|item| item.closest("ul").ok().flatten().unwrap_or_else(|| item.clone())),
    );
    let texts = items.iter().map(|item| item.text_content().unwrap_or_default());
    let filter = PublicationFilter::new(texts.zip(indices));

    let row = dom::create(document, "div").ok_or(MountSkip::Unavailable("createElement"))?;
    row.set_class_name("search-row");
    title
        .insert_adjacent_element("afterend", &row)
        .map_err(|_| MountSkip::Unavailable("insertAdjacentElement"))?;

    let query = RwSignal::new(String::new());
    Effect::new(move |applied: Option<bool>| {
        let visible = query.with(|q| filter.visibility(q));
        // The page starts unfiltered; leave its markup alone until the first edit.
        if applied.is_some() {
            for (group, show) in groups.iter().zip(visible) {
                dom::set_visible(group, show);
            }
        }
        true
    });

    let toaster = ctx.toaster;
    leptos::mount::mount_to(row, move || view! { <PublicationSearch query toaster/> }).forget();
    Ok(())
}
