//! Off-canvas section navigation.
//!
//! Renders the backdrop and the panel. The trigger button lives in the page
//! header and is wired by the drawer mount task.

use leptos::prelude::*;

use crate::state::drawer::{DRAWER_ID, DrawerEvent, DrawerState, SectionLink};

/// Backdrop plus panel listing `links`.
#[component]
pub fn SectionDrawer(drawer: RwSignal<DrawerState>, links: Vec<SectionLink>) -> impl IntoView {
    let on_backdrop = move |_| {
        drawer.update(|d| {
            d.handle(DrawerEvent::BackdropClicked);
        });
    };
    let on_close = move |_| {
        drawer.update(|d| {
            d.handle(DrawerEvent::CloseClicked);
        });
    };

    view! {
        <div id="sectionDrawerBackdrop" class="drawer-backdrop" on:click=on_backdrop></div>
        <aside id=DRAWER_ID class="section-drawer" aria-hidden=move || drawer.get().aria_hidden()>
            <div class="drawer-header">
                <div class="drawer-title">"Sections"</div>
                <button type="button" class="btn-soft drawer-close" aria-label="Close menu" on:click=on_close>
                    <i class="bi bi-x"></i>
                </button>
            </div>
            <nav class="drawer-links" aria-label="Section links">
                {links.into_iter().map(|link| view! { <DrawerLink drawer link/> }).collect_view()}
            </nav>
        </aside>
    }
}

/// Link that scrolls to its section, rewrites the fragment, and closes.
#[component]
fn DrawerLink(drawer: RwSignal<DrawerState>, link: SectionLink) -> impl IntoView {
    let SectionLink { href, label } = link;
    #[cfg(feature = "csr")]
    let target_href = href.clone();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            use crate::state::drawer::ScrollMode;
            use crate::util::dom;

            let Some(target) = dom::document().and_then(|d| d.get_element_by_id(target_href.trim_start_matches('#')))
            else {
                return;
            };
            ev.prevent_default();
            dom::scroll_to(&target, ScrollMode::for_reduced_motion(dom::prefers_reduced_motion()));
            dom::replace_fragment(&target_href);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
        drawer.update(|d| {
            d.handle(DrawerEvent::LinkActivated);
        });
    };

    view! {
        <a href=href class="drawer-link" on:click=on_click>
            {label}
        </a>
    }
}
