//! Search row filtering the publication list.

use leptos::prelude::*;

use crate::components::toast::Toaster;
use crate::state::search::{CLEARED_MESSAGE, SEARCH_INPUT_ID};
use crate::state::toast::Notify;

/// Query input plus clear button. Filtering itself reacts to `query`.
#[component]
pub fn PublicationSearch(query: RwSignal<String>, toaster: Toaster) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_clear = move |_| {
        query.set(String::new());
        #[cfg(feature = "csr")]
        {
            if let Some(input) = input_ref.get() {
                crate::util::dom::log_failure("focus", input.focus());
            }
        }
        toaster.notify(CLEARED_MESSAGE);
    };

    view! {
        <input
            id=SEARCH_INPUT_ID
            type="search"
            placeholder="Select publications"
            autocomplete="off"
            node_ref=input_ref
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
        />
        <button class="btn-soft" type="button" id="pubClear" aria-label="Clear search" on:click=on_clear>
            <i class="bi bi-x-circle"></i>
        </button>
    }
}
