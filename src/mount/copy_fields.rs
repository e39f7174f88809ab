//! Click and keyboard copy on contact fields.

use std::rc::Rc;

use web_sys::Element;

use crate::components::toast::Toaster;
use crate::error::MountSkip;
use crate::mount::MountContext;
use crate::util::clipboard::{WebClipboard, copy_text};
use crate::util::contact::{
    COPY_ATTR, COPY_HINT_ATTR, COPY_MARKER_CLASS, ContactField, is_activation_key, match_literal,
};
use crate::util::dom;

pub fn mount(ctx: &MountContext) -> Result<(), MountSkip> {
    let document = &ctx.document;
    let mut candidates: Vec<(Element, ContactField)> = dom::query_all(document, "[data-copy]")
        .into_iter()
        .filter_map(|el| {
            let field = ContactField::from_data_attributes(el.get_attribute(COPY_ATTR), el.get_attribute(COPY_HINT_ATTR))?;
            Some((el, field))
        })
        .collect();

    if !ctx.config.contacts.is_empty() {
        for el in dom::query_all(document, "body *") {
            if el.child_element_count() != 0 || el.has_attribute(COPY_ATTR) {
                continue;
            }
            let text = el.text_content().unwrap_or_default();
            if let Some(field) = match_literal(&text, &ctx.config.contacts) {
                candidates.push((el, field.clone()));
            }
        }
    }

    // Fields wired by an earlier pass keep their single set of listeners.
    candidates.retain(|(el, _)| !el.class_list().contains(COPY_MARKER_CLASS));
    if candidates.is_empty() {
        return Err(MountSkip::MissingAnchor("copyable field"));
    }
    for (el, field) in candidates {
        wire(&el, field, ctx.toaster);
    }
    Ok(())
}

fn wire(el: &Element, field: ContactField, toaster: Toaster) {
    dom::set_class(el, COPY_MARKER_CLASS, true);
    dom::set_attr(el, "role", "button");
    dom::set_attr(el, "tabindex", "0");
    dom::set_attr(el, COPY_HINT_ATTR, &field.hint);
    dom::set_attr(el, "title", &field.hint);

    let value = Rc::new(field.value);
    {
        let value = Rc::clone(&value);
        dom::on_click(el, move |_| copy(Rc::clone(&value), toaster));
    }
    dom::on_keydown(el, move |ev| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            copy(Rc::clone(&value), toaster);
        }
    });
}

fn copy(value: Rc<String>, toaster: Toaster) {
    wasm_bindgen_futures::spawn_local(async move {
        copy_text(&WebClipboard, &toaster, &value).await;
    });
}
