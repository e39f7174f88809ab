//! Deferred animate-on-scroll re-initialization.

use crate::error::MountSkip;
use crate::mount::MountContext;
use crate::util::animation::reinitialize;
use crate::util::dom;

pub fn mount(ctx: &MountContext) -> Result<(), MountSkip> {
    let window = web_sys::window().ok_or(MountSkip::Unavailable("window"))?;
    let options = ctx.config.animation.clone();
    let run = move || match reinitialize(&options) {
        Ok(true) => log::debug!("animation library re-initialized"),
        Ok(false) => log::debug!("animation library not present"),
        Err(err) => log::debug!("animation library re-init failed: {err:?}"),
    };
    if dom::ready_state(&ctx.document).as_deref() == Some("complete") {
        run();
    } else {
        dom::once(&window, "load", run);
    }
    Ok(())
}
