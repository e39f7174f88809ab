use super::*;

// =============================================================
// DrawerState
// =============================================================

#[test]
fn default_is_closed() {
    let state = DrawerState::default();
    assert!(!state.is_open());
    assert_eq!(state.aria_expanded(), "false");
    assert_eq!(state.aria_hidden(), "true");
}

#[test]
fn toggle_opens_and_sets_open_attributes() {
    let mut state = DrawerState::default();
    assert!(state.handle(DrawerEvent::ToggleClicked));
    assert!(state.is_open());
    assert_eq!(state.aria_expanded(), "true");
    assert_eq!(state.aria_hidden(), "false");
}

#[test]
fn toggle_twice_closes() {
    let mut state = DrawerState::default();
    state.handle(DrawerEvent::ToggleClicked);
    state.handle(DrawerEvent::ToggleClicked);
    assert!(!state.is_open());
}

#[test]
fn every_dismiss_event_closes_an_open_drawer() {
    for event in [
        DrawerEvent::EscapePressed,
        DrawerEvent::BackdropClicked,
        DrawerEvent::CloseClicked,
        DrawerEvent::LinkActivated,
    ] {
        let mut state = DrawerState::default();
        state.handle(DrawerEvent::ToggleClicked);
        assert!(state.handle(event), "{event:?} should close");
        assert!(!state.is_open());
        assert_eq!(state.aria_expanded(), "false");
        assert_eq!(state.aria_hidden(), "true");
    }
}

#[test]
fn escape_while_closed_changes_nothing() {
    let mut state = DrawerState::default();
    assert!(!state.handle(DrawerEvent::EscapePressed));
    assert!(!state.is_open());
}

// =============================================================
// SectionLink
// =============================================================

#[test]
fn section_link_requires_existing_fragment_target() {
    let exists = |id: &str| id == "about";
    assert!(SectionLink::from_anchor("#about", "About", exists).is_some());
    assert!(SectionLink::from_anchor("#missing", "Missing", exists).is_none());
    assert!(SectionLink::from_anchor("cv.pdf", "CV", exists).is_none());
    assert!(SectionLink::from_anchor("#", "Top", |_| true).is_none());
}

#[test]
fn section_link_label_falls_back_to_id() {
    let link = SectionLink::from_anchor("#about", "   ", |_| true).unwrap();
    assert_eq!(link.label, "about");
    assert_eq!(link.target_id(), "about");

    let link = SectionLink::from_anchor("#about", "  About me \n", |_| true).unwrap();
    assert_eq!(link.label, "About me");
}

// =============================================================
// DrawerPolicy
// =============================================================

#[test]
fn existing_toggle_requires_the_toggle() {
    assert_eq!(
        DrawerPolicy::ExistingToggle.plan(4, false),
        Err(MountSkip::MissingAnchor("#drawerToggle"))
    );
}

#[test]
fn existing_toggle_without_links_hides_toggle() {
    assert_eq!(DrawerPolicy::ExistingToggle.plan(0, true), Ok(DrawerPlan::HideToggle));
}

#[test]
fn existing_toggle_builds_with_one_link() {
    assert_eq!(
        DrawerPolicy::ExistingToggle.plan(1, true),
        Ok(DrawerPlan::Build { synthesize_toggle: false })
    );
}

#[test]
fn synthesized_toggle_needs_minimum_links() {
    let policy = DrawerPolicy::SynthesizedToggle { min_links: 3 };
    assert_eq!(policy.plan(2, false), Err(MountSkip::TooFewLinks { found: 2, required: 3 }));
    assert_eq!(policy.plan(0, false), Err(MountSkip::NoSections));
    assert_eq!(policy.plan(3, false), Ok(DrawerPlan::Build { synthesize_toggle: true }));
}

#[test]
fn synthesized_toggle_reuses_existing_trigger() {
    let policy = DrawerPolicy::SynthesizedToggle { min_links: 3 };
    assert_eq!(policy.plan(5, true), Ok(DrawerPlan::Build { synthesize_toggle: false }));
}

#[test]
fn scroll_mode_respects_reduced_motion() {
    assert_eq!(ScrollMode::for_reduced_motion(true), ScrollMode::Instant);
    assert_eq!(ScrollMode::for_reduced_motion(false), ScrollMode::Smooth);
}
