use super::*;

fn links() -> SpyState {
    SpyState::new(vec!["#about".into(), "#publications".into(), "#contact".into()])
}

#[test]
fn most_visible_ignores_non_intersecting() {
    let samples = [Observation::new("about", false, 0.9), Observation::new("contact", true, 0.3)];
    assert_eq!(most_visible(&samples).map(|s| s.target_id.as_str()), Some("contact"));
}

#[test]
fn most_visible_none_when_nothing_intersects() {
    let samples = [Observation::new("about", false, 0.0)];
    assert!(most_visible(&samples).is_none());
    assert!(most_visible(&[]).is_none());
}

#[test]
fn most_visible_tie_keeps_first_in_callback_order() {
    let samples = [
        Observation::new("publications", true, 0.5),
        Observation::new("about", true, 0.5),
    ];
    assert_eq!(most_visible(&samples).map(|s| s.target_id.as_str()), Some("publications"));
}

#[test]
fn observe_marks_exactly_the_highest_ratio_link() {
    let mut spy = links();
    let changed = spy.observe(&[
        Observation::new("about", true, 0.25),
        Observation::new("publications", true, 0.75),
        Observation::new("contact", true, 0.5),
    ]);
    assert!(changed);
    assert_eq!(spy.active(), Some(1));
    let marked = (0..3).filter(|&i| spy.is_active(i)).count();
    assert_eq!(marked, 1);
}

#[test]
fn observe_without_intersection_keeps_previous_marking() {
    let mut spy = links();
    spy.observe(&[Observation::new("contact", true, 0.5)]);
    assert_eq!(spy.active(), Some(2));

    let changed = spy.observe(&[Observation::new("contact", false, 0.0)]);
    assert!(!changed);
    assert_eq!(spy.active(), Some(2));
}

#[test]
fn observe_unlinked_section_clears_all() {
    let mut spy = links();
    spy.observe(&[Observation::new("about", true, 0.5)]);
    assert!(spy.observe(&[Observation::new("teaching", true, 0.9)]));
    assert_eq!(spy.active(), None);
}

#[test]
fn fragment_target_requires_hash_and_id() {
    assert_eq!(fragment_target("#about"), Some("about"));
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target("about.html"), None);
    assert_eq!(fragment_target("/#about"), None);
}
