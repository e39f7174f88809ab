use super::*;

#[test]
fn defaults_match_built_in_behavior() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.toast_ms, 1600);
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.contacts.len(), 2);
    assert_eq!(cfg.drawer, DrawerPolicy::ExistingToggle);
    assert_eq!(cfg.spy_thresholds, vec![0.25, 0.5, 0.75]);
    assert_eq!(cfg.animation, AnimationOptions::default());
    assert_eq!(cfg.log_level(), log::Level::Warn);
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(r#"{ "toast_ms": 2500, "log_level": "debug" }"#).unwrap();
    assert_eq!(cfg.toast_ms, 2500);
    assert_eq!(cfg.log_level(), log::Level::Debug);
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.contacts, default_contacts());
}

#[test]
fn drawer_policy_parses_synthesized_toggle() {
    let cfg = SiteConfig::from_json(r#"{ "drawer": { "mode": "synthesized_toggle" } }"#).unwrap();
    assert_eq!(cfg.drawer, DrawerPolicy::SynthesizedToggle { min_links: 3 });

    let cfg = SiteConfig::from_json(r#"{ "drawer": { "mode": "synthesized_toggle", "min_links": 5 } }"#).unwrap();
    assert_eq!(cfg.drawer, DrawerPolicy::SynthesizedToggle { min_links: 5 });
}

#[test]
fn contacts_override_replaces_list() {
    let cfg = SiteConfig::from_json(r#"{ "contacts": [{ "value": "a@b.c", "hint": "Copy" }] }"#).unwrap();
    assert_eq!(cfg.contacts, vec![ContactField { value: "a@b.c".into(), hint: "Copy".into() }]);
}

#[test]
fn empty_thresholds_fall_back_to_defaults() {
    let cfg = SiteConfig::from_json(r#"{ "spy_thresholds": [] }"#).unwrap();
    assert_eq!(cfg.spy_thresholds, DEFAULT_THRESHOLDS.to_vec());
}

#[test]
fn unknown_log_level_falls_back_to_warn() {
    let cfg = SiteConfig::from_json(r#"{ "log_level": "chatty" }"#).unwrap();
    assert_eq!(cfg.log_level(), log::Level::Warn);
}

#[test]
fn malformed_json_is_an_error() {
    let err = SiteConfig::from_json("{ toast_ms: ").unwrap_err();
    assert!(err.to_string().starts_with("invalid site config"));
}
