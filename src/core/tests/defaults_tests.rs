use crate::core::defaults::DefaultsIndex;
use crate::core::types::Keybind;

fn keybind(action: &str, key: &str, original: Option<&str>, synthetic: bool) -> Keybind {
    Keybind {
        id: 0,
        action: action.to_string(),
        key: key.to_string(),
        original_key: original.map(str::to_string),
        is_synthetic: synthetic,
    }
}

#[test]
fn test_from_content_collects_in_order() {
    let content = "\
// defaults
bind alt+1 group1
bind ctrl+1 group1
bind sc_w moveforward
junk line
";
    let index = DefaultsIndex::from_content(content);

    assert_eq!(index.keys_for("group1"), ["alt+1", "ctrl+1"]);
    assert_eq!(index.primary_key("group1"), Some("alt+1"));
    assert_eq!(index.primary_key("moveforward"), Some("sc_w"));
    assert_eq!(index.primary_key("missing"), None);
}

#[test]
fn test_empty_index() {
    let index = DefaultsIndex::new();
    assert!(index.is_empty());
    assert_eq!(index.primary_key("anything"), None);
    assert!(index.keys_for("anything").is_empty());
}

#[test]
fn test_reset_prefers_original_provenance_match() {
    let mut index = DefaultsIndex::new();
    index.insert("group1".to_string(), "alt+1".to_string());
    index.insert("group1".to_string(), "ctrl+1".to_string());

    // Original key matches the second default; reset keeps it rather than
    // jumping to the primary
    let kb = keybind("group1", "sc_x", Some("ctrl+1"), false);
    assert_eq!(index.resolve_reset_target(&kb), "ctrl+1");
}

#[test]
fn test_reset_provenance_match_is_canonical() {
    let mut index = DefaultsIndex::new();
    index.insert("group1".to_string(), "alt+1".to_string());
    index.insert("group1".to_string(), "ctrl+1".to_string());

    // "1+Ctl" spells "ctrl+1" differently; canonical matching still finds it
    let kb = keybind("group1", "sc_x", Some("1+Ctl"), false);
    assert_eq!(index.resolve_reset_target(&kb), "ctrl+1");
}

#[test]
fn test_reset_falls_back_to_current_key_match() {
    let mut index = DefaultsIndex::new();
    index.insert("group1".to_string(), "alt+1".to_string());
    index.insert("group1".to_string(), "ctrl+1".to_string());

    // Original matches nothing, but the current key is the second default
    let kb = keybind("group1", "1+ctrl", Some("sc_q"), false);
    assert_eq!(index.resolve_reset_target(&kb), "ctrl+1");
}

#[test]
fn test_reset_falls_back_to_primary_default() {
    let mut index = DefaultsIndex::new();
    index.insert("group1".to_string(), "alt+1".to_string());
    index.insert("group1".to_string(), "ctrl+1".to_string());

    let kb = keybind("group1", "sc_x", Some("sc_q"), false);
    assert_eq!(index.resolve_reset_target(&kb), "alt+1");
}

#[test]
fn test_reset_without_defaults_restores_original() {
    let index = DefaultsIndex::new();
    let kb = keybind("group1", "sc_x", Some("ctrl+1"), false);
    assert_eq!(index.resolve_reset_target(&kb), "ctrl+1");
}

#[test]
fn test_reset_synthetic_without_defaults_is_unbound() {
    let index = DefaultsIndex::new();
    let kb = keybind("group1", "sc_x", None, true);
    assert_eq!(index.resolve_reset_target(&kb), "unbound");
}

#[test]
fn test_reset_synthetic_with_defaults_uses_primary() {
    let mut index = DefaultsIndex::new();
    index.insert("group1".to_string(), "alt+1".to_string());

    let kb = keybind("group1", "unbound", None, true);
    assert_eq!(index.resolve_reset_target(&kb), "alt+1");
}
