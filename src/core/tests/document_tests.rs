use crate::core::defaults::DefaultsIndex;
use crate::core::document::KeybindDocument;
use crate::core::types::ConfigLine;

const SAMPLE: &str = "\
// SPEED CONTROLS
unbindall

bind sc_w moveforward
bind Ctrl+1 group1
bind 1+ctrl drawinmap
fancydirective 42
bind unbound crawl
";

fn sample_defaults() -> DefaultsIndex {
    let mut defaults = DefaultsIndex::new();
    defaults.insert("moveforward".to_string(), "sc_w".to_string());
    defaults.insert("group1".to_string(), "alt+1".to_string());
    defaults.insert("group1".to_string(), "ctrl+1".to_string());
    defaults.insert("togglepause".to_string(), "pause".to_string());
    defaults
}

#[test]
fn test_parse_splits_binds_from_others() {
    let doc = KeybindDocument::parse(SAMPLE, DefaultsIndex::new());

    assert_eq!(doc.keybinds().len(), 4);
    // comment, unbindall, blank, fancydirective
    assert_eq!(doc.other_lines().len(), 4);
}

#[test]
fn test_ids_are_source_line_indices() {
    let doc = KeybindDocument::parse(SAMPLE, DefaultsIndex::new());

    let forward = &doc.keybinds()[0];
    assert_eq!(forward.action, "moveforward");
    assert_eq!(forward.id, 3);
    assert_eq!(forward.original_key.as_deref(), Some("sc_w"));
    assert!(!forward.is_synthetic);
}

#[test]
fn test_synthetic_injection_for_missing_defaults() {
    let doc = KeybindDocument::parse(SAMPLE, sample_defaults());

    // moveforward and group1 exist in the file; togglepause does not
    assert_eq!(doc.keybinds().len(), 5);
    let synthetic = doc.keybinds().last().unwrap();
    assert_eq!(synthetic.action, "togglepause");
    assert_eq!(synthetic.key, "unbound");
    assert_eq!(synthetic.original_key, None);
    assert!(synthetic.is_synthetic);
    assert!(!synthetic.is_bound());
    // Ids continue past the last source line
    assert_eq!(synthetic.id, 8);
}

#[test]
fn test_duplicates_computed_on_load() {
    let doc = KeybindDocument::parse(SAMPLE, DefaultsIndex::new());

    // Ctrl+1 (group1) and 1+ctrl (drawinmap) collide canonically
    assert_eq!(doc.duplicate_keys().len(), 1);
    assert!(doc.duplicate_keys().contains("ctrl+1"));

    let group1 = doc.keybind(doc.find_action("group1").unwrap()).unwrap();
    assert!(doc.is_duplicate(group1));

    let forward = doc.keybind(doc.find_action("moveforward").unwrap()).unwrap();
    assert!(!doc.is_duplicate(forward));
}

#[test]
fn test_unbind_clears_duplicate() {
    let mut doc = KeybindDocument::parse(SAMPLE, DefaultsIndex::new());
    let index = doc.find_action("drawinmap").unwrap();

    assert!(doc.unbind(index));

    assert!(!doc.keybind(index).unwrap().is_bound());
    assert!(doc.duplicate_keys().is_empty());
}

#[test]
fn test_set_key_recomputes_duplicates() {
    let mut doc = KeybindDocument::parse(SAMPLE, DefaultsIndex::new());
    let index = doc.find_action("moveforward").unwrap();

    assert!(doc.set_key(index, "Ctl+1"));

    // Now three keybinds share ctrl+1
    assert!(doc.duplicate_keys().contains("ctrl+1"));
    assert!(doc.is_duplicate(doc.keybind(index).unwrap()));
    assert!(doc.keybind(index).unwrap().is_changed());
}

#[test]
fn test_set_key_out_of_range() {
    let mut doc = KeybindDocument::parse(SAMPLE, DefaultsIndex::new());
    assert!(!doc.set_key(999, "sc_x"));
    assert_eq!(doc.reset(999), None);
}

#[test]
fn test_reset_restores_provenance_default() {
    let mut doc = KeybindDocument::parse(SAMPLE, sample_defaults());
    let index = doc.find_action("group1").unwrap();

    doc.set_key(index, "sc_x");
    assert!(doc.keybind(index).unwrap().is_changed());

    // Original "Ctrl+1" matches the second default candidate
    assert_eq!(doc.reset(index), Some("ctrl+1".to_string()));
    assert!(!doc.keybind(index).unwrap().is_changed());
}

#[test]
fn test_render_format() {
    let doc = KeybindDocument::parse(SAMPLE, DefaultsIndex::new());
    let rendered = doc.render();
    let lines: Vec<&str> = rendered.lines().collect();

    // Header first, then verbatim non-bind lines (the original unbindall
    // is skipped), then bound keybinds
    assert_eq!(lines[0], "unbindall");
    assert_eq!(lines[1], "// SPEED CONTROLS");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "fancydirective 42");
    assert_eq!(lines[4], "bind          sc_w             moveforward");
    assert_eq!(lines[5], "bind          Ctrl+1           group1");
    assert_eq!(lines[6], "bind          1+ctrl           drawinmap");
    // "bind unbound crawl" is dropped: unbound keybinds are not written
    assert_eq!(lines.len(), 7);
    assert_eq!(rendered.matches("unbindall").count(), 1);
}

#[test]
fn test_render_pads_short_keys_only() {
    let mut doc = KeybindDocument::parse("bind sc_w moveforward\n", DefaultsIndex::new());
    doc.set_key(0, "ctrl+shift+alt+meta+f12");

    let rendered = doc.render();
    // Long keys keep their two-space separator rather than truncating
    assert!(rendered.contains("bind          ctrl+shift+alt+meta+f12  moveforward"));
}

#[test]
fn test_round_trip_preserves_bindings_and_others() {
    let original = KeybindDocument::parse(SAMPLE, DefaultsIndex::new());
    let reloaded = KeybindDocument::parse(&original.render(), DefaultsIndex::new());

    // Same bound (action, canonical key) pairs
    let bound = |doc: &KeybindDocument| {
        let mut pairs: Vec<(String, String)> = doc
            .keybinds()
            .iter()
            .filter(|kb| kb.is_bound())
            .map(|kb| (kb.action.clone(), crate::core::normalize(&kb.key)))
            .collect();
        pairs.sort();
        pairs
    };
    assert_eq!(bound(&original), bound(&reloaded));

    // Non-bind lines preserved verbatim, in order
    let raws = |doc: &KeybindDocument| {
        doc.other_lines()
            .iter()
            .filter_map(ConfigLine::raw)
            .map(str::to_string)
            .collect::<Vec<_>>()
    };
    let original_raws: Vec<String> = raws(&original)
        .into_iter()
        .filter(|raw| !raw.trim().to_lowercase().starts_with("unbindall"))
        .collect();
    let reloaded_raws: Vec<String> = raws(&reloaded)
        .into_iter()
        .filter(|raw| !raw.trim().to_lowercase().starts_with("unbindall"))
        .collect();
    assert_eq!(original_raws, reloaded_raws);

    // Rendering again is a fixed point
    assert_eq!(original.render(), reloaded.render());
}
