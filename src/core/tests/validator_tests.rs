use crate::core::types::Keybind;
use crate::core::validator::KeyFieldLinter;

fn keybind(action: &str, key: &str) -> Keybind {
    Keybind {
        id: 0,
        action: action.to_string(),
        key: key.to_string(),
        original_key: Some(key.to_string()),
        is_synthetic: false,
    }
}

#[test]
fn test_clean_fields_produce_no_issues() {
    let linter = KeyFieldLinter::new();

    for field in [
        "ctrl+1",
        "Ctrl+Shift+F11",
        "Any+esc",
        "sc_w",
        "a",
        "1,1",
        "numpad7",
        "meta+space",
        "Shift+@",
    ] {
        assert!(
            linter.lint_key_field(field).is_empty(),
            "unexpected issues for {:?}: {:?}",
            field,
            linter.lint_key_field(field)
        );
    }
}

#[test]
fn test_misspelled_modifier_flagged() {
    let linter = KeyFieldLinter::new();

    let messages = linter.lint_key_field("cttrl+k");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("cttrl"));
}

#[test]
fn test_empty_field_flagged() {
    let linter = KeyFieldLinter::new();
    assert_eq!(linter.lint_key_field(""), vec!["empty key field"]);
}

#[test]
fn test_empty_segment_flagged() {
    let linter = KeyFieldLinter::new();
    let messages = linter.lint_key_field("1,,2");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("empty chord segment"));
}

#[test]
fn test_each_bad_token_reported() {
    let linter = KeyFieldLinter::new();
    let messages = linter.lint_key_field("blorp+qux+1");
    assert_eq!(messages.len(), 2);
}

#[test]
fn test_lint_keybinds_skips_unbound() {
    let linter = KeyFieldLinter::new();

    let keybinds = vec![keybind("moveforward", "unbound"), keybind("crawl", "")];
    assert!(linter.lint_keybinds(&keybinds).is_empty());
}

#[test]
fn test_lint_keybinds_reports_index_and_action() {
    let linter = KeyFieldLinter::new();

    let keybinds = vec![
        keybind("moveforward", "sc_w"),
        keybind("group1", "cttrl+1"),
    ];

    let issues = linter.lint_keybinds(&keybinds);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].keybind_index, 1);
    assert_eq!(issues[0].action, "group1");
}
