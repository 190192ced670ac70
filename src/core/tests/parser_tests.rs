use crate::core::parser::{parse_bind_line, parse_line, parse_lines};
use crate::core::types::ConfigLine;

#[test]
fn test_parses_simple_bind() {
    assert_eq!(
        parse_line("bind sc_w moveforward"),
        ConfigLine::Bind {
            key: "sc_w".to_string(),
            action: "moveforward".to_string(),
        }
    );
}

#[test]
fn test_action_may_contain_spaces() {
    // The key field is one token; everything after it is the action
    assert_eq!(
        parse_line("bind Ctrl+1 select AllMap+_Builder"),
        ConfigLine::Bind {
            key: "Ctrl+1".to_string(),
            action: "select AllMap+_Builder".to_string(),
        }
    );
}

#[test]
fn test_tolerates_extra_whitespace() {
    assert_eq!(
        parse_line("  bind          Ctrl+1          group1  "),
        ConfigLine::Bind {
            key: "Ctrl+1".to_string(),
            action: "group1".to_string(),
        }
    );
}

#[test]
fn test_comment_line() {
    let line = "// SPEED CONTROLS";
    assert_eq!(parse_line(line), ConfigLine::Comment(line.to_string()));
}

#[test]
fn test_empty_lines() {
    assert_eq!(parse_line(""), ConfigLine::Empty(String::new()));
    assert_eq!(parse_line("   "), ConfigLine::Empty("   ".to_string()));
}

#[test]
fn test_unbindall_is_other() {
    assert_eq!(
        parse_line("unbindall"),
        ConfigLine::Other("unbindall".to_string())
    );
}

#[test]
fn test_malformed_bind_degrades_to_other() {
    // Missing action
    assert_eq!(
        parse_line("bind sc_w"),
        ConfigLine::Other("bind sc_w".to_string())
    );
    // Bare keyword
    assert_eq!(parse_line("bind"), ConfigLine::Other("bind".to_string()));
    // "bind" must be its own token
    assert_eq!(
        parse_line("bindings are here"),
        ConfigLine::Other("bindings are here".to_string())
    );
}

#[test]
fn test_unknown_directive_preserved_verbatim() {
    let line = "fakemeta  1";
    assert_eq!(parse_line(line), ConfigLine::Other(line.to_string()));
}

#[test]
fn test_bind_line_parser_outputs() {
    let (rest, (key, action)) = parse_bind_line("bind Any+esc quitmessage").unwrap();
    assert_eq!(rest, "");
    assert_eq!(key, "Any+esc");
    assert_eq!(action, "quitmessage");
}

#[test]
fn test_parse_lines_keeps_order_and_count() {
    let content = "// header\n\nbind sc_w moveforward\nunbindall\nbind sc_s movebackward\n";
    let lines = parse_lines(content);

    assert_eq!(lines.len(), 5);
    assert!(matches!(lines[0], ConfigLine::Comment(_)));
    assert!(matches!(lines[1], ConfigLine::Empty(_)));
    assert!(matches!(lines[2], ConfigLine::Bind { .. }));
    assert!(matches!(lines[3], ConfigLine::Other(_)));
    assert!(matches!(lines[4], ConfigLine::Bind { .. }));
}

#[test]
fn test_multi_tap_key_field() {
    assert_eq!(
        parse_line("bind 1,1 gotoselection"),
        ConfigLine::Bind {
            key: "1,1".to_string(),
            action: "gotoselection".to_string(),
        }
    );
}
