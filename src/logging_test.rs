use super::*;

#[test]
fn redirected_stderr_gets_no_color() {
    assert!(!use_color(false));
}

#[test]
fn terminal_color_follows_no_color() {
    let expected = std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty());
    assert_eq!(use_color(true), expected);
}
