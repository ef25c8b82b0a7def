use super::*;

#[test]
fn tab_class_marks_only_active_tab() {
    assert!(tab_class(true).contains("nav__tab--active"));
    assert!(!tab_class(false).contains("nav__tab--active"));
}

#[test]
fn tab_class_always_carries_base_class() {
    assert!(tab_class(true).starts_with("nav__tab "));
    assert!(tab_class(false).starts_with("nav__tab "));
}
