#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn map_button_primary_for_left_and_unknown() {
    assert_eq!(map_button(0), Button::Primary);
    assert_eq!(map_button(7), Button::Primary);
}

#[test]
fn map_button_middle_and_secondary() {
    assert_eq!(map_button(1), Button::Middle);
    assert_eq!(map_button(2), Button::Secondary);
}

#[test]
fn only_escape_is_swallowed() {
    assert!(should_prevent_default_key("Escape"));
    assert!(!should_prevent_default_key("Enter"));
    assert!(!should_prevent_default_key("a"));
}

#[test]
fn wrapper_point_subtracts_wrapper_origin() {
    let p = wrapper_point(250.0, 130.0, 50.0, 30.0);
    assert_eq!(p.x, 200.0);
    assert_eq!(p.y, 100.0);
}
