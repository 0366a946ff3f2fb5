#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}

#[test]
fn toggle_icon_points_at_next_mode() {
    assert_eq!(toggle_icon(Theme::Light), "\u{263E}");
    assert_eq!(toggle_icon(Theme::Dark), "\u{2600}");
}

#[test]
fn toggle_label_names_target_mode() {
    assert_eq!(toggle_label(Theme::Light), "Switch to dark mode");
    assert_eq!(toggle_label(Theme::Dark), "Switch to light mode");
}
