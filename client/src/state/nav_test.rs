use super::*;

#[test]
fn nav_state_default_all_closed() {
    let state = NavState::default();
    assert!(!state.resources_open);
    assert!(!state.mobile_menu_open);
    assert!(!state.any_open());
}

#[test]
fn toggle_resources_flips_only_resources() {
    let mut state = NavState::default();
    state.toggle_resources();
    assert!(state.resources_open);
    assert!(!state.mobile_menu_open);
    state.toggle_resources();
    assert!(!state.resources_open);
}

#[test]
fn toggle_mobile_menu_flips_only_mobile_menu() {
    let mut state = NavState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    assert!(!state.resources_open);
}

#[test]
fn overlays_are_independent() {
    let mut state = NavState::default();
    state.toggle_resources();
    state.toggle_mobile_menu();
    assert!(state.resources_open);
    assert!(state.mobile_menu_open);

    state.close_resources();
    assert!(!state.resources_open);
    assert!(state.mobile_menu_open);
}

#[test]
fn close_is_idempotent() {
    let mut state = NavState::default();
    state.close_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}
