use super::*;

#[test]
fn ui_state_default_is_light_with_nav_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.mobile_nav_open);
}
