use super::*;

#[test]
fn ui_state_default_everything_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.search_open);
    assert!(!state.user_menu_open);
}

#[test]
fn open_search_closes_user_menu() {
    let mut state = UiState { user_menu_open: true, ..UiState::default() };
    state.open_search();
    assert!(state.search_open);
    assert!(!state.user_menu_open);
}

#[test]
fn toggle_user_menu_closes_search_when_opening() {
    let mut state = UiState { search_open: true, ..UiState::default() };
    state.toggle_user_menu();
    assert!(state.user_menu_open);
    assert!(!state.search_open);
    state.toggle_user_menu();
    assert!(!state.user_menu_open);
}

#[test]
fn dismiss_closes_all_overlays_but_keeps_theme() {
    let mut state = UiState { dark_mode: true, search_open: true, user_menu_open: true };
    state.dismiss();
    assert_eq!(state, UiState { dark_mode: true, ..UiState::default() });
}
