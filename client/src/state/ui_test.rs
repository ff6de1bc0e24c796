use super::*;

#[test]
fn ui_defaults_to_light_theme_and_closed_chat() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.chat_open);
}
