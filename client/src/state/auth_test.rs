use super::*;

fn viewer() -> Viewer {
    Viewer {
        id: "v-1".to_owned(),
        name: "Ada".to_owned(),
        color: "#e07a5f".to_owned(),
        guest: true,
    }
}

#[test]
fn auth_starts_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn settle_with_viewer_signs_in() {
    let mut state = AuthState::default();
    state.settle(Some(viewer()));
    assert!(!state.loading);
    assert!(state.is_signed_in());
}

#[test]
fn settle_with_none_finishes_loading_signed_out() {
    let mut state = AuthState::default();
    state.settle(None);
    assert!(!state.loading);
    assert!(!state.is_signed_in());
}
