use super::*;

fn msg(id: &str, body: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_owned(),
        author: "Ada".to_owned(),
        color: "#e07a5f".to_owned(),
        body: body.to_owned(),
        sent_at: 1_700_000_000_000,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_starts_disconnected_and_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert_eq!(state.connection, ConnectionStatus::Disconnected);
    assert_eq!(state.viewers, 0);
}

// =============================================================
// push_message
// =============================================================

#[test]
fn push_message_appends() {
    let mut state = ChatState::default();
    state.push_message(msg("m-1", "hi"));
    state.push_message(msg("m-2", "there"));
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn push_message_drops_duplicates_by_id() {
    let mut state = ChatState::default();
    state.push_message(msg("m-1", "hi"));
    state.push_message(msg("m-1", "hi again"));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].body, "hi");
}

// =============================================================
// replace_history
// =============================================================

#[test]
fn replace_history_installs_fetched_messages() {
    let mut state = ChatState::default();
    state.replace_history(vec![msg("m-1", "old"), msg("m-2", "older")]);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn replace_history_keeps_live_messages_that_raced_ahead() {
    let mut state = ChatState::default();
    state.push_message(msg("m-3", "live"));
    state.replace_history(vec![msg("m-1", "old"), msg("m-2", "older")]);
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages.last().expect("live message").id, "m-3");
}

#[test]
fn replace_history_deduplicates_overlap() {
    let mut state = ChatState::default();
    state.push_message(msg("m-2", "live copy"));
    state.replace_history(vec![msg("m-1", "old"), msg("m-2", "history copy")]);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(
        state.messages.iter().filter(|m| m.id == "m-2").count(),
        1
    );
}
