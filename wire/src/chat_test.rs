use super::*;

#[test]
fn viewer_guest_defaults_false_on_deserialize() {
    let viewer: Viewer =
        serde_json::from_str(r##"{"id":"v-1","name":"Ada","color":"#aabbcc"}"##).expect("viewer");
    assert!(!viewer.guest);
}

#[test]
fn viewer_round_trips() {
    let viewer = Viewer {
        id: "v-1".to_owned(),
        name: "Ada".to_owned(),
        color: "#aabbcc".to_owned(),
        guest: true,
    };
    let text = serde_json::to_string(&viewer).expect("encode");
    let back: Viewer = serde_json::from_str(&text).expect("decode");
    assert_eq!(back, viewer);
}

#[test]
fn chat_message_round_trips() {
    let msg = ChatMessage {
        id: "m-1".to_owned(),
        author: "Ada".to_owned(),
        color: "#aabbcc".to_owned(),
        body: "hello".to_owned(),
        sent_at: 1_700_000_000_000,
    };
    let text = serde_json::to_string(&msg).expect("encode");
    let back: ChatMessage = serde_json::from_str(&text).expect("decode");
    assert_eq!(back, msg);
}
