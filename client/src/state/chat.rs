#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use wire::ChatMessage;

/// Connection status of the live chat socket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// State for the chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub connection: ConnectionStatus,
    /// Live viewer count from presence broadcasts.
    pub viewers: usize,
}

impl ChatState {
    /// Append a message, ignoring duplicates. The sender's own message can
    /// arrive both as the correlated reply and as a broadcast copy.
    pub fn push_message(&mut self, message: ChatMessage) {
        if self.messages.iter().any(|m| m.id == message.id) {
            return;
        }
        self.messages.push(message);
    }

    /// Install fetched history, keeping any live messages that raced ahead
    /// of the fetch (they are newer than anything in the page).
    pub fn replace_history(&mut self, history: Vec<ChatMessage>) {
        let live: Vec<ChatMessage> = self
            .messages
            .drain(..)
            .filter(|m| !history.iter().any(|h| h.id == m.id))
            .collect();
        self.messages = history;
        self.messages.extend(live);
    }
}
