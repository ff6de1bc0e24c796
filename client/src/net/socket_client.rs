//! WebSocket chat client.
//!
//! The socket client manages the websocket lifecycle: ticket fetch,
//! connection, reconnection with exponential backoff, and envelope dispatch
//! into the chat state signals. Browser IO is gated behind the `csr`
//! feature; parsing and dispatch are plain functions so they stay
//! unit-testable natively.

use leptos::prelude::{RwSignal, Update};

use wire::{ChatMessage, Envelope, Status};

use crate::state::chat::{ChatState, ConnectionStatus};

/// Handle for sending envelopes over the live connection.
///
/// The default handle is disconnected: sends are dropped and report `false`.
/// The socket gate swaps in a connected handle once the warm-up elapses and
/// the client task is running.
#[derive(Clone, Debug, Default)]
pub struct ChatSender {
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl ChatSender {
    #[must_use]
    pub fn connected(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }

    /// Send an envelope. Returns `false` if there is no live connection or
    /// the channel has closed.
    pub fn send(&self, envelope: &Envelope) -> bool {
        let Some(tx) = &self.tx else {
            return false;
        };
        match envelope.encode() {
            Ok(json) => tx.unbounded_send(json).is_ok(),
            Err(_) => false,
        }
    }
}

/// Dispatch an incoming envelope to the chat state.
///
/// Updates go through `try_update` so an envelope arriving after the owning
/// scope is disposed is a no-op instead of a panic.
pub fn dispatch_envelope(envelope: &Envelope, chat: RwSignal<ChatState>) {
    match envelope.event.as_str() {
        "session:connected" => {
            let viewers = viewer_count(envelope);
            chat.try_update(|c| {
                c.connection = ConnectionStatus::Connected;
                if let Some(n) = viewers {
                    c.viewers = n;
                }
            });
        }

        "chat:message" if envelope.status == Status::Done => {
            if let Some(message) = parse_chat_message(&envelope.data) {
                chat.try_update(|c| c.push_message(message));
            }
        }

        "chat:presence" => {
            if let Some(n) = viewer_count(envelope) {
                chat.try_update(|c| c.viewers = n);
            }
        }

        _ if envelope.status == Status::Error => {
            leptos::logging::warn!(
                "chat error envelope: event={} data={}",
                envelope.event,
                envelope.data
            );
        }

        _ => {}
    }
}

/// Parse a chat message payload.
pub fn parse_chat_message(data: &serde_json::Value) -> Option<ChatMessage> {
    serde_json::from_value(data.clone()).ok()
}

fn viewer_count(envelope: &Envelope) -> Option<usize> {
    envelope
        .data
        .get("viewers")
        .and_then(serde_json::Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}

/// Spawn the websocket client lifecycle as a local async task and return a
/// connected sender handle.
#[cfg(feature = "csr")]
pub fn spawn_socket_client(chat: RwSignal<ChatState>) -> ChatSender {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    let sender = ChatSender::connected(tx.clone());

    leptos::task::spawn_local(socket_loop(chat, rx));

    sender
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "csr")]
async fn socket_loop(
    chat: RwSignal<ChatState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        chat.try_update(|c| c.connection = ConnectionStatus::Connecting);

        // Get a one-time upgrade ticket.
        let ticket = match crate::net::api::create_ws_ticket().await {
            Ok(t) => t,
            Err(e) => {
                leptos::logging::warn!("ws ticket failed: {e}");
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
                backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
                continue;
            }
        };

        let ws_url = websocket_url(&ticket);
        match connect_and_run(&ws_url, chat, &rx).await {
            Ok(()) => {
                leptos::logging::log!("ws disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("ws error: {e}");
            }
        }

        chat.try_update(|c| c.connection = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

#[cfg(feature = "csr")]
fn websocket_url(ticket: &str) -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    format!("{ws_proto}://{host}/api/ws?ticket={ticket}")
}

/// Connect to the websocket and process messages until disconnect.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    chat: RwSignal<ChatState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Forward outgoing envelopes from our channel to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(json) = rx_borrow.next().await {
            if ws_write.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch incoming envelopes.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(envelope) = Envelope::decode(&text) {
                        dispatch_envelope(&envelope, chat);
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("ws recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

#[cfg(test)]
#[path = "socket_client_test.rs"]
mod socket_client_test;
