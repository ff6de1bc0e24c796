//! Floating chat panel: message history, presence line, and a send box.

use leptos::prelude::*;

use wire::Envelope;

use crate::components::icon::{Icon, IconGlyph};
use crate::net::socket_client::ChatSender;
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, ConnectionStatus};

/// Chat panel showing message history and an input for sending messages.
///
/// Mounted only by the chat gate, after the warm-up delay and history boot.
/// Sends go through the shared [`ChatSender`] context; while the socket is
/// still warming up the input stays disabled rather than dropping text.
#[component]
pub fn ChatWidget(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<ChatSender>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Pin the scroll position to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let connected = move || chat.get().connection == ConnectionStatus::Connected;

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }

        let envelope = Envelope::request(
            "chat:message",
            serde_json::json!({ "body": text.trim() }),
        );
        if sender.get().send(&envelope) {
            input.set(String::new());
        } else {
            leptos::logging::warn!("chat send dropped: no live connection");
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let placeholder = move || {
        if auth.get().is_signed_in() {
            "Say hello...".to_owned()
        } else {
            "Sign in to say hello...".to_owned()
        }
    };

    let can_send = move || connected() && auth.get().is_signed_in() && !input.get().trim().is_empty();

    let presence = move || {
        let state = chat.get();
        match state.connection {
            ConnectionStatus::Connected => format!("{} here now", state.viewers.max(1)),
            ConnectionStatus::Connecting => "connecting...".to_owned(),
            ConnectionStatus::Disconnected => "offline".to_owned(),
        }
    };

    view! {
        <div class="chat-widget" class:chat-widget--open=move || open.get()>
            <div class="chat-widget__header">
                <span class="chat-widget__title">"Chat"</span>
                <span class="chat-widget__presence">{presence}</span>
                <button class="chat-widget__close" on:click=move |_| on_close.run(()) title="Close chat">
                    <IconGlyph icon=Icon::Close/>
                </button>
            </div>

            <div class="chat-widget__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-widget__empty">"No messages yet — say hi!"</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let color = msg.color.clone();
                            let author = msg.author.clone();
                            let body = msg.body.clone();
                            view! {
                                <div class="chat-widget__message">
                                    <span class="chat-widget__author" style:color=color>
                                        {author}
                                    </span>
                                    <span class="chat-widget__body">{body}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-widget__input-row">
                <input
                    class="chat-widget__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-widget__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
