//! Deferred panel gate for the chat widget.
//!
//! Until a fixed warm-up delay elapses, the panel and everything behind it
//! stay entirely out of the tree — the open/closed toggle is not even
//! consulted. After the delay the gate fetches the chat history (the
//! panel's backing data); while that is pending and the toggle is open it
//! shows a minimal placeholder, and once loaded the real widget mounts
//! with the toggle and close callback passed through unchanged. A failed
//! fetch means the panel never appears; it never takes the page down.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::state::chat::ChatState;
use crate::state::gate::GateLifecycle;

/// Warm-up before the chat panel may mount. Longer than the socket gate's
/// delay: the panel is optional and should lose every race for bandwidth.
pub const DEFAULT_CHAT_WARMUP_MS: u32 = 5000;

/// Outcome of the panel's deferred boot.
#[derive(Clone, Debug)]
enum PanelBoot {
    /// Warm-up has not elapsed; nothing has been fetched.
    Idle,
    /// History fetch failed; the panel stays absent.
    Failed,
    /// Backing data installed; the widget may mount.
    Loaded,
}

#[component]
pub fn ChatGate(
    /// Externally owned open/closed toggle. The gate only reads it.
    #[prop(into)]
    open: Signal<bool>,
    /// Close request, forwarded to the widget unchanged.
    on_close: Callback<()>,
    /// Delay before the deferred panel may load.
    #[prop(default = DEFAULT_CHAT_WARMUP_MS)]
    warmup_ms: u32,
) -> impl IntoView {
    let gate = RwSignal::new(GateLifecycle::new());
    let chat = expect_context::<RwSignal<ChatState>>();

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_timer = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(warmup_ms))).await;
            if !alive_timer.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            gate.try_update(GateLifecycle::mark_ready);
        });
        on_cleanup(move || {
            alive.store(false, std::sync::atomic::Ordering::Relaxed);
            gate.try_update(GateLifecycle::cancel);
        });
    }

    #[cfg(not(feature = "csr"))]
    {
        let _ = warmup_ms;
    }

    // Deferred boot: reruns when the ready flag flips, fetches once.
    let boot = LocalResource::new(move || {
        let armed = gate.get().is_ready();
        async move {
            if !armed {
                return PanelBoot::Idle;
            }
            match crate::net::api::fetch_chat_history(50).await {
                Ok(history) => {
                    chat.try_update(|c| c.replace_history(history));
                    gate.try_update(|g| {
                        g.mark_resolved();
                    });
                    PanelBoot::Loaded
                }
                Err(e) => {
                    leptos::logging::warn!("chat history fetch failed: {e}");
                    PanelBoot::Failed
                }
            }
        }
    });

    view! {
        <Show when=move || gate.get().is_ready() && open.get()>
            {move || match boot.get() {
                None | Some(PanelBoot::Idle) => view! {
                    <div class="chat-widget chat-widget--loading">"Opening chat..."</div>
                }
                    .into_any(),
                Some(PanelBoot::Failed) => ().into_any(),
                Some(PanelBoot::Loaded) => view! {
                    <ChatWidget open=open on_close=on_close/>
                }
                    .into_any(),
            }}
        </Show>
    }
}
