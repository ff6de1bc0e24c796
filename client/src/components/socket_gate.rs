//! Deferred provider gate for the live chat connection.
//!
//! Children render immediately and are never unmounted; the gate only
//! provides a [`ChatSender`] context that starts disconnected. After a
//! fixed warm-up delay it spawns the websocket client and swaps the
//! connected handle into the same context, so the subtree upgrades in
//! place with no visible gap. If the connection can never be established,
//! children simply keep the disconnected handle — the failure stays local.

use leptos::prelude::*;

use crate::net::socket_client::ChatSender;
use crate::state::gate::GateLifecycle;

/// Warm-up before the live connection is attempted. Long enough to keep
/// the socket out of the initial paint path; short enough that the chat
/// panel (which waits even longer) usually finds a live connection.
pub const DEFAULT_SOCKET_WARMUP_MS: u32 = 3000;

#[component]
pub fn SocketGate(
    /// Delay before the deferred connection is attempted.
    #[prop(default = DEFAULT_SOCKET_WARMUP_MS)]
    warmup_ms: u32,
    children: Children,
) -> impl IntoView {
    let sender = RwSignal::new(ChatSender::default());
    provide_context(sender);

    let gate = RwSignal::new(GateLifecycle::new());

    #[cfg(feature = "csr")]
    {
        use crate::state::chat::ChatState;

        let chat = expect_context::<RwSignal<ChatState>>();

        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_timer = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(warmup_ms))).await;
            if !alive_timer.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            // The transition guard makes a late or duplicate wake-up a no-op.
            let armed = gate.try_update(GateLifecycle::mark_ready).unwrap_or(false);
            if !armed {
                return;
            }
            let live = crate::net::socket_client::spawn_socket_client(chat);
            if sender.try_set(live).is_none() {
                gate.try_update(|g| {
                    g.mark_resolved();
                });
            }
        });
        on_cleanup(move || {
            alive.store(false, std::sync::atomic::Ordering::Relaxed);
            gate.try_update(GateLifecycle::cancel);
        });
    }

    #[cfg(not(feature = "csr"))]
    {
        let _ = (warmup_ms, gate);
    }

    children()
}
