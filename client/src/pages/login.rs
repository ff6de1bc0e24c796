//! Sign-in page.
//!
//! Guests pick a display name and get a session; that is all the chat
//! needs. Identity-provider sign-in goes through the same backend session
//! flow and is surfaced here only when the server advertises it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let failed = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        let display_name = name.get();
        if display_name.trim().is_empty() || pending.get() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            pending.set(true);
            failed.set(false);
            let display_name = display_name.trim().to_owned();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let viewer = crate::net::api::guest_sign_in(&display_name).await;
                let ok = viewer.is_some();
                auth.try_update(|a| a.settle(viewer));
                pending.try_set(false);
                if ok {
                    navigate("/", NavigateOptions::default());
                } else {
                    failed.try_set(true);
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (display_name, &navigate, auth);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Hello"</h1>
            <p>"Pick a name to join the chat and leave a note."</p>

            <label class="login-page__label">
                "Display name"
                <input
                    class="login-page__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>

            <button
                class="btn btn--primary"
                on:click=move |_| submit.run(())
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Signing in..." } else { "Continue" }}
            </button>

            <Show when=move || failed.get()>
                <p class="login-page__error">"Sign-in failed. Try again in a moment."</p>
            </Show>
        </div>
    }
}
