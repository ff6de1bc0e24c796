//! Owner page: session details and a live backend health readout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login once the session fetch has settled signed-out.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_signed_in() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Health readout — fetches on mount.
    let health = LocalResource::new(|| crate::net::api::fetch_health());

    let sign_out = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.try_update(|a| a.settle(None));
            });
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Site admin"</h1>

            <section class="admin-page__section">
                <h2>"Session"</h2>
                {move || {
                    auth.get().viewer.map(|viewer| {
                        let kind = if viewer.guest { "guest" } else { "verified" };
                        view! {
                            <dl class="admin-page__facts">
                                <dt>"Signed in as"</dt>
                                <dd>{viewer.name.clone()}</dd>
                                <dt>"Session kind"</dt>
                                <dd>{kind}</dd>
                                <dt>"Visitor id"</dt>
                                <dd class="admin-page__mono">{viewer.id.clone()}</dd>
                            </dl>
                        }
                    })
                }}
                <button class="btn" on:click=sign_out>"Sign out"</button>
            </section>

            <section class="admin-page__section">
                <h2>"Backend"</h2>
                <Suspense fallback=move || view! { <p>"Checking..."</p> }>
                    {move || {
                        health.get().map(|readout| match readout {
                            Some(status) => view! {
                                <dl class="admin-page__facts">
                                    <dt>"Status"</dt>
                                    <dd>{status.status.clone()}</dd>
                                    <dt>"Database"</dt>
                                    <dd>{status.database.clone()}</dd>
                                </dl>
                            }
                                .into_any(),
                            None => view! {
                                <p class="admin-page__error">"Backend unreachable."</p>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
