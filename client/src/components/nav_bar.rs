//! Site navigation bar with theme toggle and chat launcher.
//!
//! Plain anchors: the router intercepts same-origin links for client-side
//! navigation, so no dedicated link component is needed.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let toggle_theme = move |_| {
        ui.update(|u| u.dark_mode = theme::toggle(u.dark_mode));
    };

    let toggle_chat = move |_| {
        ui.update(|u| u.chat_open = !u.chat_open);
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Iris Calder"</a>

            <div class="nav-bar__links">
                <a href="/resume" class="nav-bar__link">"Resume"</a>
                <a href="/projects" class="nav-bar__link">"Projects"</a>
                <a href="/videos" class="nav-bar__link">"Videos"</a>
            </div>

            <div class="nav-bar__actions">
                <button class="nav-bar__action" on:click=toggle_theme title="Toggle theme">
                    {move || {
                        if ui.get().dark_mode {
                            view! { <IconGlyph icon=Icon::Sun/> }.into_any()
                        } else {
                            view! { <IconGlyph icon=Icon::Moon/> }.into_any()
                        }
                    }}
                </button>
                <button class="nav-bar__action" on:click=toggle_chat title="Chat">
                    <IconGlyph icon=Icon::Chat/>
                </button>
            </div>
        </nav>
    }
}
