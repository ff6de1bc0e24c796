//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::chat_gate::ChatGate;
use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::components::socket_gate::SocketGate;
use crate::pages::{
    admin::AdminPage, home::HomePage, login::LoginPage, projects::ProjectsPage,
    resume::ResumePage, videos::VideosPage,
};
use crate::state::{auth::AuthState, chat::ChatState, ui::UiState};
use crate::util::theme;

/// Root application component.
///
/// Provides all shared state contexts, sets up client-side routing, and
/// wraps the page in the socket gate so the live-connection context is
/// available everywhere without delaying the first paint.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Shared reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState {
        dark_mode: theme::initial_dark_mode(),
        chat_open: false,
    });

    provide_context(auth);
    provide_context(chat);
    provide_context(ui);

    theme::apply(ui.get_untracked().dark_mode);

    // Resolve the session once at startup; pages key off `loading`.
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let viewer = crate::net::api::fetch_current_viewer().await;
            auth.try_update(|a| a.settle(viewer));
        });
    }

    view! {
        <Title text="Iris Calder"/>

        <Router>
            <SocketGate>
                <NavBar/>
                <main class="site-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("resume") view=ResumePage/>
                        <Route path=StaticSegment("projects") view=ProjectsPage/>
                        <Route path=StaticSegment("videos") view=VideosPage/>
                        <Route path=StaticSegment("admin") view=AdminPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                    </Routes>
                </main>
                <Footer/>
                <ChatDock/>
            </SocketGate>
        </Router>
    }
}

/// Chat launcher plus the deferred panel gate.
///
/// Owns nothing but the wiring: the open toggle lives in [`UiState`] and the
/// gate decides when the panel may exist at all.
#[component]
fn ChatDock() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let open = Signal::derive(move || ui.get().chat_open);
    let on_close = Callback::new(move |()| {
        ui.update(|u| u.chat_open = false);
    });

    view! {
        <div class="chat-dock">
            <ChatGate open=open on_close=on_close/>
        </div>
    }
}
