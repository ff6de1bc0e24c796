//! Site footer with contact links.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__links">
                <a href="https://github.com/iriscalder" class="footer__link" title="GitHub">
                    <IconGlyph icon=Icon::Github/>
                </a>
                <a href="https://www.linkedin.com/in/iriscalder" class="footer__link" title="LinkedIn">
                    <IconGlyph icon=Icon::Linkedin/>
                </a>
                <a href="mailto:hello@iriscalder.dev" class="footer__link" title="Email">
                    <IconGlyph icon=Icon::Mail/>
                </a>
            </div>
            <p class="footer__colophon">"Built with Rust, Leptos, and axum."</p>
        </footer>
    }
}
