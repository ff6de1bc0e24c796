//! Resume page rendered from the static content catalog.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::content;

#[component]
pub fn ResumePage() -> impl IntoView {
    let entries = content::experience();

    view! {
        <div class="resume-page">
            <header class="resume-page__header">
                <h1>"Resume"</h1>
                <a href="/resume.pdf" class="resume-page__download" title="Download as PDF">
                    <IconGlyph icon=Icon::Document/>
                    "PDF"
                </a>
            </header>

            <section class="resume-page__section">
                <h2>"Experience"</h2>
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <article class="resume-page__entry">
                                <div class="resume-page__entry-head">
                                    <h3>{entry.role}</h3>
                                    <span class="resume-page__company">{entry.company}</span>
                                    <span class="resume-page__span">{entry.span}</span>
                                </div>
                                <p class="resume-page__summary">{entry.summary}</p>
                                <ul class="resume-page__highlights">
                                    {entry
                                        .highlights
                                        .iter()
                                        .map(|h| view! { <li>{*h}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="resume-page__section">
                <h2>"Education"</h2>
                <article class="resume-page__entry">
                    <div class="resume-page__entry-head">
                        <h3>"BSc Computer Science"</h3>
                        <span class="resume-page__company">"University of Strathspey"</span>
                        <span class="resume-page__span">"2013 — 2017"</span>
                    </div>
                </article>
            </section>
        </div>
    }
}
