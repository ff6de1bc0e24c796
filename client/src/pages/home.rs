//! Landing page.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = content::projects().into_iter().take(3).collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Iris Calder"</h1>
                <p class="home-page__tagline">
                    "Systems-minded web engineer. I build small, fast services and the \
                     interfaces that sit on top of them."
                </p>
                <div class="home-page__cta">
                    <a href="/projects" class="btn btn--primary">"See projects"</a>
                    <a href="/resume" class="btn">"Read resume"</a>
                </div>
            </section>

            <section class="home-page__featured">
                <h2>"Recent work"</h2>
                <ul class="home-page__list">
                    {featured
                        .into_iter()
                        .map(|p| {
                            view! {
                                <li class="home-page__item">
                                    <span class="home-page__item-title">{p.title}</span>
                                    <span class="home-page__item-blurb">{p.blurb}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}
