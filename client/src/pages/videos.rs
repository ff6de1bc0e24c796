//! Video gallery page: talks and podcast appearances.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn VideosPage() -> impl IntoView {
    view! {
        <div class="videos-page">
            <header class="videos-page__header">
                <h1>"Videos"</h1>
                <p>"Talks, meetups, and the odd podcast."</p>
            </header>

            <div class="videos-page__grid">
                {content::videos()
                    .into_iter()
                    .map(|video| {
                        view! {
                            <figure class="videos-page__card">
                                <div class="videos-page__frame">
                                    <iframe
                                        src=video.embed_url
                                        title=video.title
                                        {::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                                        allowfullscreen=true
                                    ></iframe>
                                </div>
                                <figcaption>
                                    <span class="videos-page__title">{video.title}</span>
                                    <span class="videos-page__note">{video.note}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
