//! Project gallery page.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::content;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <div class="projects-page">
            <header class="projects-page__header">
                <h1>"Projects"</h1>
                <p>"Things I have built and still maintain."</p>
            </header>

            <div class="projects-page__grid">
                {content::projects()
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
