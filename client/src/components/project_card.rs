//! One project gallery card.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::content::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__blurb">{project.blurb}</p>

            <div class="project-card__tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="project-card__tag">{*tag}</span> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="project-card__links">
                {project.repo_url.map(|url| {
                    view! {
                        <a href=url class="project-card__link" title="Source">
                            <IconGlyph icon=Icon::Github/>
                        </a>
                    }
                })}
                {project.live_url.map(|url| {
                    view! {
                        <a href=url class="project-card__link" title="Live site">
                            <IconGlyph icon=Icon::External/>
                        </a>
                    }
                })}
            </div>
        </article>
    }
}
