use leptos::prelude::*;

use crate::domain::projects::{self, Project};
use crate::shared::components::LazyImage;
use crate::shared::i18n::use_i18n;
use crate::shared::icons;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="projects" class="section projects" aria-labelledby="projects-title">
            <h2 id="projects-title" class="section__title">{move || i18n.t("projects.title")}</h2>
            <div class="projects__grid">
                {projects::featured()
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <article class="project-card">
            <LazyImage
                class="project-card__image"
                src=project.image
                alt=format!("{} preview", project.name)
                width=640
                height=360
            />
            <div class="project-card__body">
                <h3 class="project-card__title">{project.name}</h3>
                <p class="project-card__summary">{move || i18n.t(project.summary_key)}</p>
                <div class="project-card__tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="project-card__tag">{*tag}</span> })
                        .collect_view()}
                </div>
                <a
                    class="project-card__link"
                    href=project.repo_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=move || {
                        i18n.t("a11y.view_repository").replace("{name}", project.name)
                    }
                >
                    {icons::icon("external-link")}
                    {move || i18n.t("projects.view_repository")}
                </a>
            </div>
        </article>
    }
}
