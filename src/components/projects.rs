//! Project Gallery

use leptos::prelude::*;

use crate::components::{Reveal, SectionHeader};
use crate::content::PROJECTS;
use crate::models::{Project, ProjectLink};

/// Open the project in a new tab
fn open_project(link: ProjectLink) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let current = window.location().href().ok();
    let url = link.resolve(current.as_deref());
    let _ = window.open_with_url_and_target(&url, "_blank");
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <div class="container">
                <SectionHeader
                    title="Featured Projects"
                    subtitle="Here are some of my best video editing and creative projects"
                />
                <div class="project-grid">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let link = project.link;

    view! {
        <Reveal class="project-card card">
            <div class="project-media">
                <img src=project.image alt=project.title loading="lazy" />
                <div class="project-overlay">
                    <button class="btn btn-overlay" on:click=move |_| open_project(link)>
                        {project.media.action_icon()} " " {project.media.action_label()}
                    </button>
                </div>
            </div>
            <div class="project-body">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tools">
                    {project.tools.iter().map(|tool| view! {
                        <span class="badge">{*tool}</span>
                    }).collect_view()}
                </div>
            </div>
        </Reveal>
    }
}
