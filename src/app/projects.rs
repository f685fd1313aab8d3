use leptos::prelude::*;

use crate::content::{ProjectEntry, FEATURED_PROJECTS};
use crate::state::ShowcaseState;

#[component]
pub fn ProjectShowcase() -> impl IntoView {
    let state = RwSignal::new(ShowcaseState::default());

    view! {
        <section class="project-showcase w-full my-12">
            <h2 class="section-title">"Featured Projects"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {FEATURED_PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectTile project=project.clone() state=state /> })
                    .collect_view()}
            </div>
            {move || {
                state
                    .with(|s| s.selected().cloned())
                    .map(|project| view! { <ProjectModal project=project state=state /> })
            }}
        </section>
    }
}

#[component]
fn ProjectTile(project: ProjectEntry, state: RwSignal<ShowcaseState>) -> impl IntoView {
    let open = {
        let project = project.clone();
        move |_| {
            log::debug!("opening project {}", project.id);
            state.update(|s| s.open(project.clone()));
        }
    };

    view! {
        <div
            class="project-item cursor-pointer rounded-lg overflow-hidden bg-gray-800 border border-gray-700 hover:border-gray-500 transition-colors duration-200"
            on:click=open
        >
            <div class="project-image relative overflow-hidden">
                <img src=project.image.clone() alt=project.title.clone() class="w-full h-48 object-cover" />
                <div class="project-overlay">
                    <span>"Click to view details"</span>
                </div>
            </div>
            <div class="project-info p-4">
                <h3 class="text-lg font-bold">{project.title.clone()}</h3>
                <p class="text-sm text-gray-400 mt-1">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2 mt-3">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Detail modal for the selected project. A click on the backdrop closes
/// it; clicks inside the content stop propagating at the content boundary
/// so interacting with the modal never closes it.
#[component]
fn ProjectModal(project: ProjectEntry, state: RwSignal<ShowcaseState>) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| state.update(|s| s.close())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button
                    class="modal-close"
                    aria-label="Close"
                    on:click=move |_| state.update(|s| s.close())
                >
                    <i class="extra-close"></i>
                </button>
                <div class="modal-body p-6">
                    <h2 class="text-2xl font-bold">{project.title.clone()}</h2>
                    <p class="mt-2 text-gray-300">{project.description.clone()}</p>
                    <div class="mt-4">
                        <h4 class="font-bold mb-2">"Technologies Used:"</h4>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex gap-4 mt-6">
                        <a
                            href=project.github.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary"
                        >
                            <i class="devicon-github-plain"></i>
                            " View Code"
                        </a>
                        <a
                            href=project.live.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-secondary"
                        >
                            <i class="extra-link"></i>
                            " Live Demo"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
