use leptos::prelude::*;

use super::section::SectionShell;
use super::UiState;
use crate::portfolio;
use crate::state::{CueKind, Msg, Section};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ui = expect_context::<UiState>();

    view! {
        <SectionShell section=Section::Projects class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl md:text-6xl font-bold text-center mb-16 neon-text text-primary section-content">
                    "PROJECTS"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {portfolio::projects()
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let id = project.id;
                            view! {
                                <div
                                    class="cyber-card glass-panel group overflow-hidden h-full flex flex-col rounded-lg section-content"
                                    style=format!("animation-delay: {}ms", index * 100)
                                >
                                    <div class="relative overflow-hidden">
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110"
                                        />
                                        <div class="absolute inset-0 bg-gradient-to-t from-background/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                                        <i class="extra-link absolute top-4 right-4 text-primary opacity-0 group-hover:opacity-100 transition-opacity duration-200" />
                                    </div>
                                    <div class="p-6 space-y-4 flex-1 flex flex-col">
                                        <h3 class="text-xl font-bold text-secondary">{project.title}</h3>
                                        <p class="text-muted-foreground text-sm leading-relaxed flex-1">
                                            {project.description}
                                        </p>
                                        <div class="flex flex-wrap gap-2">
                                            {project
                                                .tech
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="px-2 py-1 bg-muted rounded text-xs font-mono">
                                                            {*tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <button
                                            on:click=move |_| {
                                                ui.cue(CueKind::Click);
                                                ui.dispatch(Msg::OpenProject(id));
                                            }
                                            on:mouseenter=move |_| ui.cue(CueKind::Hover)
                                            class="w-full cyber-button flex items-center justify-center bg-primary text-primary-foreground hover:bg-primary/80 py-2 rounded-md"
                                        >
                                            <i class="extra-code mr-2" />
                                            "VIEW PROJECT"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </SectionShell>
    }
}
