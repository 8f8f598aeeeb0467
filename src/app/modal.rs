use leptos::prelude::*;

use super::UiState;
use crate::portfolio::{self, Project};
use crate::state::{CueKind, Msg};

/// Detail overlay for the selected showcase project. Mounts fresh on every
/// open, so the staggered reveal animations replay each time.
#[component]
pub fn ProjectModal() -> impl IntoView {
    let ui = expect_context::<UiState>();

    move || {
        ui.selected_project
            .get()
            .and_then(portfolio::project)
            .map(|project| view! { <ModalPanel project /> })
    }
}

#[component]
fn ModalPanel(project: &'static Project) -> impl IntoView {
    let ui = expect_context::<UiState>();
    let close = move || {
        ui.cue(CueKind::Click);
        ui.dispatch(Msg::CloseProject);
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm fade-in"
            on:click=move |_| close()
        >
            <div
                class="relative max-w-4xl w-full max-h-[90vh] overflow-auto bg-background/95 backdrop-blur-md border border-primary/20 rounded-lg shadow-2xl scale-in"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="sticky top-0 z-10 bg-background/90 backdrop-blur-md border-b border-border p-6">
                    <div class="flex items-center justify-between">
                        <h2 class="text-2xl md:text-3xl font-bold text-primary neon-text reveal-item">
                            {project.title}
                        </h2>
                        <button
                            on:click=move |_| close()
                            class="p-2 text-muted-foreground hover:text-primary"
                            aria-label="Close project details"
                        >
                            "✕"
                        </button>
                    </div>
                </div>

                <div class="p-6 space-y-8">
                    <div class="relative overflow-hidden rounded-lg neon-border reveal-item" style="animation-delay: 100ms">
                        <img
                            src=project.image
                            alt=project.title
                            class="w-full h-64 md:h-80 object-cover"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-background/60 to-transparent"></div>
                    </div>

                    <div class="space-y-4 reveal-item" style="animation-delay: 200ms">
                        <h3 class="text-xl font-semibold text-secondary">"PROJECT.OVERVIEW"</h3>
                        <p class="text-muted-foreground leading-relaxed">{project.full_description}</p>
                    </div>

                    <div class="space-y-4 reveal-item" style="animation-delay: 300ms">
                        <h3 class="text-xl font-semibold text-secondary flex items-center gap-2">
                            <i class="extra-code" />
                            "TECH.STACK"
                        </h3>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .tech
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-2 py-1 rounded-md border border-primary/30 text-primary hover:bg-primary/10 text-sm">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="space-y-4 reveal-item" style="animation-delay: 400ms">
                        <h3 class="text-xl font-semibold text-secondary flex items-center gap-2">
                            <i class="extra-zap" />
                            "KEY.FEATURES"
                        </h3>
                        <div class="grid md:grid-cols-2 gap-3">
                            {project
                                .features
                                .iter()
                                .map(|feature| {
                                    view! {
                                        <div class="flex items-center gap-3 p-3 rounded-md bg-muted/20 border border-border/50">
                                            <span class="text-primary flex-shrink-0">"✔"</span>
                                            <span class="text-sm">{*feature}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="space-y-6 reveal-item" style="animation-delay: 500ms">
                        <h3 class="text-xl font-semibold text-secondary flex items-center gap-2">
                            <i class="extra-shield" />
                            "CHALLENGES.& SOLUTIONS"
                        </h3>
                        <div class="grid md:grid-cols-2 gap-6">
                            <div class="space-y-3">
                                <h4 class="font-semibold text-accent">"CHALLENGE"</h4>
                                <p class="text-sm text-muted-foreground leading-relaxed p-4 bg-destructive/10 border border-destructive/20 rounded-md">
                                    {project.challenges}
                                </p>
                            </div>
                            <div class="space-y-3">
                                <h4 class="font-semibold text-primary">"SOLUTION"</h4>
                                <p class="text-sm text-muted-foreground leading-relaxed p-4 bg-primary/10 border border-primary/20 rounded-md">
                                    {project.solution}
                                </p>
                            </div>
                        </div>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4 pt-6 border-t border-border reveal-item" style="animation-delay: 600ms">
                        {project
                            .demo_url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        on:click=move |_| ui.cue(CueKind::Click)
                                        class="flex-1 cyber-button flex items-center justify-center bg-primary text-primary-foreground hover:bg-primary/80 py-3 rounded-md"
                                    >
                                        <i class="extra-link mr-2" />
                                        "LIVE.DEMO"
                                    </a>
                                }
                            })}
                        {project
                            .github_url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        on:click=move |_| ui.cue(CueKind::Click)
                                        class="flex-1 cyber-button flex items-center justify-center border border-secondary text-secondary hover:bg-secondary hover:text-secondary-foreground py-3 rounded-md"
                                    >
                                        <i class="devicon-github-plain mr-2" />
                                        "SOURCE.CODE"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}
