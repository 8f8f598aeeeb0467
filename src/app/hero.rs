use leptos::prelude::*;

use super::section::{scroll_to_section, SectionShell};
use super::UiState;
use crate::state::{CueKind, Msg, Section};

#[component]
pub fn HeroSection() -> impl IntoView {
    let ui = expect_context::<UiState>();

    let jump = move |target: Section| {
        ui.cue(CueKind::Click);
        ui.dispatch(Msg::NavigateTo(target));
        scroll_to_section(target);
    };

    view! {
        <SectionShell
            section=Section::Home
            class="relative min-h-screen flex items-center justify-center px-4"
        >
            <div class="text-center z-10 max-w-4xl mx-auto reveal-up">
                <h1 class="text-6xl md:text-8xl font-bold mb-6 neon-text text-primary">
                    "CYBER"
                    <span class="text-secondary glitch-effect neon-text">"DEV"</span>
                </h1>
                <p class="text-xl md:text-2xl mb-8 text-muted-foreground max-w-2xl mx-auto leading-relaxed">
                    "Cybersecurity Analyst & Software Engineer specializing in secure development and digital asset protection"
                </p>
                <div class="flex flex-col sm:flex-row gap-6 justify-center">
                    <button
                        on:click=move |_| jump(Section::Projects)
                        on:mouseenter=move |_| ui.cue(CueKind::Hover)
                        class="cyber-button neon-border flex items-center justify-center bg-primary text-primary-foreground hover:bg-primary/80 px-8 py-4 text-lg rounded-md"
                    >
                        <i class="extra-code mr-2" />
                        "VIEW PROJECTS"
                    </button>
                    <button
                        on:click=move |_| jump(Section::Contact)
                        on:mouseenter=move |_| ui.cue(CueKind::Hover)
                        class="cyber-button flex items-center justify-center border border-secondary text-secondary hover:bg-secondary hover:text-secondary-foreground px-8 py-4 text-lg rounded-md"
                    >
                        <i class="extra-email mr-2" />
                        "CONTACT ME"
                    </button>
                </div>
            </div>

            // Decorative floating particles, animated from the stylesheet
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-1/4 left-1/4 w-2 h-2 bg-primary rounded-full float-pulse"></div>
                <div class="absolute top-3/4 right-1/4 w-1 h-1 bg-secondary rounded-full float-drift"></div>
                <div class="absolute top-1/2 right-1/3 w-3 h-3 bg-accent rounded-full float-spin"></div>
            </div>
        </SectionShell>
    }
}
