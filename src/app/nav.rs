use leptos::prelude::*;

use super::section::scroll_to_section;
use super::UiState;
use crate::state::{CueKind, Msg, Section};

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<UiState>();

    view! {
        <nav class="fixed top-0 w-full z-50 glass-panel">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="text-2xl font-bold neon-text text-primary">"<USERINPEACE/>"</div>
                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| {
                                            ui.cue(CueKind::Click);
                                            ui.dispatch(Msg::NavigateTo(section));
                                            scroll_to_section(section);
                                        }
                                        on:mouseenter=move |_| ui.cue(CueKind::Hover)
                                        class=move || {
                                            if ui.active_section.get() == section {
                                                "px-6 py-3 rounded-md transition-all duration-300 text-primary neon-text nav-active"
                                            } else {
                                                "px-6 py-3 rounded-md transition-all duration-300 text-muted-foreground hover:text-primary cyber-button hover:bg-primary/5"
                                            }
                                        }
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center gap-4">
                        <button
                            on:click=move |_| {
                                ui.dispatch(Msg::ToggleSound);
                                ui.cue(CueKind::Click);
                            }
                            class="p-2 rounded-md text-muted-foreground hover:text-primary transition-all duration-300"
                            aria-label="Toggle sound effects"
                        >
                            {move || {
                                if ui.sound_enabled.get() {
                                    view! { <i class="extra-volume text-xl" /> }.into_any()
                                } else {
                                    view! { <i class="extra-volume-mute text-xl" /> }.into_any()
                                }
                            }}
                        </button>
                        <a
                            href="/resume-cyberdev.pdf"
                            download="Rahul-Pawar-Resume-2024.pdf"
                            on:click=move |_| ui.cue(CueKind::Click)
                            on:mouseenter=move |_| ui.cue(CueKind::Hover)
                            class="cyber-button flex items-center px-4 py-2 rounded-md border border-secondary text-secondary hover:bg-secondary hover:text-secondary-foreground"
                        >
                            <i class="extra-download mr-2" />
                            "RESUME"
                        </a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
