use leptos::prelude::*;

use super::section::SectionShell;
use super::UiState;
use crate::portfolio;
use crate::state::{CueKind, Section};

/// Teaser cards for the three most recent posts. The full blog does not
/// exist yet, so the read buttons only log the intent.
#[component]
pub fn BlogTeasers() -> impl IntoView {
    let ui = expect_context::<UiState>();

    view! {
        <SectionShell section=Section::Blog class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl md:text-6xl font-bold text-center mb-16 neon-text text-primary section-content">
                    "BLOG"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {portfolio::posts()
                        .iter()
                        .enumerate()
                        .map(|(index, post)| {
                            let id = post.id;
                            view! {
                                <div
                                    class="neon-border bg-card group overflow-hidden h-full flex flex-col rounded-lg section-content"
                                    style=format!("animation-delay: {}ms", index * 100)
                                >
                                    <div class="relative overflow-hidden">
                                        <img
                                            src=post.image
                                            alt=post.title
                                            class="w-full h-48 object-cover transition-transform duration-300 group-hover:scale-110"
                                        />
                                        <div class="absolute inset-0 bg-gradient-to-t from-background/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                                        <span class=format!(
                                            "absolute top-4 left-4 flex items-center gap-1 px-2 py-1 rounded-md border text-xs font-mono bg-background/80 backdrop-blur-sm {}",
                                            post.category.badge_class(),
                                        )>
                                            <i class=post.category.icon() />
                                            {post.category.label()}
                                        </span>
                                    </div>
                                    <div class="p-6 space-y-4 flex-1 flex flex-col">
                                        <div class="flex items-center gap-4 text-xs text-muted-foreground font-mono">
                                            <span>"📅 " {post.display_date()}</span>
                                            <span>"⏱ " {post.read_time_minutes} " min read"</span>
                                        </div>
                                        <h3 class="text-xl font-bold text-secondary">{post.title}</h3>
                                        <p class="text-muted-foreground text-sm leading-relaxed flex-1">
                                            {post.excerpt}
                                        </p>
                                        <div class="flex flex-wrap gap-1">
                                            {post
                                                .tags
                                                .iter()
                                                .take(3)
                                                .map(|tag| {
                                                    view! {
                                                        <span class="px-2 py-1 rounded border border-border/50 text-xs text-muted-foreground">
                                                            {*tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <button
                                            on:click=move |_| {
                                                ui.cue(CueKind::Click);
                                                log::info!("reading blog post: {id}");
                                            }
                                            on:mouseenter=move |_| ui.cue(CueKind::Hover)
                                            class="w-full cyber-button flex items-center justify-center bg-primary/10 text-primary border border-primary/30 hover:bg-primary hover:text-primary-foreground py-2 rounded-md"
                                        >
                                            "READ.FULL_POST"
                                            <i class="extra-arrow-right ml-2" />
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-12 section-content">
                    <button
                        on:click=move |_| {
                            ui.cue(CueKind::Click);
                            log::info!("navigating to full blog page");
                        }
                        on:mouseenter=move |_| ui.cue(CueKind::Hover)
                        class="cyber-button inline-flex items-center border border-secondary text-secondary hover:bg-secondary hover:text-secondary-foreground px-8 py-3 text-lg rounded-md"
                    >
                        "VIEW.ALL_POSTS"
                        <i class="extra-arrow-right ml-2" />
                    </button>
                </div>
            </div>
        </SectionShell>
    }
}
