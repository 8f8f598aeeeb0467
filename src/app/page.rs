use leptos::prelude::*;
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::about::AboutSection;
use super::blog::BlogTeasers;
use super::contact_form::ContactSection;
use super::effects::MatrixRain;
use super::hero::HeroSection;
use super::modal::ProjectModal;
use super::nav::NavBar;
use super::projects::ProjectsSection;
use super::ui::ToastHost;
use super::UiState;

#[cfg(feature = "hydrate")]
use crate::state::Msg;

/// The whole site is this one page. It owns the state machine, provides it
/// as context and stacks the sections in scroll order; the rain canvas, nav,
/// modal and toast layers float around them.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let ui = UiState::new();
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    let (muted, set_muted, _) = use_local_storage::<bool, JsonSerdeWasmCodec>("sound_muted");

    // Restore the persisted sound preference once the browser takes over.
    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            ui.dispatch(Msg::SetSound(!muted.get_untracked()));
        },
        true,
    );

    #[cfg(feature = "hydrate")]
    Effect::watch(
        move || ui.sound_enabled.get(),
        move |enabled, _, _| {
            set_muted.set(!enabled);
        },
        false,
    );

    view! {
        <Title text="Full Stack Developer Portfolio" />
        <div class="min-h-screen bg-background text-foreground matrix-bg cyber-grid">
            <MatrixRain />
            <NavBar />
            <main>
                <HeroSection />
                <AboutSection />
                <ProjectsSection />
                <BlogTeasers />
                <ContactSection />
            </main>
            <SiteFooter />
            <ProjectModal />
            <ToastHost />
        </div>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="border-t border-border py-8 px-4">
            <div class="max-w-7xl mx-auto text-center">
                <p class="text-muted-foreground font-mono">"© 2025 USERINPEACE - ALL RIGHTS RESERVED"</p>
            </div>
        </footer>
    }
}
