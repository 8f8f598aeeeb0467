mod about;
mod audio;
mod blog;
mod contact_form;
mod effects;
mod fault;
mod hero;
mod modal;
mod nav;
mod page;
mod projects;
mod section;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::state::{update, CueKind, Msg, Section, Toast, ViewState};

use fault::FaultBoundary;
use page::PortfolioPage;
pub use ui::PageLoader;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="theme-color" content="#00ffff" />
                <meta
                    name="description"
                    content="Cyberpunk-themed portfolio showcasing cutting-edge web development projects and technologies by Rahul Pawar"
                />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    href="https://fonts.googleapis.com/css2?family=Orbitron:wght@400;700;900&display=swap"
                    rel="stylesheet"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/cyberdev-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Rahul Pawar - {title}") />

        // render errors below are caught and shown as SYSTEM.ERROR
        <FaultBoundary>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </Router>
        </FaultBoundary>
    }
}

/// Shared handle to the page's state machine. Copyable, so event handlers can
/// capture it freely; components pick it up with `expect_context`.
///
/// Reads go through per-field memos so a dispatch only re-renders the views
/// whose projection actually changed.
#[derive(Clone, Copy)]
pub struct UiState {
    state: RwSignal<ViewState>,
    pub active_section: Memo<Section>,
    pub selected_project: Memo<Option<u32>>,
    pub sound_enabled: Memo<bool>,
    pub toast: Memo<Option<Toast>>,
}

impl UiState {
    pub fn new() -> Self {
        let state = RwSignal::new(ViewState::new());
        UiState {
            state,
            active_section: Memo::new(move |_| state.get().active_section),
            selected_project: Memo::new(move |_| state.get().selected_project),
            sound_enabled: Memo::new(move |_| state.get().sound_enabled),
            toast: Memo::new(move |_| state.get().toast),
        }
    }

    pub fn dispatch(self, msg: Msg) {
        self.state.update(|state| *state = update(state.clone(), msg));
    }

    /// Fires an audio cue, honoring the current sound flag.
    pub fn cue(self, kind: CueKind) {
        audio::play_cue(kind, self.sound_enabled.get_untracked());
    }
}

impl Default for UiState {
    fn default() -> Self {
        UiState::new()
    }
}
