use leptos::prelude::*;

use super::UiState;
use crate::state::{Msg, ToastKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            SpinnerSize::Sm => "w-4 h-4",
            SpinnerSize::Md => "w-6 h-6",
            SpinnerSize::Lg => "w-8 h-8",
        }
    }
}

#[component]
pub fn Spinner(#[prop(optional)] size: SpinnerSize) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center">
            <div class=format!(
                "{} border-2 border-primary/30 border-t-primary rounded-full animate-spin",
                size.class(),
            )></div>
        </div>
    }
}

/// Full-screen variant shown while the app shell is still booting.
#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-background">
            <div class="text-center space-y-4">
                <div class="w-16 h-16 border-4 border-primary/30 border-t-primary rounded-full mx-auto animate-spin"></div>
                <p class="text-primary font-mono animate-pulse">"INITIALIZING.SYSTEM..."</p>
            </div>
        </div>
    }
}

/// Bottom-right toast anchored to the state machine. At most one is ever
/// mounted; a dismiss only clears the toast, timers are the form's business.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<UiState>();

    move || {
        ui.toast.get().map(|toast| {
            let (icon, palette) = match toast.kind {
                ToastKind::Success => ("✔", "border-primary bg-primary/10 text-primary"),
                ToastKind::Error => ("⚠", "border-destructive bg-destructive/10 text-destructive"),
            };
            view! {
                <div class=format!(
                    "fixed bottom-4 right-4 z-50 p-4 rounded-md border {palette} backdrop-blur-md max-w-sm w-full toast-enter",
                )>
                    <div class="flex items-center gap-3">
                        <span class="flex-shrink-0">{icon}</span>
                        <p class="font-mono text-sm flex-1">{toast.message}</p>
                        <button
                            on:click=move |_| ui.dispatch(Msg::DismissToast)
                            class="h-6 w-6 rounded hover:bg-background/20"
                            aria-label="Dismiss notification"
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
