use leptos::prelude::*;

/// Replaces the whole viewport with a SYSTEM.ERROR panel when any child view
/// yields an error, instead of leaving a half-rendered page.
#[component]
pub fn FaultBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            let first_error = move || {
                errors
                    .get()
                    .into_iter()
                    .next()
                    .map(|(_, error)| error.to_string())
                    .unwrap_or_else(|| "Unknown error occurred".to_string())
            };
            view! {
                <div class="min-h-screen bg-background flex items-center justify-center p-4">
                    <div class="max-w-md w-full text-center space-y-6">
                        <div class="mx-auto w-16 h-16 bg-destructive/20 rounded-full flex items-center justify-center">
                            <span class="text-2xl text-destructive">"⚠"</span>
                        </div>
                        <div class="space-y-2">
                            <h1 class="text-2xl font-bold text-destructive neon-text">"SYSTEM.ERROR"</h1>
                            <p class="text-muted-foreground font-mono">"AN UNEXPECTED ERROR OCCURRED"</p>
                        </div>
                        <div class="p-4 bg-destructive/10 border border-destructive/20 rounded-md">
                            <p class="text-sm font-mono text-destructive">{first_error}</p>
                        </div>
                        <button
                            on:click=|_| {
                                let _ = window().location().reload();
                            }
                            class="cyber-button bg-primary text-primary-foreground hover:bg-primary/80 px-6 py-3 rounded-md"
                        >
                            "↻ RESTART.SYSTEM"
                        </button>
                    </div>
                </div>
            }
        }>{children()}</ErrorBoundary>
    }
}
