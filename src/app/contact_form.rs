use leptos::either::Either;
use leptos::{html, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::section::SectionShell;
use super::ui::{Spinner, SpinnerSize};
use super::UiState;
use crate::contact::{send_contact, ContactRequest};
use crate::state::{CueKind, Msg, Section, CONTACT_RESET_MS};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <SectionShell section=Section::Contact class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl md:text-6xl font-bold text-center mb-16 neon-text text-primary section-content">
                    "CONTACT"
                </h2>
                <div class="grid md:grid-cols-2 gap-12">
                    <ConnectionInfo />
                    <ContactForm />
                </div>
            </div>
        </SectionShell>
    }
}

#[component]
fn ConnectionInfo() -> impl IntoView {
    view! {
        <div class="space-y-6 section-content">
            <h3 class="text-2xl font-bold text-secondary">"INITIALIZE.CONNECTION"</h3>
            <p class="text-muted-foreground leading-relaxed">
                "Ready to collaborate on your next digital project? Let's connect and build something extraordinary together."
            </p>
            <div class="space-y-4">
                <div class="flex items-center space-x-3">
                    <div class="w-2 h-2 bg-primary rounded-full animate-pulse"></div>
                    <span class="font-mono">"EMAIL: rahulpawar96110211@gmail.com"</span>
                </div>
                <div class="flex items-center space-x-3">
                    <div class="w-2 h-2 bg-secondary rounded-full animate-pulse"></div>
                    <span class="font-mono">"GITHUB: /Userinpeace"</span>
                </div>
                <div class="flex items-center space-x-3">
                    <div class="w-2 h-2 bg-accent rounded-full animate-pulse"></div>
                    <span class="font-mono">"LINKEDIN: /in/rahul-pawar-734745157"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let ui = expect_context::<UiState>();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (is_loading, set_is_loading) = signal(false);

    let UseTimeoutFnReturn { start: start_reset, .. } = use_timeout_fn(
        move |_: ()| {
            ui.dispatch(Msg::ContactReset);
        },
        CONTACT_RESET_MS as f64,
    );

    let submit_handler = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ui.cue(CueKind::Click);

        let fields = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        );
        let (name_el, email_el, message_el) = match fields {
            (Some(name), Some(email), Some(message)) => (name, email, message),
            _ => return,
        };
        // Snapshot the values now; the DOM can change under the async hop.
        let request = ContactRequest {
            name: name_el.value(),
            email: email_el.value(),
            message: message_el.value(),
        };

        set_is_loading(true);
        let start_reset = start_reset.clone();
        spawn_local(async move {
            match send_contact(&request).await {
                Ok(reply) => {
                    log::info!("contact endpoint replied: {}", reply.message);
                    ui.dispatch(Msg::ContactSettled { ok: true });
                    ui.cue(CueKind::Success);
                    name_el.set_value("");
                    email_el.set_value("");
                    message_el.set_value("");
                }
                Err(err) => {
                    log::warn!("contact submission failed: {err}");
                    ui.dispatch(Msg::ContactSettled { ok: false });
                    ui.cue(CueKind::Error);
                }
            }
            set_is_loading(false);
            start_reset(());
        });
    };

    view! {
        <div class="cyber-card glass-panel p-8 rounded-lg section-content">
            <form class="space-y-6" on:submit=submit_handler>
                <div>
                    <label class="block text-sm font-mono text-secondary mb-3 neon-text">
                        "NAME.INPUT"
                    </label>
                    <input
                        node_ref=name_ref
                        name="name"
                        placeholder="Enter your name"
                        required=true
                        disabled=is_loading
                        class="cyber-input w-full bg-input border border-border rounded-md px-4 text-foreground h-12"
                    />
                </div>
                <div>
                    <label class="block text-sm font-mono text-secondary mb-3 neon-text">
                        "EMAIL.INPUT"
                    </label>
                    <input
                        node_ref=email_ref
                        name="email"
                        type="email"
                        placeholder="Enter your email"
                        required=true
                        disabled=is_loading
                        class="cyber-input w-full bg-input border border-border rounded-md px-4 text-foreground h-12"
                    />
                </div>
                <div>
                    <label class="block text-sm font-mono text-secondary mb-3 neon-text">
                        "MESSAGE.INPUT"
                    </label>
                    <textarea
                        node_ref=message_ref
                        name="message"
                        placeholder="Enter your message"
                        required=true
                        disabled=is_loading
                        class="cyber-input w-full bg-input border border-border rounded-md p-4 text-foreground min-h-32 resize-none"
                    ></textarea>
                </div>
                <button
                    type="submit"
                    disabled=is_loading
                    class="w-full cyber-button flex items-center justify-center bg-primary text-primary-foreground hover:bg-primary/80 disabled:opacity-50 h-14 text-lg rounded-md"
                >
                    {move || {
                        if is_loading() {
                            Either::Left(
                                view! {
                                    <Spinner size=SpinnerSize::Sm />
                                    <span class="ml-2">"TRANSMITTING..."</span>
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <i class="extra-email mr-2" />
                                    "TRANSMIT.MESSAGE"
                                },
                            )
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
