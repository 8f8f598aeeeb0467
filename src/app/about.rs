use leptos::prelude::*;

use super::section::SectionShell;
use crate::state::Section;

const SKILLS: [&str; 8] = [
    "JavaScript / React / Node.js",
    "Python / SQL",
    "HTML / CSS / API Development",
    "Linux / Network Security",
    "Burp Suite / Nmap / Vulnerability Assessment",
    "Threat Intelligence / Penetration Testing",
    "Cloud Security / Data Encryption",
    "AI & Emerging Technologies",
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <SectionShell section=Section::About class="py-20 px-4 min-h-screen flex items-center">
            <div class="max-w-6xl mx-auto w-full">
                <h2 class="text-4xl md:text-6xl font-bold text-center mb-16 neon-text text-primary section-content">
                    "ABOUT"
                </h2>
                <div class="grid md:grid-cols-2 gap-12 items-start">
                    <div class="space-y-8 section-content">
                        <p class="text-lg leading-relaxed text-muted-foreground mb-6">
                            "I'm a passionate Cybersecurity Analyst and Software Engineer who thrives at the intersection of secure software development and modern cybersecurity practices. With expertise in building scalable applications and safeguarding digital assets, I craft solutions that are both innovative and resilient."
                        </p>
                        <p class="text-lg leading-relaxed text-muted-foreground mb-8">
                            "My work spans from full-stack development to vulnerability assessment, threat detection, and system hardening, pushing the boundaries of what's possible in secure technology."
                        </p>
                        <div class="space-y-6">
                            <h3 class="text-2xl font-bold text-secondary">"⚡ CORE.SKILLS"</h3>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                                {SKILLS
                                    .into_iter()
                                    .map(|skill| {
                                        view! {
                                            <div class="neon-border p-3 rounded-md hologram-effect">
                                                <span class="text-sm font-mono">{skill}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="relative flex items-start justify-center md:justify-start section-content">
                        <SystemStatusCard />
                    </div>
                </div>
            </div>
        </SectionShell>
    }
}

#[component]
fn SystemStatusCard() -> impl IntoView {
    view! {
        <div class="neon-border p-8 rounded-lg hologram-effect bg-card w-full max-w-sm">
            <div class="space-y-6">
                <div class="flex items-center space-x-2">
                    <i class="extra-zap text-primary" />
                    <span class="font-mono text-sm text-primary">"SYSTEM.STATUS"</span>
                </div>
                <div class="space-y-3 font-mono text-sm">
                    <div class="flex justify-between">
                        <span>"CPU:"</span>
                        <span class="text-primary">"98% EFFICIENCY"</span>
                    </div>
                    <div class="flex justify-between">
                        <span>"CREATIVITY:"</span>
                        <span class="text-secondary">"MAXIMUM"</span>
                    </div>
                    <div class="flex justify-between">
                        <span>"COFFEE_LEVEL:"</span>
                        <span class="text-accent">"OPTIMAL"</span>
                    </div>
                    <div class="flex justify-between">
                        <span>"PROJECTS_COMPLETED:"</span>
                        <span class="text-primary">"50+"</span>
                    </div>
                    <div class="flex justify-between">
                        <span>"FIRMWARE:"</span>
                        <span class="text-muted-foreground">
                            {
                                let built = env!("BUILD_TIME").split('T').next().unwrap_or_default();
                                format!("v{} ({built})", env!("CARGO_PKG_VERSION"))
                            }
                        </span>
                    </div>
                    <div class="pt-4 border-t border-primary/20">
                        <div class="terminal-cursor text-secondary text-center">
                            "READY_FOR_NEW_CHALLENGE"
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
