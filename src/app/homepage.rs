use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::counter::AnimatedCounter;
use super::icon::Icon;
use super::intro::IntroAnimation;

const STATS: [(&str, &str); 3] = [
    ("8+", "Years Experience"),
    ("100%", "Client Satisfaction"),
    ("24/7", "Support & Maintenance"),
];

const SERVICES: [(&str, &str, &str); 4] = [
    (
        "ph:globe-bold",
        "Web Development",
        "Cutting-edge web applications with modern frameworks.",
    ),
    (
        "ph:device-mobile-bold",
        "Mobile Apps",
        "Native and cross-platform mobile experiences for iOS and Android.",
    ),
    (
        "ph:desktop-bold",
        "Desktop Apps",
        "Powerful desktop applications with native technologies.",
    ),
    (
        "ph:database-bold",
        "Backend & APIs",
        "Scalable server architectures and robust API development.",
    ),
];

#[component]
pub fn HomePage(
    site_name: &'static str,
    intro_seed: u64,
    intro_done: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <Title text="Digital Design & Solutions" />
        {move || {
            (!intro_done.get())
                .then(|| {
                    view! {
                        <IntroAnimation
                            seed=intro_seed
                            site_name
                            on_complete=move |_| intro_done.set(true)
                        />
                    }
                })
        }}
        <div class="max-w-7xl mx-auto px-6 pt-32 pb-24 page-content">
            <section class="min-h-[70vh] flex flex-col justify-center section-content">
                <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass mb-8 w-fit">
                    <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                    <span class="text-sm font-medium" style="color: var(--muted)">
                        "Available for new projects"
                    </span>
                </div>
                <h1 class="font-display font-bold text-display-lg mb-6">
                    <span class="block">"Digital Design"</span>
                    <span class="block gradient-text">"& Solutions"</span>
                </h1>
                <p class="text-xl lg:text-2xl mb-10 max-w-xl leading-relaxed" style="color: var(--muted)">
                    "Building exceptional digital experiences across "
                    <span style="color: var(--text)">"Web"</span> ", "
                    <span style="color: var(--text)">"Mobile"</span> ", "
                    <span style="color: var(--text)">"Desktop"</span> " & "
                    <span style="color: var(--text)">"Backend"</span> "."
                </p>
                <div class="flex flex-wrap gap-4">
                    <A
                        href="/demos"
                        attr:class="inline-flex items-center gap-3 px-8 py-4 rounded-xl font-semibold text-lg hover:scale-105"
                        attr:style="background-color: var(--accent); color: var(--bg)"
                    >
                        "Explore Demos"
                        <Icon icon="ph:arrow-right-bold" class="w-5 h-5" />
                    </A>
                </div>
                <div class="grid grid-cols-3 gap-8 mt-16 max-w-xl">
                    {STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div>
                                    <AnimatedCounter
                                        value=*value
                                        class="block font-display font-bold text-3xl gradient-text"
                                    />
                                    <div class="text-sm" style="color: var(--muted)">
                                        {*label}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="py-24 section-content">
                <h2 class="font-display font-bold text-display-md mb-4">
                    "What We " <span class="gradient-text">"Build"</span>
                </h2>
                <p class="text-lg max-w-xl mb-16" style="color: var(--muted)">
                    "Full-stack solutions tailored to your needs, from concept to deployment."
                </p>
                <div class="grid md:grid-cols-2 gap-6">
                    {SERVICES
                        .iter()
                        .map(|(icon, title, description)| {
                            view! {
                                <div
                                    class="p-8 rounded-3xl"
                                    style="background-color: var(--surface); border: 1px solid var(--border)"
                                >
                                    <Icon
                                        icon=*icon
                                        class="w-10 h-10 mb-6"
                                        style="color: var(--accent)"
                                    />
                                    <h3 class="font-display font-semibold text-2xl mb-3">
                                        {*title}
                                    </h3>
                                    <p style="color: var(--muted)">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="py-24 text-center section-content">
                <h2 class="font-display font-bold text-display-md mb-6">
                    "Ready to build something " <span class="gradient-text">"amazing"</span> "?"
                </h2>
                <p class="text-xl mb-10" style="color: var(--muted)">
                    {format!(
                        "Preview what {site_name} builds: every demo is a live, themed template.",
                    )}
                </p>
            </section>
        </div>
    }
}
