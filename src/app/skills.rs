use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::{SkillCategory, SKILL_CATEGORIES};

use super::icon::Icon;

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <Title text="Skills & Technologies" />
        <div class="min-h-screen pt-32 pb-24 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="max-w-3xl mb-20 animate-slide-up">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass mb-6">
                        <Icon icon="ph:lightning-bold" class="w-4 h-4" style="color: var(--accent)" />
                        <span class="text-sm font-medium" style="color: var(--muted)">
                            "Technical Expertise"
                        </span>
                    </div>
                    <h1 class="font-display font-bold text-display-lg mb-6">
                        "Skills & " <span style="color: var(--accent)">"Technologies"</span>
                    </h1>
                    <p class="text-xl" style="color: var(--muted)">
                        "A comprehensive toolkit for building modern digital products across all platforms. Years of experience refined into expertise."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <SkillCard category /> })
                        .collect_view()}
                </div>
                <div
                    class="mt-20 p-12 rounded-3xl text-center"
                    style="background: linear-gradient(135deg, color-mix(in srgb, var(--accent) 8%, transparent), color-mix(in srgb, var(--accent-alt) 8%, transparent)); border: 1px solid var(--border)"
                >
                    <h3 class="font-display font-bold text-display-sm mb-4">
                        "Have a project in mind?"
                    </h3>
                    <p class="text-lg mb-8 max-w-xl mx-auto" style="color: var(--muted)">
                        "Let's discuss how my skills can help bring your vision to life."
                    </p>
                    <A
                        href="/contact"
                        attr:class="inline-flex items-center gap-3 px-8 py-4 rounded-xl font-semibold text-lg hover:scale-105"
                        attr:style="background-color: var(--accent); color: var(--bg)"
                    >
                        "Get in Touch"
                        <Icon icon="ph:arrow-right-bold" class="w-5 h-5" />
                    </A>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div
            class="p-8 rounded-3xl animate-slide-up"
            style="background-color: var(--surface); border: 1px solid var(--border)"
        >
            <div class="flex items-start gap-4 mb-6">
                <div
                    class="w-14 h-14 rounded-2xl flex items-center justify-center flex-shrink-0"
                    style="background-color: color-mix(in srgb, var(--accent) 12%, transparent)"
                >
                    <Icon icon=category.icon class="w-7 h-7" style="color: var(--accent)" />
                </div>
                <div>
                    <h2 class="font-display font-semibold text-2xl mb-1">{category.title}</h2>
                    <p class="text-sm" style="color: var(--muted)">
                        {category.description}
                    </p>
                </div>
            </div>
            <div class="space-y-4">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="group">
                                <div class="flex items-center justify-between mb-2">
                                    <div class="flex items-center gap-3">
                                        <Icon icon=skill.icon class="w-5 h-5" />
                                        <span class="font-medium">{skill.name}</span>
                                    </div>
                                    <span class="text-sm font-mono" style="color: var(--muted)">
                                        {format!("{}%", skill.level)}
                                    </span>
                                </div>
                                <div
                                    class="h-2 rounded-full overflow-hidden"
                                    style="background-color: var(--elevated)"
                                >
                                    <div
                                        class="skill-bar-fill h-full rounded-full origin-left group-hover:brightness-110"
                                        style=format!(
                                            "width: {}%; background: linear-gradient(90deg, var(--accent), var(--accent-alt))",
                                            skill.level,
                                        )
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
