use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{self, Project, ProjectFilter};

use super::icon::Icon;

const GITHUB_PROFILE: &str = "https://github.com/KevinTheGoat";

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::default());

    view! {
        <Title text="Selected Projects" />
        <div class="min-h-screen pt-32 pb-24 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="max-w-3xl mb-12 animate-slide-up">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass mb-6">
                        <Icon icon="ph:folders-bold" class="w-4 h-4" style="color: var(--accent)" />
                        <span class="text-sm font-medium" style="color: var(--muted)">
                            "Featured Work"
                        </span>
                    </div>
                    <h1 class="font-display font-bold text-display-lg mb-6">
                        "Selected " <span style="color: var(--accent)">"Projects"</span>
                    </h1>
                    <p class="text-xl" style="color: var(--muted)">
                        "A showcase of my best work across web, mobile, and desktop platforms. Each project is crafted with attention to detail and performance."
                    </p>
                </div>
                <div class="flex flex-wrap gap-2 mb-12">
                    {ProjectFilter::options()
                        .map(|option| {
                            view! {
                                <button
                                    class="px-6 py-3 rounded-xl font-medium transition-all duration-300 hover:bg-white/5"
                                    style=move || {
                                        if filter() == option {
                                            "background-color: var(--accent); color: var(--bg); border: 1px solid var(--accent)"
                                        } else {
                                            "background-color: transparent; color: var(--text); border: 1px solid var(--border)"
                                        }
                                    }
                                    on:click=move |_| set_filter(option)
                                >
                                    {option.to_string()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid lg:grid-cols-2 gap-8">
                    {move || {
                        content::projects(filter())
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
                <div class="mt-16 text-center">
                    <p class="text-lg mb-6" style="color: var(--muted)">
                        "Want to see more of my work?"
                    </p>
                    <a
                        href=GITHUB_PROFILE
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-3 px-8 py-4 rounded-xl font-semibold hover:scale-105"
                        style="background-color: var(--surface); color: var(--text); border: 1px solid var(--border)"
                    >
                        <Icon icon="mdi:github" class="w-6 h-6" />
                        "View GitHub Profile"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let external = project.url.is_some();
    view! {
        <a
            href=project.url.unwrap_or("#")
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="group block rounded-3xl overflow-hidden card-hover animate-slide-up"
            style="background-color: var(--surface); border: 1px solid var(--border)"
        >
            <div class=format!(
                "h-64 lg:h-80 bg-gradient-to-br {} relative overflow-hidden",
                project.gradient,
            )>
                <div class="absolute inset-0 opacity-30 dot-pattern group-hover:scale-110"></div>
                <div class="absolute inset-0 flex flex-col items-center justify-center text-white/90">
                    <Icon
                        icon=project.category.icon()
                        class="w-16 h-16 mb-4 group-hover:scale-110"
                    />
                    <span class="text-sm font-medium px-4 py-1.5 rounded-full bg-white/20 backdrop-blur-sm">
                        {if external { "View Live Site" } else { "Demo Project" }}
                    </span>
                </div>
            </div>
            <div class="p-8">
                <div class="flex items-start justify-between mb-4">
                    <h3 class="font-display font-bold text-2xl">{project.title}</h3>
                    <Icon
                        icon="ph:arrow-up-right-bold"
                        class="w-6 h-6 opacity-0 group-hover:opacity-100"
                        style="color: var(--accent)"
                    />
                </div>
                <p class="mb-6" style="color: var(--muted)">
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <span
                                    class="flex items-center gap-1.5 text-sm px-3 py-1.5 rounded-lg"
                                    style="background-color: var(--elevated); color: var(--text)"
                                >
                                    <Icon
                                        icon="ph:check-circle-bold"
                                        class="w-3.5 h-3.5"
                                        style="color: var(--accent)"
                                    />
                                    {*feature}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span
                                    class="px-3 py-1 text-sm rounded-full font-medium"
                                    style="background-color: color-mix(in srgb, var(--accent) 12%, transparent); color: var(--accent)"
                                >
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </a>
    }
}
