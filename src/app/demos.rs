use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::catalog::{self, DemoSite};
use crate::controller::DemoController;
use crate::palette::with_alpha;

use super::demo_sites::DemoSiteView;
use super::icon::Icon;
use super::mockups::{DesktopAppMockups, MobileAppMockups};

const MOCKUP_FRAME: &str = "background-color: var(--surface); border: 1px solid var(--border)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GalleryTab {
    Websites,
    Mobile,
    Desktop,
}

impl GalleryTab {
    const ALL: [GalleryTab; 3] = [Self::Websites, Self::Mobile, Self::Desktop];

    fn label(self) -> &'static str {
        match self {
            Self::Websites => "Websites",
            Self::Mobile => "Mobile Apps",
            Self::Desktop => "Desktop Apps",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Websites => "ph:globe-bold",
            Self::Mobile => "ph:device-mobile-bold",
            Self::Desktop => "ph:desktop-bold",
        }
    }
}

const TECH_STACK: [(&str, &str); 8] = [
    ("mdi:react", "React"),
    ("mdi:react", "React Native"),
    ("simple-icons:electron", "Electron"),
    ("mdi:nodejs", "Node.js"),
    ("simple-icons:swift", "Swift"),
    ("simple-icons:kotlin", "Kotlin"),
    ("mdi:tailwind", "Tailwind"),
    ("simple-icons:greensock", "GSAP"),
];

/// `/demos`: the catalog while idle, the active template while previewing.
#[component]
pub fn DemosPage(demos: DemoController) -> impl IntoView {
    let active = Memo::new(move |_| demos.active_demo());

    view! {
        {move || match active.get() {
            Some(demo) => Either::Left(view! { <DemoSiteView demo /> }),
            None => Either::Right(view! { <DemoGallery demos /> }),
        }}
    }
}

#[component]
fn DemoGallery(demos: DemoController) -> impl IntoView {
    let (tab, set_tab) = signal(GalleryTab::Websites);

    view! {
        <Title text="Interactive Demos" />
        <div class="min-h-screen pt-32 pb-24 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="max-w-3xl mb-16">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass mb-6">
                        <Icon
                            icon="ph:play-circle-bold"
                            class="w-4 h-4"
                            style="color: var(--accent)"
                        />
                        <span class="text-sm font-medium" style="color: var(--muted)">
                            "Interactive Showcases"
                        </span>
                    </div>
                    <h1 class="font-display font-bold text-display-lg mb-6">
                        "Live " <span class="gradient-text">"Demos"</span>
                    </h1>
                    <p class="text-xl" style="color: var(--muted)">
                        "Click any demo to experience it in full with its own theme and navigation."
                    </p>
                </div>
                <div class="flex flex-wrap gap-2 mb-12">
                    {GalleryTab::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="flex items-center gap-2 px-6 py-3 rounded-xl font-medium hover:bg-white/5"
                                    style=move || {
                                        if tab() == option {
                                            "background-color: var(--accent); color: var(--bg); border: 1px solid var(--accent)"
                                        } else {
                                            "background-color: transparent; color: var(--text); border: 1px solid var(--border)"
                                        }
                                    }
                                    on:click=move |_| set_tab(option)
                                >
                                    <Icon icon=option.icon() class="w-5 h-5" />
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mb-16">
                    {move || match tab() {
                        GalleryTab::Websites => {
                            view! {
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                                    {catalog::all()
                                        .iter()
                                        .map(|demo| view! { <DemoCard demo demos /> })
                                        .collect_view()}
                                </div>
                                <div
                                    class="p-8 rounded-3xl"
                                    style="background: linear-gradient(135deg, color-mix(in srgb, var(--accent) 8%, transparent), color-mix(in srgb, var(--accent-alt) 8%, transparent)); border: 1px solid var(--border)"
                                >
                                    <div class="flex flex-col md:flex-row items-center gap-6">
                                        <div
                                            class="w-16 h-16 rounded-2xl flex items-center justify-center flex-shrink-0"
                                            style="background-color: var(--accent)"
                                        >
                                            <Icon icon="ph:cursor-click-bold" class="w-8 h-8" style="color: var(--bg)" />
                                        </div>
                                        <div class="text-center md:text-left">
                                            <h3 class="font-display font-bold text-xl mb-2">
                                                "Fully Interactive Experience"
                                            </h3>
                                            <p style="color: var(--muted)">
                                                "Each website demo transforms the whole site with its own theme and navigation. Use the Switch Demo menu to jump between templates or Exit to come back here."
                                            </p>
                                        </div>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        GalleryTab::Mobile => {
                            view! {
                                <div class="p-8 lg:p-12 rounded-3xl" style=MOCKUP_FRAME>
                                    <MobileAppMockups />
                                </div>
                            }
                                .into_any()
                        }
                        GalleryTab::Desktop => {
                            view! {
                                <div class="p-8 lg:p-12 rounded-3xl" style=MOCKUP_FRAME>
                                    <DesktopAppMockups />
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
                <div class="text-center">
                    <h3 class="font-display font-bold text-2xl mb-8">"Technologies Used"</h3>
                    <div class="flex flex-wrap justify-center gap-4">
                        {TECH_STACK
                            .iter()
                            .map(|(icon, label)| {
                                view! {
                                    <span
                                        class="flex items-center gap-3 px-5 py-3 rounded-xl font-medium hover:scale-105"
                                        style="background: linear-gradient(135deg, var(--elevated), var(--surface)); border: 1px solid var(--border)"
                                    >
                                        <Icon icon=*icon class="w-6 h-6" style="color: var(--accent)" />
                                        {*label}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DemoCard(demo: &'static DemoSite, demos: DemoController) -> impl IntoView {
    let t = demo.theme;
    view! {
        <button
            class="demo-card group text-left p-6 rounded-3xl hover:scale-[1.02] overflow-hidden relative"
            style="background-color: var(--surface); border: 1px solid var(--border)"
            on:click=move |_| demos.enter(demo.id)
        >
            <div
                class="aspect-video rounded-2xl mb-6 p-4 flex flex-col"
                style=format!("background-color: {}", t.bg)
            >
                <div class="flex items-center gap-2 mb-4">
                    <div
                        class="w-8 h-8 rounded-lg flex items-center justify-center"
                        style=format!("background-color: {}", t.accent)
                    >
                        <Icon icon=demo.icon class="w-4 h-4" style=format!("color: {}", t.bg) />
                    </div>
                    <span class="font-bold text-sm" style=format!("color: {}", t.text)>
                        {demo.name}
                    </span>
                </div>
                <div class="flex gap-2 flex-wrap">
                    {demo
                        .nav_items
                        .iter()
                        .take(3)
                        .map(|item| {
                            view! {
                                <span
                                    class="text-xs px-2 py-1 rounded-md"
                                    style=format!(
                                        "background-color: {}; color: {}",
                                        t.surface,
                                        t.muted,
                                    )
                                >
                                    {*item}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-auto flex gap-1">
                    {t
                        .roles()
                        .into_iter()
                        .map(|(role, color)| {
                            view! {
                                <span
                                    class="flex-1 h-2 rounded-full"
                                    title=role
                                    style=format!("background-color: {color}")
                                ></span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <span
                class="text-xs font-medium px-3 py-1 rounded-full"
                style=format!(
                    "background-color: {}; color: {}",
                    with_alpha(t.accent, "20"),
                    t.accent,
                )
            >
                {demo.category}
            </span>
            <h3 class="font-display font-semibold text-xl mt-4 mb-2">{demo.name}</h3>
            <p style="color: var(--muted)">{demo.description}</p>
            <div class="flex items-center gap-2 mt-4 font-medium" style="color: var(--accent)">
                "Launch Demo"
                <Icon icon="ph:arrow-right-bold" class="w-4 h-4" />
            </div>
        </button>
    }
}
