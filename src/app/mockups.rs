use leptos::{either::Either, prelude::*};

use crate::content::{DesktopApp, DesktopLayout, MobileApp, MockTheme, DESKTOP_APPS, MOBILE_APPS};
use crate::palette::with_alpha;

use super::icon::Icon;

const EDITOR_FILES: [&str; 7] = [
    "src/",
    "├── components/",
    "│   ├── App.jsx",
    "│   └── Header.jsx",
    "├── styles/",
    "│   └── main.css",
    "└── index.js",
];

const EDITOR_TABS: [&str; 3] = ["App.jsx", "Header.jsx", "styles.css"];

const MEDIA_TOOLS: [&str; 5] = [
    "ph:selection-bold",
    "ph:scissors-bold",
    "ph:text-t-bold",
    "ph:waveform-bold",
    "ph:magic-wand-bold",
];

#[component]
pub fn MobileAppMockups() -> impl IntoView {
    view! {
        <div>
            <div class="text-center mb-12">
                <h3 class="text-2xl font-display font-bold mb-3">"Mobile Applications"</h3>
                <p style="color: var(--muted)">
                    "Native iOS & Android apps with stunning UI and smooth performance"
                </p>
            </div>
            <div class="grid md:grid-cols-3 gap-8 justify-items-center">
                {MOBILE_APPS.iter().map(|app| view! { <PhoneMockup app /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PhoneMockup(app: &'static MobileApp) -> impl IntoView {
    let t = app.theme;
    let tint = with_alpha(t.muted, "20");
    view! {
        <div class="group animate-slide-up">
            <div class="relative w-64 rounded-[3rem] p-3 bg-[#1a1a1a] shadow-2xl group-hover:scale-105">
                <div class="absolute top-3 left-1/2 -translate-x-1/2 w-28 h-7 rounded-full z-20 bg-black"></div>
                <div
                    class="relative rounded-[2.5rem] overflow-hidden"
                    style=format!("background-color: {}", t.bg)
                >
                    <div class="flex items-center justify-between px-8 pt-12 pb-4">
                        <span class="text-xs font-medium" style=format!("color: {}", t.text)>
                            "9:41"
                        </span>
                        <div class="flex items-center gap-1">
                            <Icon icon="ph:wifi-high-bold" class="w-4 h-4" style=format!("color: {}", t.text) />
                            <Icon icon="ph:battery-full-bold" class="w-5 h-5" style=format!("color: {}", t.text) />
                        </div>
                    </div>
                    <div class="px-6 pb-8">
                        <div class="flex items-center justify-between mb-6">
                            <div>
                                <p class="text-xs" style=format!("color: {}", t.muted)>
                                    "Welcome back"
                                </p>
                                <h4 class="font-bold text-lg" style=format!("color: {}", t.text)>
                                    "Dashboard"
                                </h4>
                            </div>
                            <div
                                class="w-10 h-10 rounded-full flex items-center justify-center"
                                style=format!("background-color: {}", with_alpha(t.accent, "20"))
                            >
                                <Icon icon="ph:user-bold" class="w-5 h-5" style=format!("color: {}", t.accent) />
                            </div>
                        </div>
                        <div class="p-5 rounded-2xl mb-6" style=format!("background-color: {}", t.accent)>
                            <p class="text-xs opacity-80 mb-1" style=format!("color: {}", t.bg)>
                                "Total Balance"
                            </p>
                            <p class="text-2xl font-bold" style=format!("color: {}", t.bg)>
                                "$24,562.00"
                            </p>
                        </div>
                        <div class="grid grid-cols-3 gap-3 mb-6">
                            {[
                                ("Send", "ph:paper-plane-tilt-bold"),
                                ("Receive", "ph:download-bold"),
                                ("More", "ph:dots-three-bold"),
                            ]
                                .into_iter()
                                .map(|(action, icon)| {
                                    view! {
                                        <div
                                            class="p-3 rounded-xl text-center"
                                            style=format!("background-color: {tint}")
                                        >
                                            <Icon
                                                icon
                                                class="w-5 h-5 mx-auto mb-1"
                                                style=format!("color: {}", t.accent)
                                            />
                                            <span class="text-xs" style=format!("color: {}", t.text)>
                                                {action}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <p class="text-xs font-medium mb-3" style=format!("color: {}", t.muted)>
                            "Recent"
                        </p>
                        {(0..2)
                            .map(|_| {
                                view! {
                                    <div class="flex items-center gap-3 mb-3">
                                        <div
                                            class="w-10 h-10 rounded-full flex items-center justify-center"
                                            style=format!("background-color: {tint}")
                                        >
                                            <Icon
                                                icon="ph:shopping-bag-bold"
                                                class="w-5 h-5"
                                                style=format!("color: {}", t.accent)
                                            />
                                        </div>
                                        <div class="flex-1">
                                            <p class="text-sm font-medium" style=format!("color: {}", t.text)>
                                                "Shopping"
                                            </p>
                                            <p class="text-xs" style=format!("color: {}", t.muted)>
                                                "Today"
                                            </p>
                                        </div>
                                        <span class="text-sm font-medium" style=format!("color: {}", t.text)>
                                            "-$45.00"
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div
                        class="flex justify-around py-4 border-t"
                        style=format!("border-color: {}", with_alpha(t.muted, "30"))
                    >
                        {["ph:house-bold", "ph:chart-bar-bold", "ph:credit-card-bold", "ph:gear-bold"]
                            .into_iter()
                            .enumerate()
                            .map(|(i, icon)| {
                                let color = if i == 0 { t.accent } else { t.muted };
                                view! { <Icon icon class="w-6 h-6" style=format!("color: {color}") /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="text-center mt-6">
                <h4 class="font-semibold">{app.name}</h4>
                <p class="text-sm" style="color: var(--muted)">
                    {app.category}
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn DesktopAppMockups() -> impl IntoView {
    view! {
        <div>
            <div class="text-center mb-12">
                <h3 class="text-2xl font-display font-bold mb-3">"Desktop Applications"</h3>
                <p style="color: var(--muted)">
                    "Powerful cross-platform desktop apps built with Electron and native technologies"
                </p>
            </div>
            <div class="space-y-12">
                {DESKTOP_APPS.iter().map(|app| view! { <WindowMockup app /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn WindowMockup(app: &'static DesktopApp) -> impl IntoView {
    let t = app.theme;
    view! {
        <div class="group animate-slide-up">
            <div
                class="rounded-2xl overflow-hidden shadow-2xl group-hover:scale-[1.02]"
                style=format!("background-color: {}", t.bg)
            >
                <div
                    class="flex items-center justify-between px-4 py-3"
                    style=format!("background-color: {}", t.surface)
                >
                    <div class="flex items-center gap-2">
                        <div class="flex gap-2">
                            <span class="w-3 h-3 rounded-full bg-red-500"></span>
                            <span class="w-3 h-3 rounded-full bg-yellow-500"></span>
                            <span class="w-3 h-3 rounded-full bg-green-500"></span>
                        </div>
                        <span class="ml-4 text-sm font-medium" style=format!("color: {}", t.text)>
                            {app.name}
                        </span>
                    </div>
                    <div class="flex items-center gap-4">
                        <Icon icon="ph:magnifying-glass" class="w-4 h-4" style=format!("color: {}", t.muted) />
                        <Icon icon="ph:gear" class="w-4 h-4" style=format!("color: {}", t.muted) />
                    </div>
                </div>
                {match app.layout {
                    DesktopLayout::Editor => Either::Left(view! { <EditorBody t /> }),
                    DesktopLayout::MediaEditor => Either::Right(view! { <MediaBody t /> }),
                }}
            </div>
            <div class="flex items-center justify-between mt-6 px-4">
                <div>
                    <h4 class="font-semibold text-lg">{app.name}</h4>
                    <p class="text-sm" style="color: var(--muted)">
                        {app.category}
                    </p>
                </div>
                <div class="flex items-center gap-2">
                    <Icon icon="ph:apple-logo-bold" class="w-5 h-5" style="color: var(--muted)" />
                    <Icon icon="ph:windows-logo-bold" class="w-5 h-5" style="color: var(--muted)" />
                    <Icon icon="ph:linux-logo-bold" class="w-5 h-5" style="color: var(--muted)" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn EditorBody(t: MockTheme) -> impl IntoView {
    let code = [
        ("import React from \"react\"", t.accent),
        ("import { Header } from \"./Header\"", t.accent),
        ("", t.muted),
        ("export default function App() {", "#f472b6"),
        ("  return (", t.text),
        ("    <div className=\"app\">", "#22d3ee"),
        ("      <Header />", "#22d3ee"),
        ("      <main>Hello World</main>", "#22d3ee"),
        ("    </div>", "#22d3ee"),
        ("  )", t.text),
        ("}", "#f472b6"),
    ];
    view! {
        <div class="flex h-96">
            <div class="w-56 p-4 border-r" style=format!("border-color: {}", t.surface)>
                <div class="flex items-center gap-2 mb-4">
                    <Icon icon="ph:folder-bold" class="w-4 h-4" style=format!("color: {}", t.accent) />
                    <span class="text-sm font-medium" style=format!("color: {}", t.text)>
                        "Project Files"
                    </span>
                </div>
                <div class="space-y-1 pl-2">
                    {EDITOR_FILES
                        .iter()
                        .enumerate()
                        .map(|(i, file)| {
                            let color = if file.ends_with(".jsx") { t.accent } else { t.muted };
                            let bg = if i == 2 {
                                with_alpha(t.accent, "20")
                            } else {
                                "transparent".to_string()
                            };
                            view! {
                                <div
                                    class="text-xs font-mono py-1 px-2 rounded whitespace-pre"
                                    style=format!("color: {color}; background-color: {bg}")
                                >
                                    {*file}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex-1 p-4">
                <div class="flex items-center gap-4 mb-4">
                    {EDITOR_TABS
                        .iter()
                        .enumerate()
                        .map(|(i, tab)| {
                            let style = if i == 0 {
                                format!("background-color: {}; color: {}", t.surface, t.text)
                            } else {
                                format!("background-color: transparent; color: {}", t.muted)
                            };
                            view! {
                                <span class="text-xs px-3 py-1 rounded" style=style>
                                    {*tab}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="font-mono text-xs space-y-1">
                    {code
                        .into_iter()
                        .enumerate()
                        .map(|(i, (line, color))| {
                            view! {
                                <div class="flex whitespace-pre">
                                    <span
                                        class="w-8 text-right mr-4"
                                        style=format!("color: {}", t.muted)
                                    >
                                        {i + 1}
                                    </span>
                                    <span style=format!("color: {color}")>{line}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="w-48 p-4 border-l" style=format!("border-color: {}", t.surface)>
                <div class="text-xs font-medium mb-3" style=format!("color: {}", t.text)>
                    "Terminal"
                </div>
                <div class="font-mono text-xs space-y-1" style=format!("color: {}", t.muted)>
                    <div>"> npm run dev"</div>
                    <div class="text-green-500">"✓ Ready in 234ms"</div>
                    <div>"Local: http://localhost:3000"</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MediaBody(t: MockTheme) -> impl IntoView {
    let tracks = [
        ("Video Track 1", "80%", t.accent),
        ("Video Track 2", "60%", t.accent),
        ("Audio Track", "100%", "#22c55e"),
    ];
    view! {
        <div class="flex h-96">
            <div class="w-48 p-4 border-r" style=format!("border-color: {}", t.surface)>
                <div class="text-xs font-medium mb-4" style=format!("color: {}", t.text)>
                    "Media Library"
                </div>
                <div class="grid grid-cols-2 gap-2">
                    {(0..6)
                        .map(|_| {
                            view! {
                                <div
                                    class="aspect-video rounded flex items-center justify-center"
                                    style=format!("background-color: {}", t.surface)
                                >
                                    <Icon
                                        icon="ph:film-strip-bold"
                                        class="w-6 h-6"
                                        style=format!("color: {}", t.muted)
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex-1 flex flex-col">
                <div class="flex-1 flex items-center justify-center bg-black">
                    <div class="text-center">
                        <Icon
                            icon="ph:play-circle-bold"
                            class="w-16 h-16 mx-auto mb-2"
                            style=format!("color: {}", t.accent)
                        />
                        <span class="text-sm" style=format!("color: {}", t.muted)>
                            "Preview Window"
                        </span>
                    </div>
                </div>
                <div class="p-4" style=format!("background-color: {}", t.surface)>
                    <div class="flex items-center gap-4 mb-3">
                        <Icon icon="ph:skip-back-bold" class="w-4 h-4" style=format!("color: {}", t.muted) />
                        <Icon icon="ph:play-bold" class="w-5 h-5" style=format!("color: {}", t.accent) />
                        <Icon icon="ph:skip-forward-bold" class="w-4 h-4" style=format!("color: {}", t.muted) />
                        <span class="text-xs font-mono" style=format!("color: {}", t.muted)>
                            "00:32:15 / 02:15:00"
                        </span>
                    </div>
                    <div class="space-y-2">
                        {tracks
                            .into_iter()
                            .map(|(name, width, color)| {
                                view! {
                                    <div class="flex items-center gap-3">
                                        <span
                                            class="text-xs w-24 truncate"
                                            style=format!("color: {}", t.muted)
                                        >
                                            {name}
                                        </span>
                                        <div
                                            class="flex-1 h-6 rounded"
                                            style=format!("background-color: {}", t.bg)
                                        >
                                            <div
                                                class="h-full rounded opacity-70"
                                                style=format!("width: {width}; background-color: {color}")
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div
                class="w-16 py-4 flex flex-col items-center gap-3 border-l"
                style=format!("border-color: {}", t.surface)
            >
                {MEDIA_TOOLS
                    .iter()
                    .map(|icon| {
                        view! {
                            <button class="w-10 h-10 rounded-lg flex items-center justify-center hover:bg-white/5">
                                <Icon icon=*icon class="w-5 h-5" style=format!("color: {}", t.muted) />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
