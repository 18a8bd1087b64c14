use leptos::{either::Either, prelude::*};
use leptos_router::{
    components::*,
    hooks::{use_location, use_navigate},
    NavigateOptions,
};

use crate::catalog::{self, DemoSite};
use crate::controller::DemoController;
use crate::palette::with_alpha;
use crate::theme;
use crate::theme_store::ThemeStore;

use super::icon::Icon;

struct NavItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const DEMOS_PATH: &str = "/demos";

static NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        path: "/",
        label: "Home",
        icon: "ph:house-bold",
    },
    NavItem {
        path: "/skills",
        label: "Skills",
        icon: "ph:lightning-bold",
    },
    NavItem {
        path: "/projects",
        label: "Projects",
        icon: "ph:folders-bold",
    },
    NavItem {
        path: DEMOS_PATH,
        label: "Demos",
        icon: "ph:play-circle-bold",
    },
    NavItem {
        path: "/contact",
        label: "Contact",
        icon: "ph:envelope-bold",
    },
];

const NAV_LINK_CLASS: &str =
    "relative px-5 py-2.5 rounded-xl font-medium text-sm flex items-center gap-2 hover:bg-white/5";

fn nav_link_style(current: bool) -> &'static str {
    if current {
        "color: var(--bg); background-color: var(--accent)"
    } else {
        "color: var(--text)"
    }
}

fn go_to_demos() {
    let navigate = use_navigate();
    navigate(DEMOS_PATH, NavigateOptions::default());
}

#[component]
pub fn Navigation(
    demos: DemoController,
    themes: ThemeStore,
    site_name: &'static str,
) -> impl IntoView {
    let (dropdown_open, set_dropdown_open) = signal(false);
    let active = Memo::new(move |_| demos.active_demo());
    let location = use_location();

    // close menus whenever the route changes
    Effect::watch(
        move || location.pathname.get(),
        move |_, _, _| set_dropdown_open(false),
        false,
    );

    view! {
        {move || match active.get() {
            Some(demo) => {
                Either::Left(
                    view! { <DemoNav demo demos dropdown_open set_dropdown_open /> },
                )
            }
            None => {
                Either::Right(
                    view! { <MainNav demos themes site_name dropdown_open set_dropdown_open /> },
                )
            }
        }}
    }
}

#[component]
fn MainNav(
    demos: DemoController,
    themes: ThemeStore,
    site_name: &'static str,
    dropdown_open: ReadSignal<bool>,
    set_dropdown_open: WriteSignal<bool>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;

    let demo_item = move |demo: &'static DemoSite| {
        view! {
            <button
                class="dropdown-item w-full flex items-center gap-4 px-4 py-3 transition-all duration-300 hover:bg-white/5"
                on:click=move |_| {
                    demos.enter(demo.id);
                    go_to_demos();
                    set_dropdown_open(false);
                }
            >
                <div
                    class="w-12 h-12 rounded-xl flex items-center justify-center"
                    style=format!("background-color: {}", demo.theme.accent)
                >
                    <Icon icon=demo.icon class="w-6 h-6" style=format!("color: {}", demo.theme.bg) />
                </div>
                <div class="text-left flex-1">
                    <div class="font-medium" style="color: var(--text)">
                        {demo.name}
                    </div>
                    <div class="text-xs" style="color: var(--muted)">
                        {demo.description}
                    </div>
                </div>
                <Icon icon="ph:arrow-right-bold" class="w-4 h-4" style="color: var(--muted)" />
            </button>
        }
    };

    let swatches = move |size: &'static str| {
        theme::all()
            .iter()
            .map(|t| {
                let key = t.key;
                view! {
                    <button
                        class=move || {
                            if themes.key() == key {
                                format!("{size} rounded-md flex items-center justify-center scale-110 ring-2 ring-white/30")
                            } else {
                                format!("{size} rounded-md flex items-center justify-center opacity-50 hover:opacity-100")
                            }
                        }
                        style=format!("background-color: {}", t.palette.accent)
                        title=t.name
                        on:click=move |_| themes.set(key)
                    >
                        {move || {
                            (themes.key() == key)
                                .then(|| {
                                    view! {
                                        <Icon
                                            icon="ph:check-bold"
                                            class="w-3 h-3"
                                            style=format!("color: {}", t.palette.bg)
                                        />
                                    }
                                })
                        }}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 py-6 transition-all duration-500">
            <div class="max-w-7xl mx-auto px-6 flex items-center justify-between">
                <A href="/" attr:class="relative z-50 flex items-center gap-2 group">
                    <div class="px-4 py-2 rounded-xl glass font-display font-bold text-xl">
                        {site_name}
                    </div>
                </A>
                <div class="hidden lg:flex items-center gap-1 px-2 py-2 rounded-2xl">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let current = move || pathname.get() == item.path;
                            if item.path == DEMOS_PATH {
                                Either::Left(view! {
                                    <div class="relative">
                                        <button
                                            class=NAV_LINK_CLASS
                                            style=move || nav_link_style(current())
                                            on:click=move |_| set_dropdown_open.update(|o| *o = !*o)
                                        >
                                            <Icon icon=item.icon class="w-4 h-4" />
                                            {item.label}
                                            <span class=move || {
                                                if dropdown_open() { "inline-flex rotate-180" } else { "inline-flex" }
                                            }>
                                                <Icon icon="ph:caret-down-bold" class="w-3 h-3" />
                                            </span>
                                        </button>
                                        {move || {
                                            dropdown_open()
                                                .then(|| {
                                                    view! {
                                                        <div
                                                            class="desktop-dropdown absolute top-full left-1/2 -translate-x-1/2 mt-4 w-80 rounded-2xl overflow-hidden shadow-2xl"
                                                            style="background-color: var(--surface); border: 1px solid var(--border)"
                                                        >
                                                            <div
                                                                class="dropdown-header p-4 border-b"
                                                                style="border-color: var(--border)"
                                                            >
                                                                <h3
                                                                    class="font-display font-semibold text-sm"
                                                                    style="color: var(--muted)"
                                                                >
                                                                    "Interactive Demo Sites"
                                                                </h3>
                                                            </div>
                                                            {catalog::all().iter().map(demo_item).collect_view()}
                                                            <A
                                                                href=DEMOS_PATH
                                                                on:click=move |_| set_dropdown_open(false)
                                                                attr:class="block w-full px-4 py-3 text-center font-medium text-sm border-t hover:bg-white/5"
                                                                attr:style="border-color: var(--border); color: var(--accent)"
                                                            >
                                                                "View All Demos"
                                                            </A>
                                                        </div>
                                                    }
                                                })
                                        }}
                                    </div>
                                })
                            } else {
                                Either::Right(view! {
                                    <A
                                        href=item.path
                                        attr:class=NAV_LINK_CLASS
                                        attr:style=move || nav_link_style(current())
                                    >
                                        <Icon icon=item.icon class="w-4 h-4" />
                                        {item.label}
                                    </A>
                                })
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-3">
                    <div class="hidden sm:grid grid-cols-4 gap-1 p-1.5 rounded-xl glass">
                        {swatches("w-6 h-6")}
                    </div>
                    <button
                        class="lg:hidden relative z-50 w-12 h-12 rounded-xl flex items-center justify-center glass"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                    >
                        {move || {
                            let icon = if menu_open() { "ph:x-bold" } else { "ph:list-bold" };
                            view! { <Icon icon class="w-5 h-5" /> }
                        }}
                    </button>
                </div>
            </div>
        </nav>
        {move || {
            menu_open()
                .then(|| {
                    view! {
                        <div
                            class="fixed inset-0 z-40 lg:hidden flex flex-col items-center justify-center"
                            style="background-color: var(--surface)"
                        >
                            <div class="flex flex-col items-center gap-4">
                                {NAV_ITEMS
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <A
                                                href=item.path
                                                on:click=move |_| set_menu_open(false)
                                                attr:class="nav-item flex items-center gap-4 px-8 py-4 rounded-2xl text-2xl font-display font-semibold"
                                            >
                                                <Icon icon=item.icon class="w-7 h-7" />
                                                {item.label}
                                            </A>
                                        }
                                    })
                                    .collect_view()}
                                <div class="nav-item grid grid-cols-4 gap-2 mt-8 p-3 rounded-xl glass">
                                    {swatches("w-10 h-10")}
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn DemoNav(
    demo: &'static DemoSite,
    demos: DemoController,
    dropdown_open: ReadSignal<bool>,
    set_dropdown_open: WriteSignal<bool>,
) -> impl IntoView {
    let t = demo.theme;

    let switch_item = move |other: &'static DemoSite| {
        let current = other.id == demo.id;
        view! {
            <button
                class=if current {
                    "dropdown-item w-full flex items-center gap-4 px-4 py-3"
                } else {
                    "dropdown-item w-full flex items-center gap-4 px-4 py-3 hover:bg-white/5"
                }
                style=if current {
                    format!("background-color: {}", with_alpha(t.accent, "20"))
                } else {
                    "background-color: transparent".to_string()
                }
                on:click=move |_| {
                    demos.switch_to(other.id);
                    set_dropdown_open(false);
                }
            >
                <div
                    class="w-10 h-10 rounded-xl flex items-center justify-center"
                    style=format!("background-color: {}", other.theme.accent)
                >
                    <Icon icon=other.icon class="w-5 h-5" style=format!("color: {}", other.theme.bg) />
                </div>
                <div class="text-left">
                    <div class="font-medium" style=format!("color: {}", t.text)>
                        {other.name}
                    </div>
                    <div class="text-xs" style=format!("color: {}", t.muted)>
                        {other.category}
                    </div>
                </div>
                {current
                    .then(|| {
                        view! {
                            <Icon
                                icon="ph:check-circle-bold"
                                class="w-5 h-5 ml-auto"
                                style=format!("color: {}", t.accent)
                            />
                        }
                    })}
            </button>
        }
    };

    view! {
        <nav
            class="fixed top-0 left-0 right-0 z-50 transition-all duration-500"
            style=format!("background-color: {}", with_alpha(t.bg, "ee"))
        >
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div
                        class="w-10 h-10 rounded-xl flex items-center justify-center"
                        style=format!("background-color: {}", t.accent)
                    >
                        <Icon icon=demo.icon class="w-5 h-5" style=format!("color: {}", t.bg) />
                    </div>
                    <div>
                        <span
                            class="font-display font-bold text-lg"
                            style=format!("color: {}", t.text)
                        >
                            {demo.name}
                        </span>
                        <span
                            class="hidden sm:inline text-xs ml-2 px-2 py-0.5 rounded-full"
                            style=format!(
                                "background-color: {}; color: {}",
                                with_alpha(t.accent, "30"),
                                t.accent,
                            )
                        >
                            "Demo"
                        </span>
                    </div>
                </div>
                // decorative only, the first label reads as the current page
                <div class="hidden lg:flex items-center gap-1">
                    {demo
                        .nav_items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let style = if i == 0 {
                                format!("background-color: {}; color: {}", t.accent, t.bg)
                            } else {
                                format!("background-color: transparent; color: {}", t.muted)
                            };
                            view! {
                                <button
                                    class="px-4 py-2 rounded-xl font-medium text-sm hover:scale-105"
                                    style=style
                                >
                                    {*item}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-3">
                    <div class="relative">
                        <button
                            class="flex items-center gap-2 px-4 py-2 rounded-xl font-medium text-sm"
                            style=format!(
                                "background-color: {}; color: {}; border: 1px solid {}",
                                t.elevated,
                                t.text,
                                t.border,
                            )
                            on:click=move |_| set_dropdown_open.update(|o| *o = !*o)
                        >
                            <Icon icon="ph:swap-bold" class="w-4 h-4" />
                            "Switch Demo"
                            <span class=move || {
                                if dropdown_open() { "inline-flex rotate-180" } else { "inline-flex" }
                            }>
                                <Icon icon="ph:caret-down-bold" class="w-3 h-3" />
                            </span>
                        </button>
                        {move || {
                            dropdown_open()
                                .then(|| {
                                    view! {
                                        <div
                                            class="absolute top-full right-0 mt-2 w-72 rounded-2xl overflow-hidden shadow-2xl"
                                            style=format!(
                                                "background-color: {}; border: 1px solid {}",
                                                t.surface,
                                                t.border,
                                            )
                                        >
                                            {catalog::all().iter().map(switch_item).collect_view()}
                                            <div
                                                class="border-t mt-2 pt-2"
                                                style=format!("border-color: {}", t.border)
                                            >
                                                <button
                                                    class="dropdown-item w-full flex items-center gap-3 px-4 py-3 hover:bg-white/5"
                                                    on:click=move |_| {
                                                        demos.exit();
                                                        go_to_demos();
                                                        set_dropdown_open(false);
                                                    }
                                                >
                                                    <Icon
                                                        icon="ph:grid-four-bold"
                                                        class="w-5 h-5"
                                                        style=format!("color: {}", t.accent)
                                                    />
                                                    <span
                                                        class="font-medium"
                                                        style=format!("color: {}", t.text)
                                                    >
                                                        "View All Demos"
                                                    </span>
                                                    <Icon
                                                        icon="ph:arrow-right-bold"
                                                        class="w-4 h-4 ml-auto"
                                                        style=format!("color: {}", t.muted)
                                                    />
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                    <button
                        class="flex items-center gap-2 px-4 py-2 rounded-xl font-medium text-sm hover:scale-105"
                        style=format!("background-color: {}; color: {}", t.accent, t.bg)
                        on:click=move |_| demos.exit()
                    >
                        <Icon icon="ph:x-bold" class="w-4 h-4" />
                        "Exit"
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_nav_items_cover_pages() {
        let paths: Vec<_> = NAV_ITEMS.iter().map(|item| item.path).collect();
        assert_eq!(paths, ["/", "/skills", "/projects", "/demos", "/contact"]);
        assert_eq!(NAV_ITEMS.iter().filter(|i| i.path == DEMOS_PATH).count(), 1);
        let labels: HashSet<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(labels.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_nav_link_style() {
        assert!(nav_link_style(true).contains("var(--accent)"));
        assert!(!nav_link_style(false).contains("var(--accent)"));
    }
}
