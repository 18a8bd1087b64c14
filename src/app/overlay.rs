use leptos::prelude::*;

use crate::controller::DemoController;
use crate::theme_store::ThemeStore;

use super::icon::Icon;

/// Full-screen cover shown while a demo is entered, switched or exited.
#[component]
pub fn TransitionOverlay(
    demos: DemoController,
    themes: ThemeStore,
    site_name: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            if !demos.is_transitioning() {
                return None;
            }
            let p = demos.overlay_theme(&themes.theme().palette);
            let target = demos.transition_target();
            let title = target
                .map(|d| format!("Loading {}", d.name))
                .unwrap_or_else(|| "Returning to Portfolio".to_string());
            let subtitle = target.map(|d| d.category).unwrap_or(site_name);
            let icon = target.map(|d| d.icon).unwrap_or("ph:rocket-bold");
            Some(
                view! {
                    <div
                        class="fixed inset-0 z-[100] flex flex-col items-center justify-center demo-overlay"
                        style=format!("background-color: {}", p.bg)
                    >
                        <div
                            class="transition-icon w-24 h-24 rounded-3xl flex items-center justify-center mb-6"
                            style=format!("background-color: {}", p.accent)
                        >
                            <Icon icon class="w-12 h-12" style=format!("color: {}", p.bg) />
                        </div>
                        <div class="transition-text text-center">
                            <h2
                                class="text-2xl font-display font-bold mb-2"
                                style=format!("color: {}", p.text)
                            >
                                {title}
                            </h2>
                            <p style=format!("color: {}", p.muted)>{subtitle}</p>
                        </div>
                        <div class="flex gap-2 mt-8">
                            {(0..3)
                                .map(|i| {
                                    view! {
                                        <div
                                            class="w-2 h-2 rounded-full animate-pulse"
                                            style=format!(
                                                "background-color: {}; animation-delay: {:.2}s",
                                                p.accent,
                                                i as f64 * 0.15,
                                            )
                                        ></div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                },
            )
        }}
    }
}
