use leptos::prelude::*;

use crate::config::{build_year, BUILD_TIME};

#[component]
pub fn Footer(site_name: &'static str) -> impl IntoView {
    let year = build_year()
        .map(|y| y.to_string())
        .unwrap_or_default();
    view! {
        <footer
            class="relative z-10 py-10 px-6 border-t text-sm"
            style="border-color: var(--border); color: var(--muted)"
        >
            <div class="max-w-7xl mx-auto flex flex-col sm:flex-row justify-between gap-4">
                <span>{format!("© {year} {site_name}. All rights reserved.")}</span>
                <span title=BUILD_TIME>"Built with Rust & Leptos"</span>
            </div>
        </footer>
    }
}
