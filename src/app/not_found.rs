use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::icon::Icon;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found" />
        <div class="min-h-screen flex items-center justify-center px-6">
            <div class="text-center max-w-xl">
                <div class="font-display font-bold text-[10rem] leading-none gradient-text">
                    "404"
                </div>
                <h1 class="font-display font-bold text-3xl mb-4">"Lost in the void"</h1>
                <p class="text-lg mb-10" style="color: var(--muted)">
                    "The page you are looking for does not exist or has been moved."
                </p>
                <A
                    href="/"
                    attr:class="inline-flex items-center gap-3 px-8 py-4 rounded-xl font-semibold"
                    attr:style="background-color: var(--accent); color: var(--bg)"
                >
                    <Icon icon="ph:house-bold" class="w-5 h-5" />
                    "Back Home"
                </A>
            </div>
        </div>
    }
}
