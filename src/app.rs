mod contact;
mod counter;
mod demo_sites;
mod demos;
mod footer;
mod homepage;
mod icon;
mod intro;
mod mockups;
mod navigation;
mod not_found;
mod overlay;
mod projects;
mod shortcuts;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use crate::controller::DemoController;
use crate::theme::css_variables;
use crate::theme_store::ThemeStore;
use contact::ContactPage;
use demos::DemosPage;
use footer::Footer;
use homepage::HomePage;
use navigation::Navigation;
use not_found::NotFound;
use overlay::TransitionOverlay;
use projects::ProjectsPage;
use shortcuts::SiteShortcuts;
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script src="https://code.iconify.design/3/3.1.1/iconify.min.js"></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::default();
    let site_name = config.site_name;
    let intro_seed = config.intro_seed;
    let themes = ThemeStore::new(config.theme_storage_key);
    let demos = DemoController::new(config.timings);
    // the intro plays once per page load, not on every visit to `/`
    let intro_done = RwSignal::new(false);

    // global variables first, then the active demo's palette on top
    let root_style = move || {
        let theme = themes.theme();
        let p = demos.current_theme(&theme.palette);
        format!(
            "{} --bg: {}; --surface: {}; --text: {}; --muted: {}; --accent: {}; --border: {}; background-color: {}; color: {};",
            css_variables(theme),
            p.bg,
            p.surface,
            p.text,
            p.muted,
            p.accent,
            p.border,
            p.bg,
            p.text,
        )
    };

    view! {
        <Title formatter=move |title| format!("{title} | {site_name}") />
        <Meta name="color-scheme" content=move || themes.key().color_scheme() />

        <Router>
            <SiteShortcuts demos themes />
            <div class="min-h-screen flex flex-col relative" style=root_style>
                <Navigation demos themes site_name />
                <TransitionOverlay demos themes site_name />
                <main class="flex-grow">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route
                            path=path!("/")
                            view=move || {
                                view! {
                                    <HomePage site_name intro_seed intro_done />
                                }
                            }
                        />
                        <Route path=path!("/skills") view=SkillsPage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/demos") view=move || view! { <DemosPage demos /> } />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer site_name />
            </div>
        </Router>
    }
}
