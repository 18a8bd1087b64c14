use leptos::{ev, ev::KeyboardEvent, prelude::*};
use leptos_router::hooks::{use_location, use_query_map};

use crate::controller::DemoController;
use crate::session::Mode;
use crate::theme_store::ThemeStore;

const DEMOS_PATH: &str = "/demos";

/// Site-wide bindings with no markup of their own:
///
/// - leaving `/demos` (e.g. the back button) drops any preview in progress
/// - `?theme=<name>` picks a global theme
/// - `Escape` exits the active preview, `Alt+T` cycles the global theme
#[component]
pub fn SiteShortcuts(demos: DemoController, themes: ThemeStore) -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::watch(
        move || pathname.get(),
        move |path, _, _| {
            if path != DEMOS_PATH && demos.mode() != Mode::Idle {
                log::debug!("left {DEMOS_PATH} mid-preview, resetting");
                demos.reset();
            }
        },
        false,
    );

    let query = use_query_map();
    Effect::new(move |_| {
        if let Some(name) = query.read().get("theme") {
            if let Err(e) = themes.set_by_name(&name) {
                log::warn!("ignoring ?theme={name}: {e}");
            }
        }
    });

    Effect::new(move |_| {
        let handle = window_event_listener(ev::keydown, move |e: KeyboardEvent| {
            if e.key() == "Escape" && demos.is_active() {
                demos.exit();
            } else if e.alt_key() && e.code() == "KeyT" {
                e.prevent_default();
                themes.cycle();
            }
        });
        on_cleanup(move || handle.remove());
    });
}
