use leptos::prelude::*;

/// Iconify glyph, e.g. `ph:rocket-bold`. The iconify script swaps the span
/// for an inline svg in the browser.
#[component]
pub fn Icon(
    icon: &'static str,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] style: String,
) -> impl IntoView {
    view! { <span class=format!("iconify {class}") data-icon=icon style=style></span> }
}
