use std::time::Duration;

use leptos::{either::Either, prelude::*};
use leptos_use::{use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};

use crate::content::StatValue;

const COUNT_DURATION: Duration = Duration::from_secs(2);

/// Counts a stat like `8+` up from zero once mounted.
#[component]
pub fn AnimatedCounter(
    value: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let stat = StatValue::parse(value);
    if let StatValue::Fixed(raw) = stat {
        return Either::Left(view! { <span class=class>{raw}</span> });
    }

    let (elapsed, set_elapsed) = signal(Duration::ZERO);
    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        set_elapsed.update(|e| *e += Duration::from_secs_f64(args.delta.max(0.0) / 1000.0));
    });
    Effect::new(move |_| {
        if elapsed.get() >= COUNT_DURATION {
            pause();
        }
    });

    Either::Right(view! {
        <span class=class>
            {move || stat.display_at(elapsed.get().as_secs_f64() / COUNT_DURATION.as_secs_f64())}
        </span>
    })
}
