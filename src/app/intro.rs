use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};

use crate::intro::{phase_at, IntroScene, IntroTimeline, Phase, TOTAL_DURATION};

const VIEW_W: f64 = 1280.0;
const VIEW_H: f64 = 720.0;
// how long the revealed name stays up before the intro hands over
const REVEAL_HOLD: Duration = Duration::from_millis(1200);

#[component]
pub fn IntroAnimation(
    seed: u64,
    site_name: &'static str,
    #[prop(into)] on_complete: Callback<()>,
) -> impl IntoView {
    let scene = StoredValue::new(IntroScene::new(seed, VIEW_W, VIEW_H));
    let (elapsed, set_elapsed) = signal(Duration::ZERO);
    let (finished, set_finished) = signal(false);
    let timeline = StoredValue::new(IntroTimeline::new(
        TOTAL_DURATION + REVEAL_HOLD,
        move || set_finished(true),
    ));

    // notify outside of the timeline borrow, the parent unmounts us
    Effect::new(move |_| {
        if finished.get() {
            on_complete.run(());
        }
    });

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let delta = Duration::from_secs_f64(args.delta.max(0.0) / 1000.0);
        if let Some(t) = timeline.try_update_value(|t| {
            t.tick(delta);
            t.elapsed()
        }) {
            set_elapsed(t);
        }
    });

    let skip = move |_| {
        pause();
        timeline.update_value(|t| t.skip());
    };

    view! {
        <div class="fixed inset-0 z-[200] bg-[#0a0a0a] flex items-center justify-center">
            <svg
                viewBox=format!("0 0 {VIEW_W} {VIEW_H}")
                preserveAspectRatio="xMidYMid slice"
                class="absolute inset-0 w-full h-full"
            >
                {move || {
                    let frame = scene.with_value(|s| s.frame(elapsed.get()));
                    let flash = frame.flash;
                    view! {
                        {frame
                            .dots
                            .into_iter()
                            .map(|d| {
                                view! {
                                    <circle
                                        cx=format!("{:.1}", d.x)
                                        cy=format!("{:.1}", d.y)
                                        r=format!("{:.2}", d.r)
                                        fill=d.fill
                                        opacity=format!("{:.3}", d.opacity)
                                    />
                                }
                            })
                            .collect_view()}
                        <rect
                            width="100%"
                            height="100%"
                            fill="rgb(219, 193, 132)"
                            opacity=format!("{flash:.3}")
                        />
                    }
                }}
            </svg>
            {move || {
                let revealed = phase_at(
                    elapsed.get().as_secs_f64() / TOTAL_DURATION.as_secs_f64(),
                ) == Phase::Reveal;
                revealed
                    .then(|| {
                        view! {
                            <h1 class="relative z-10 font-display font-bold text-6xl intro-reveal text-[#DBC184]">
                                {site_name}
                            </h1>
                        }
                    })
            }}
            <button
                class="absolute bottom-8 right-8 z-10 px-4 py-2 rounded-xl text-sm text-[#a3a3a3] hover:text-white"
                on:click=skip
            >
                "Skip intro"
            </button>
        </div>
    }
}
