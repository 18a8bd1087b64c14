use std::time::Duration;

use leptos::prelude::*;

use crate::catalog::DemoSite;
use crate::config::TransitionTimings;
use crate::error::DemoError;
use crate::palette::Palette;
use crate::session::{Continuation, DemoSession, Mode};

/// Runs a callback once `delay` has passed.
pub type Timer = fn(Box<dyn FnOnce()>, Duration);

fn browser_timer(cb: Box<dyn FnOnce()>, delay: Duration) {
    set_timeout(cb, delay);
}

/// Reactive handle over a [`DemoSession`].
///
/// Built once in `App` and handed to the views that need it. Operations that
/// the session rejects (unknown id, wrong state, transition in flight) are
/// logged and otherwise ignored.
#[derive(Debug, Clone, Copy)]
pub struct DemoController {
    session: RwSignal<DemoSession>,
    timer: Timer,
}

impl DemoController {
    pub fn new(timings: TransitionTimings) -> Self {
        Self::with_timer(timings, browser_timer)
    }

    pub fn with_timer(timings: TransitionTimings, timer: Timer) -> Self {
        Self {
            session: RwSignal::new(DemoSession::new(timings)),
            timer,
        }
    }

    pub fn enter(self, id: &str) {
        let res = self.session.try_update(|s| s.enter(id));
        self.accept("enter", res);
    }

    pub fn exit(self) {
        let res = self.session.try_update(|s| s.exit());
        self.accept("exit", res);
    }

    pub fn switch_to(self, id: &str) {
        let res = self.session.try_update(|s| s.switch_to(id));
        self.accept("switch", res);
    }

    /// Abandons whatever is in flight and drops back to the portfolio.
    pub fn reset(self) {
        self.session.update(|s| s.reset());
    }

    pub fn mode(&self) -> Mode {
        self.session.with(|s| s.mode())
    }

    pub fn is_active(&self) -> bool {
        self.session.with(|s| s.is_active())
    }

    pub fn active_demo(&self) -> Option<&'static DemoSite> {
        self.session.with(|s| s.active_demo())
    }

    pub fn is_transitioning(&self) -> bool {
        self.session.with(|s| s.is_transitioning())
    }

    pub fn transition_target(&self) -> Option<&'static DemoSite> {
        self.session.with(|s| s.transition_target())
    }

    pub fn current_theme(&self, global: &Palette) -> Palette {
        self.session.with(|s| s.current_theme(global))
    }

    pub fn overlay_theme(&self, global: &Palette) -> Palette {
        self.session.with(|s| s.overlay_theme(global))
    }

    fn accept(self, op: &str, res: Option<Result<Continuation, DemoError>>) {
        match res {
            Some(Ok(cont)) => self.schedule(cont),
            Some(Err(e)) => log::debug!("ignoring demo {op}: {e}"),
            // signal disposed, the app is going away
            None => {}
        }
    }

    fn schedule(self, cont: Continuation) {
        (self.timer)(
            Box::new(move || {
                let res = self.session.try_update(|s| s.resume(cont));
                match res {
                    Some(Ok(Some(next))) => self.schedule(next),
                    Some(Ok(None)) | None => {}
                    Some(Err(e)) => log::debug!("dropping demo continuation: {e}"),
                }
            }),
            cont.delay,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::theme;

    thread_local! {
        static PENDING: RefCell<Vec<(Box<dyn FnOnce()>, Duration)>> = RefCell::new(Vec::new());
    }

    fn run_now(cb: Box<dyn FnOnce()>, _delay: Duration) {
        cb();
    }

    fn queue(cb: Box<dyn FnOnce()>, delay: Duration) {
        PENDING.with(|p| p.borrow_mut().push((cb, delay)));
    }

    /// Fires the oldest queued callback, returning its delay.
    fn fire_next() -> Option<Duration> {
        let next = PENDING.with(|p| {
            let mut p = p.borrow_mut();
            (!p.is_empty()).then(|| p.remove(0))
        });
        next.map(|(cb, delay)| {
            cb();
            delay
        })
    }

    #[test]
    fn test_rejected_operations_leave_state() {
        let owner = Owner::new();
        owner.set();
        let demos = DemoController::with_timer(TransitionTimings::default(), queue);

        demos.enter("nonexistent");
        demos.exit();
        demos.switch_to("saas");

        assert_eq!(fire_next(), None);
        assert_eq!(demos.mode(), Mode::Idle);
        assert!(!demos.is_active());
        assert!(!demos.is_transitioning());
        assert!(demos.transition_target().is_none());
        let global = theme::default_theme().palette;
        assert_eq!(demos.current_theme(&global), global);
        assert_eq!(demos.overlay_theme(&global), global);
    }

    #[test]
    fn test_immediate_timer_runs_whole_chain() {
        let owner = Owner::new();
        owner.set();
        let demos = DemoController::with_timer(TransitionTimings::immediate(), run_now);

        demos.enter("fitness");
        assert_eq!(demos.mode(), Mode::Active);
        assert_eq!(demos.active_demo().map(|d| d.id), Some("fitness"));
        assert!(!demos.is_transitioning());

        demos.switch_to("agency");
        assert_eq!(demos.active_demo().map(|d| d.id), Some("agency"));

        demos.exit();
        assert_eq!(demos.mode(), Mode::Idle);
        assert!(demos.active_demo().is_none());
        assert!(!demos.is_transitioning());
    }

    #[test]
    fn test_commit_then_hide_overlay() {
        let owner = Owner::new();
        owner.set();
        let demos = DemoController::with_timer(TransitionTimings::default(), queue);

        demos.enter("saas");
        assert_eq!(demos.mode(), Mode::EnteringTransition);
        assert!(demos.is_transitioning());
        assert!(!demos.is_active());

        // rejected while the overlay is up, nothing extra queued
        demos.exit();
        assert_eq!(
            fire_next(),
            Some(TransitionTimings::default().enter_commit)
        );
        assert_eq!(demos.mode(), Mode::Active);
        assert_eq!(demos.active_demo().map(|d| d.id), Some("saas"));
        assert!(demos.is_transitioning());

        assert_eq!(
            fire_next(),
            Some(TransitionTimings::default().enter_settle)
        );
        assert!(!demos.is_transitioning());
        assert!(demos.transition_target().is_none());
        assert_eq!(fire_next(), None);
    }

    #[test]
    fn test_reset_drops_pending_continuation() {
        let owner = Owner::new();
        owner.set();
        let demos = DemoController::with_timer(TransitionTimings::default(), queue);

        demos.enter("restaurant");
        demos.reset();
        assert_eq!(demos.mode(), Mode::Idle);
        assert!(!demos.is_transitioning());

        // the stale commit fires and is dropped
        assert!(fire_next().is_some());
        assert_eq!(demos.mode(), Mode::Idle);
        assert!(demos.active_demo().is_none());
        assert_eq!(fire_next(), None);
    }
}
