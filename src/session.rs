//! Demo preview state machine.
//!
//! [`DemoSession`] never schedules anything itself. Every accepted operation
//! returns a [`Continuation`] that the caller runs through
//! [`DemoSession::resume`] once its delay has elapsed; resuming a commit
//! yields the follow-up that hides the overlay. Each continuation carries the
//! generation it was issued for, so anything issued before a [`reset`] is
//! rejected instead of mutating the new state.
//!
//! [`reset`]: DemoSession::reset

use std::time::Duration;

use crate::catalog::{self, DemoSite};
use crate::config::TransitionTimings;
use crate::error::DemoError;
use crate::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    EnteringTransition,
    Active,
    SwitchingTransition,
    ExitingTransition,
}

impl Mode {
    pub fn is_stable(self) -> bool {
        matches!(self, Mode::Idle | Mode::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Commit,
    HideOverlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continuation {
    pub generation: u64,
    pub step: Step,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoSession {
    mode: Mode,
    active: Option<&'static DemoSite>,
    target: Option<&'static DemoSite>,
    overlay_visible: bool,
    generation: u64,
    timings: TransitionTimings,
}

impl Default for DemoSession {
    fn default() -> Self {
        Self::new(TransitionTimings::default())
    }
}

impl DemoSession {
    pub fn new(timings: TransitionTimings) -> Self {
        Self {
            mode: Mode::Idle,
            active: None,
            target: None,
            overlay_visible: false,
            generation: 0,
            timings,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_demo(&self) -> Option<&'static DemoSite> {
        self.active
    }

    /// True from the moment an operation is accepted until its overlay is
    /// hidden again, which is later than the state commit.
    pub fn is_transitioning(&self) -> bool {
        self.overlay_visible
    }

    pub fn transition_target(&self) -> Option<&'static DemoSite> {
        self.target
    }

    pub fn current_theme(&self, global: &Palette) -> Palette {
        self.active.map(|d| d.theme).unwrap_or(*global)
    }

    /// Palette the overlay is drawn with: the incoming demo when there is
    /// one, otherwise whatever the page is currently showing.
    pub fn overlay_theme(&self, global: &Palette) -> Palette {
        self.target
            .map(|d| d.theme)
            .unwrap_or_else(|| self.current_theme(global))
    }

    pub fn enter(&mut self, id: &str) -> Result<Continuation, DemoError> {
        self.ensure_settled(Mode::Idle)?;
        let demo = catalog::get(id)?;
        Ok(self.begin(
            Mode::EnteringTransition,
            Some(demo),
            self.timings.enter_commit,
        ))
    }

    pub fn exit(&mut self) -> Result<Continuation, DemoError> {
        self.ensure_settled(Mode::Active)?;
        Ok(self.begin(Mode::ExitingTransition, None, self.timings.exit_commit))
    }

    pub fn switch_to(&mut self, id: &str) -> Result<Continuation, DemoError> {
        self.ensure_settled(Mode::Active)?;
        let demo = catalog::get(id)?;
        if self.active.map(|d| d.id) == Some(demo.id) {
            return Err(DemoError::SameDemo(demo.id.to_string()));
        }
        Ok(self.begin(
            Mode::SwitchingTransition,
            Some(demo),
            self.timings.switch_commit,
        ))
    }

    pub fn resume(&mut self, cont: Continuation) -> Result<Option<Continuation>, DemoError> {
        if cont.generation != self.generation {
            return Err(DemoError::Stale {
                got: cont.generation,
                current: self.generation,
            });
        }
        match cont.step {
            Step::Commit => {
                let settle = match self.mode {
                    Mode::EnteringTransition => {
                        self.active = Some(self.target.ok_or(DemoError::InvalidState(self.mode))?);
                        self.mode = Mode::Active;
                        self.timings.enter_settle
                    }
                    Mode::SwitchingTransition => {
                        self.active = Some(self.target.ok_or(DemoError::InvalidState(self.mode))?);
                        self.mode = Mode::Active;
                        self.timings.switch_settle
                    }
                    Mode::ExitingTransition => {
                        self.active = None;
                        self.mode = Mode::Idle;
                        self.timings.exit_settle
                    }
                    mode => return Err(DemoError::InvalidState(mode)),
                };
                log::trace!(
                    "demo session committed {:?} (active: {:?})",
                    self.mode,
                    self.active.map(|d| d.id)
                );
                Ok(Some(Continuation {
                    generation: self.generation,
                    step: Step::HideOverlay,
                    delay: settle,
                }))
            }
            Step::HideOverlay => {
                if !self.mode.is_stable() || !self.overlay_visible {
                    return Err(DemoError::InvalidState(self.mode));
                }
                self.overlay_visible = false;
                self.target = None;
                Ok(None)
            }
        }
    }

    /// Runs a continuation chain to completion without waiting.
    pub fn drive(&mut self, cont: Continuation) -> Result<(), DemoError> {
        let mut next = Some(cont);
        while let Some(cont) = next {
            next = self.resume(cont)?;
        }
        Ok(())
    }

    /// Drops any in-flight transition and returns to `Idle`.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.mode = Mode::Idle;
        self.active = None;
        self.target = None;
        self.overlay_visible = false;
    }

    fn ensure_settled(&self, expected: Mode) -> Result<(), DemoError> {
        if self.overlay_visible {
            return Err(DemoError::Busy);
        }
        if self.mode != expected {
            return Err(DemoError::InvalidState(self.mode));
        }
        Ok(())
    }

    fn begin(
        &mut self,
        mode: Mode,
        target: Option<&'static DemoSite>,
        delay: Duration,
    ) -> Continuation {
        self.generation += 1;
        self.mode = mode;
        self.target = target;
        self.overlay_visible = true;
        log::trace!(
            "demo session entering {:?} (target: {:?})",
            mode,
            target.map(|d| d.id)
        );
        Continuation {
            generation: self.generation,
            step: Step::Commit,
            delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn active_session(id: &str) -> DemoSession {
        let mut s = DemoSession::default();
        let c = s.enter(id).expect("enter should be accepted from idle");
        s.drive(c).expect("enter should complete");
        s
    }

    #[test]
    fn test_full_enter_lifecycle() {
        let mut s = DemoSession::default();
        let commit = s.enter("ecommerce").unwrap();
        assert_eq!(s.mode(), Mode::EnteringTransition);
        assert!(s.is_transitioning());
        assert!(!s.is_active());
        assert_eq!(s.transition_target().map(|d| d.id), Some("ecommerce"));
        assert_eq!(commit.delay, Duration::from_millis(300));

        let hide = s.resume(commit).unwrap().expect("commit should schedule hide");
        assert_eq!(s.mode(), Mode::Active);
        assert_eq!(s.active_demo().map(|d| d.id), Some("ecommerce"));
        // overlay outlives the commit
        assert!(s.is_transitioning());
        assert_eq!(hide.step, Step::HideOverlay);
        assert_eq!(hide.delay, Duration::from_millis(400));

        assert_eq!(s.resume(hide), Ok(None));
        assert!(!s.is_transitioning());
        assert!(s.transition_target().is_none());
        assert_eq!(s.mode(), Mode::Active);
    }

    #[test]
    fn test_enter_while_active_is_noop() {
        let mut s = active_session("saas");
        let before = s.clone();
        assert_eq!(s.enter("saas"), Err(DemoError::InvalidState(Mode::Active)));
        assert_eq!(s, before);
    }

    #[test]
    fn test_unknown_id_from_idle() {
        let mut s = DemoSession::default();
        assert_eq!(
            s.enter("nonexistent"),
            Err(DemoError::UnknownDemo("nonexistent".to_string()))
        );
        assert_eq!(s.mode(), Mode::Idle);
        assert!(!s.is_transitioning());
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn test_switch_never_clears_active() {
        let mut s = active_session("ecommerce");
        let mut next = Some(s.switch_to("saas").unwrap());
        assert_eq!(s.mode(), Mode::SwitchingTransition);
        while let Some(c) = next {
            assert!(s.active_demo().is_some());
            next = s.resume(c).unwrap();
            assert!(s.active_demo().is_some());
        }
        assert_eq!(s.active_demo().map(|d| d.id), Some("saas"));
        assert_eq!(s.mode(), Mode::Active);
        assert!(!s.is_transitioning());
    }

    #[test]
    fn test_self_switch_is_noop() {
        let mut s = active_session("saas");
        let before = s.clone();
        assert_eq!(
            s.switch_to("saas"),
            Err(DemoError::SameDemo("saas".to_string()))
        );
        assert_eq!(s, before);
        assert!(!s.is_transitioning());
    }

    #[test]
    fn test_switch_to_unknown() {
        let mut s = active_session("fitness");
        assert!(matches!(s.switch_to("blog"), Err(DemoError::UnknownDemo(_))));
        assert_eq!(s.active_demo().map(|d| d.id), Some("fitness"));
    }

    #[test]
    fn test_exit_returns_to_idle() {
        let mut s = active_session("restaurant");
        let commit = s.exit().unwrap();
        assert_eq!(s.mode(), Mode::ExitingTransition);
        assert!(s.transition_target().is_none());
        // still showing the demo until the commit
        assert!(s.is_active());

        let hide = s.resume(commit).unwrap().unwrap();
        assert_eq!(s.mode(), Mode::Idle);
        assert!(s.active_demo().is_none());
        assert_eq!(hide.delay, Duration::from_millis(300));
        s.drive(hide).unwrap();
        assert!(!s.is_transitioning());
    }

    #[test]
    fn test_exit_from_idle_is_noop() {
        let mut s = DemoSession::default();
        assert_eq!(s.exit(), Err(DemoError::InvalidState(Mode::Idle)));
        assert_eq!(s, DemoSession::default());
    }

    #[test]
    fn test_calls_rejected_while_busy() {
        let mut s = DemoSession::default();
        let commit = s.enter("agency").unwrap();
        assert_eq!(s.exit(), Err(DemoError::Busy));
        assert_eq!(s.enter("saas"), Err(DemoError::Busy));

        let hide = s.resume(commit).unwrap().unwrap();
        // committed but the overlay is still up
        assert_eq!(s.switch_to("saas"), Err(DemoError::Busy));
        s.drive(hide).unwrap();
        assert_eq!(s.active_demo().map(|d| d.id), Some("agency"));
        assert!(s.exit().is_ok());
    }

    #[test]
    fn test_reset_discards_stale_continuation() {
        let mut s = DemoSession::default();
        let commit = s.enter("ecommerce").unwrap();
        s.reset();
        let before = s.clone();
        assert!(matches!(s.resume(commit), Err(DemoError::Stale { .. })));
        assert_eq!(s, before);
        assert_eq!(s.mode(), Mode::Idle);

        // the session is usable again after the reset
        let c = s.enter("saas").unwrap();
        s.drive(c).unwrap();
        assert_eq!(s.active_demo().map(|d| d.id), Some("saas"));
    }

    #[test]
    fn test_commit_replayed_is_rejected() {
        let mut s = DemoSession::default();
        let commit = s.enter("fitness").unwrap();
        s.resume(commit).unwrap();
        assert_eq!(s.resume(commit), Err(DemoError::InvalidState(Mode::Active)));
    }

    #[test]
    fn test_theme_derivation() {
        let global = theme::default_theme().palette;
        let s = DemoSession::default();
        assert_eq!(s.current_theme(&global), global);
        assert_eq!(s.overlay_theme(&global), global);

        for demo in catalog::all() {
            let s = active_session(demo.id);
            assert_eq!(s.current_theme(&global), demo.theme);
        }
    }

    #[test]
    fn test_overlay_uses_target_theme() {
        let global = theme::default_theme().palette;
        let mut s = active_session("ecommerce");
        s.switch_to("agency").unwrap();
        let agency = catalog::find("agency").unwrap();
        let ecommerce = catalog::find("ecommerce").unwrap();
        assert_eq!(s.current_theme(&global), ecommerce.theme);
        assert_eq!(s.overlay_theme(&global), agency.theme);
    }

    #[test]
    fn test_immediate_timings() {
        let mut s = DemoSession::new(TransitionTimings::immediate());
        let c = s.enter("saas").unwrap();
        assert_eq!(c.delay, Duration::ZERO);
        let hide = s.resume(c).unwrap().unwrap();
        assert_eq!(hide.delay, Duration::ZERO);
    }
}
