use std::time::Duration;

/// Delays for the overlay sequence: show overlay, commit after `*_commit`,
/// hide the overlay `*_settle` later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    pub enter_commit: Duration,
    pub enter_settle: Duration,
    pub switch_commit: Duration,
    pub switch_settle: Duration,
    pub exit_commit: Duration,
    pub exit_settle: Duration,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            enter_commit: Duration::from_millis(300),
            enter_settle: Duration::from_millis(400),
            switch_commit: Duration::from_millis(300),
            switch_settle: Duration::from_millis(400),
            exit_commit: Duration::from_millis(300),
            exit_settle: Duration::from_millis(300),
        }
    }
}

impl TransitionTimings {
    /// All delays zero, for driving the state machine synchronously.
    pub fn immediate() -> Self {
        Self {
            enter_commit: Duration::ZERO,
            enter_settle: Duration::ZERO,
            switch_commit: Duration::ZERO,
            switch_settle: Duration::ZERO,
            exit_commit: Duration::ZERO,
            exit_settle: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: &'static str,
    pub theme_storage_key: &'static str,
    pub intro_seed: u64,
    pub timings: TransitionTimings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "KevCo",
            theme_storage_key: "kevco-theme",
            intro_seed: 0x4b_65_76_43_6f,
            timings: TransitionTimings::default(),
        }
    }
}

/// Build timestamp captured by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_year() -> Option<i32> {
    use chrono::{DateTime, Datelike};
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings_keep_ordering() {
        let t = TransitionTimings::default();
        assert!(t.enter_commit > Duration::ZERO && t.enter_settle > Duration::ZERO);
        assert_ne!(t, TransitionTimings::immediate());
        assert_eq!(t.exit_commit, Duration::from_millis(300));
        assert_eq!(t.switch_settle, Duration::from_millis(400));
    }

    #[test]
    fn test_build_year() {
        let year = build_year().expect("build.rs should emit an rfc3339 timestamp");
        assert!(year >= 2024);
    }
}
