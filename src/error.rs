use thiserror::Error;

use crate::session::Mode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error("no demo site with id `{0}`")]
    UnknownDemo(String),
    #[error("demo `{0}` is already active")]
    SameDemo(String),
    #[error("a transition is already in flight")]
    Busy,
    #[error("operation not valid while {0:?}")]
    InvalidState(Mode),
    #[error("continuation from generation {got} is stale (current {current})")]
    Stale { got: u64, current: u64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate demo id `{0}`")]
    DuplicateId(&'static str),
    #[error("demo `{id}` has an empty `{role}` colour")]
    IncompletePalette {
        id: &'static str,
        role: &'static str,
    },
    #[error("demo `{0}` has no navigation items")]
    NoNavItems(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("`{0}` is required")]
    Missing(&'static str),
    #[error("`{0}` is not an email address")]
    InvalidEmail(String),
    #[error("unknown project type `{0}`")]
    UnknownProjectType(String),
}
