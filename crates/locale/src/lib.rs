//! # Mediboard Locale
//!
//! Single source of truth for the dashboard's display language and text
//! direction.
//!
//! This crate contains the locale/directionality subsystem:
//! - `Locale`/`Direction` enums with their wire-string mappings
//! - `LocaleStore`: the one writer path for the active locale, with a
//!   persisted preference and document-attribute side effects
//! - a keyed translation dictionary (`dictionary::text`)
//!
//! The store is constructed once at process startup and injected into
//! consumers (`Arc<LocaleStore>`); nothing in this crate is reachable as
//! ambient global state.

pub mod dictionary;
mod locale;
mod store;

pub use locale::{Direction, Locale, LocaleState};
pub use store::{DocumentState, LocaleStore};

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("failed to create preferences directory: {0}")]
    PrefsDirCreation(std::io::Error),
    #[error("failed to read locale preference: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write locale preference: {0}")]
    FileWrite(std::io::Error),
}

pub type LocaleResult<T> = std::result::Result<T, LocaleError>;
