//! Persistent locale preference store.
//!
//! `LocaleStore` is the only component permitted to change the active
//! locale. Every change recomputes the derived direction, writes the
//! preference to durable storage, and mirrors the language/direction pair
//! onto the document attributes consumed by the rendering host.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Serialize;

use crate::{Locale, LocaleError, LocaleResult, LocaleState};

/// Document-level attributes mirrored on every locale change.
///
/// Stands in for the root document element of the rendering host: the
/// `lang` tag drives accessibility tooling, the `dir` attribute drives
/// LTR/RTL mirroring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentState {
    pub lang: String,
    pub dir: String,
}

/// Single source of truth for the active locale.
///
/// One writer path (`set_locale`), many readers. Mutation and reads share
/// an interior `RwLock`, so the store can be handed out as
/// `Arc<LocaleStore>` across request handlers.
#[derive(Debug)]
pub struct LocaleStore {
    prefs_path: PathBuf,
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    locale: Locale,
    document: DocumentState,
}

impl Inner {
    fn new(locale: Locale) -> Self {
        Self {
            locale,
            document: DocumentState {
                lang: locale.as_wire().to_string(),
                dir: locale.direction().as_wire().to_string(),
            },
        }
    }
}

impl LocaleStore {
    /// Opens the store, restoring a previously persisted preference.
    ///
    /// An absent preference file or unparseable content falls back to the
    /// English default (the latter with a warning); an actual read failure
    /// is an error.
    pub fn open(prefs_path: impl Into<PathBuf>) -> LocaleResult<Self> {
        let prefs_path = prefs_path.into();
        let locale = match fs::read_to_string(&prefs_path) {
            Ok(contents) => match Locale::from_wire(contents.trim()) {
                Some(locale) => locale,
                None => {
                    tracing::warn!(
                        "ignoring invalid locale preference {:?} in {}",
                        contents.trim(),
                        prefs_path.display()
                    );
                    Locale::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Locale::default(),
            Err(e) => return Err(LocaleError::FileRead(e)),
        };

        Ok(Self {
            prefs_path,
            inner: RwLock::new(Inner::new(locale)),
        })
    }

    /// Current locale and derived direction. Never fails.
    pub fn state(&self) -> LocaleState {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        LocaleState::of(inner.locale)
    }

    /// Last language/direction pair applied to the document.
    pub fn document(&self) -> DocumentState {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.document.clone()
    }

    /// Switches the active locale.
    ///
    /// Recomputes the direction, persists the preference, and updates the
    /// document attributes. Setting the locale it already holds is
    /// idempotent: the state is unchanged and the side effects repeat
    /// harmlessly.
    pub fn set_locale(&self, locale: Locale) -> LocaleResult<LocaleState> {
        self.persist(locale)?;

        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.locale = locale;
        inner.document.lang = locale.as_wire().to_string();
        inner.document.dir = locale.direction().as_wire().to_string();

        Ok(LocaleState::of(locale))
    }

    /// Path of the persisted preference file.
    pub fn prefs_path(&self) -> &Path {
        &self.prefs_path
    }

    fn persist(&self, locale: Locale) -> LocaleResult<()> {
        if let Some(parent) = self.prefs_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(LocaleError::PrefsDirCreation)?;
            }
        }
        // The whole on-disk contract: one file holding exactly "en" or "ar".
        fs::write(&self.prefs_path, locale.as_wire()).map_err(LocaleError::FileWrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    fn store_in(dir: &tempfile::TempDir) -> LocaleStore {
        LocaleStore::open(dir.path().join("locale")).expect("open store")
    }

    #[test]
    fn test_open_defaults_to_english_without_preference() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(
            store.state(),
            LocaleState {
                locale: Locale::En,
                direction: Direction::Ltr
            }
        );
    }

    #[test]
    fn test_open_ignores_invalid_preference_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locale");
        fs::write(&path, "klingon").unwrap();
        let store = LocaleStore::open(&path).unwrap();
        assert_eq!(store.state().locale, Locale::En);
    }

    #[test]
    fn test_set_locale_persists_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locale");
        {
            let store = LocaleStore::open(&path).unwrap();
            store.set_locale(Locale::Ar).unwrap();
            assert_eq!(fs::read_to_string(&path).unwrap(), "ar");
        }
        // Reinitialising the store restores the persisted locale.
        let store = LocaleStore::open(&path).unwrap();
        assert_eq!(store.state().locale, Locale::Ar);
        assert_eq!(store.state().direction, Direction::Rtl);
    }

    #[test]
    fn test_set_locale_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let first = store.set_locale(Locale::Ar).unwrap();
        let second = store.set_locale(Locale::Ar).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.state(), second);
    }

    #[test]
    fn test_switch_back_to_english_restores_ltr() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_locale(Locale::Ar).unwrap();
        store.set_locale(Locale::En).unwrap();
        assert_eq!(
            store.state(),
            LocaleState {
                locale: Locale::En,
                direction: Direction::Ltr
            }
        );
        assert_eq!(fs::read_to_string(store.prefs_path()).unwrap(), "en");
    }

    #[test]
    fn test_document_attributes_follow_every_change() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.document().lang, "en");
        assert_eq!(store.document().dir, "ltr");

        store.set_locale(Locale::Ar).unwrap();
        assert_eq!(store.document().lang, "ar");
        assert_eq!(store.document().dir, "rtl");
    }
}
