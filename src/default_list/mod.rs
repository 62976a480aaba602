//! Process-wide cached default locale list.
//!
//! [`LocaleList::get_default`] wraps the current system locale in a
//! single-entry list. The list is cached and rebuilt lazily on read whenever
//! the observed locale no longer matches the cached primary entry. Reading the
//! source, comparing, and replacing the cache all happen under one lock, so
//! callers only ever see a complete list.

use std::sync::{Arc, Mutex, PoisonError};

use log::debug;
use unic_langid::LanguageIdentifier;

use crate::list::LocaleList;

mod source;


pub use source::{
    DEFAULT_LOCALE_ENV, FALLBACK_LOCALE, LocaleOrigin, ProcessLocale, ResolvedLocale,
    SystemLocale, normalise_locale_tag, resolve_locale,
};

static DEFAULT_CACHE: DefaultLocaleCache<ProcessLocale> = DefaultLocaleCache::new(ProcessLocale);

/// Lazily rebuilt single-entry list derived from a [`SystemLocale`].
#[derive(Debug)]
pub struct DefaultLocaleCache<S> {
    source: S,
    cached: Mutex<Option<Arc<LocaleList>>>,
}

impl<S> DefaultLocaleCache<S> {
    /// Create an empty cache reading from `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    /// Borrow the locale source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S: SystemLocale> DefaultLocaleCache<S> {
    /// Return the list for the current system locale.
    ///
    /// Successive calls return the same [`Arc`] until the source reports a
    /// different locale. The returned list always holds exactly one entry.
    pub fn get(&self) -> Arc<LocaleList> {
        // The guarded value is only ever replaced wholesale, so a poisoned
        // lock still holds a complete list.
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.source.current_locale();

        if let Some(list) = cached
            .as_ref()
            .filter(|list| is_current(list, &current))
        {
            return Arc::clone(list);
        }

        debug!(
            target: "locale_list::default",
            "rebuilding default locale list for `{current}`",
        );
        let rebuilt = Arc::new(LocaleList::from_locale(Some(current)));
        *cached = Some(Arc::clone(&rebuilt));
        rebuilt
    }
}

fn is_current(list: &LocaleList, current: &LanguageIdentifier) -> bool {
    list.len() == 1 && list.primary() == Some(current)
}

impl LocaleList {
    /// Return the default list for the process.
    ///
    /// The list holds the locale resolved by [`ProcessLocale`] and is rebuilt
    /// whenever that locale changes.
    ///
    /// ```
    /// use locale_list::LocaleList;
    ///
    /// let default = LocaleList::get_default();
    /// assert_eq!(default.len(), 1);
    /// ```
    #[must_use]
    pub fn get_default() -> Arc<Self> {
        DEFAULT_CACHE.get()
    }
}
