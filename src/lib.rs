//! Immutable, ordered, deduplicated lists of locale preferences.
//!
//! [`LocaleList`] records a user's ranked language and region preferences as
//! [`LanguageIdentifier`]s together with a canonical comma-separated tag form
//! such as `en-US,fr-FR`. Lists are validated once at construction and never
//! change afterwards. [`LocaleList::get_default`] exposes a process-wide
//! cached list built from the current system locale.

pub mod default_list;
pub mod error;
pub mod list;
mod serialization;

pub use default_list::{
    DEFAULT_LOCALE_ENV, DefaultLocaleCache, FALLBACK_LOCALE, LocaleOrigin, ProcessLocale,
    ResolvedLocale, SystemLocale, normalise_locale_tag, resolve_locale,
};
pub use error::{LocaleListError, Result};
pub use list::{LocaleList, TAG_SEPARATOR};

/// Re-export of the locale identifier type stored in a [`LocaleList`].
pub use unic_langid::LanguageIdentifier;
