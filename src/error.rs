//! Errors raised while building a [`LocaleList`](crate::LocaleList).
//!
//! Construction is all-or-nothing: the first failing element aborts the call
//! and no partial list is returned. Out-of-range lookups are not errors and
//! never surface here.

use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// Result alias used by the fallible constructors.
pub type Result<T> = std::result::Result<T, LocaleListError>;

/// Errors that can occur while constructing a locale list.
#[derive(Debug, Error)]
pub enum LocaleListError {
    /// An element of the input sequence was absent.
    #[error("locale entry {index} is absent")]
    NullEntry {
        /// Zero-based position of the absent element.
        index: usize,
    },

    /// An element repeats a locale accepted earlier in the same call.
    #[error("locale entry {index} repeats `{locale}`")]
    DuplicateEntry {
        /// Zero-based position of the repeated element.
        index: usize,
        /// The locale that appeared twice.
        locale: LanguageIdentifier,
    },

    /// The language tag parser rejected a tag.
    #[error("invalid language tag `{tag}`: {source}")]
    InvalidTag {
        /// The tag text exactly as it appeared in the input.
        tag: String,
        /// Parser error, passed through untouched.
        #[source]
        source: LanguageIdentifierError,
    },
}

impl LocaleListError {
    /// Position of the offending element, when the error concerns one.
    ///
    /// Parser failures carry the tag text instead of a position.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::NullEntry { index } | Self::DuplicateEntry { index, .. } => Some(*index),
            Self::InvalidTag { .. } => None,
        }
    }
}
