//! The immutable [`LocaleList`] value type.
//!
//! A list pairs an ordered, duplicate-free sequence of
//! [`LanguageIdentifier`]s with its canonical tag form (`en-US,fr-FR`). Both
//! are fixed at construction; nothing mutates a list afterwards, so shared
//! references may be read from any thread without locking.
//!
//! Lists are built from owned identifiers. The borrowing constructors clone
//! their inputs, so a caller's identifiers never alias a list's entries.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use unic_langid::LanguageIdentifier;

use crate::error::{LocaleListError, Result};

mod tags;


/// Separator placed between consecutive tags in the canonical form.
pub const TAG_SEPARATOR: char = ',';

static EMPTY: LocaleList = LocaleList::new();

/// Immutable, ordered list of unique locales, highest preference first.
///
/// ```
/// use locale_list::{LanguageIdentifier, LocaleList};
///
/// let english: LanguageIdentifier = "en-US".parse()?;
/// let french: LanguageIdentifier = "fr-FR".parse()?;
/// let list = LocaleList::try_from_locales([english.clone(), french])?;
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.primary(), Some(&english));
/// assert_eq!(list.to_language_tags(), "en-US,fr-FR");
/// assert_eq!(list.to_string(), "[en-US,fr-FR]");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct LocaleList {
    entries: Vec<LanguageIdentifier>,
    tags: String,
}

impl LocaleList {
    /// Create an empty list.
    ///
    /// Prefer [`LocaleList::empty`] when a reference suffices; it hands out
    /// the shared pre-built instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            tags: String::new(),
        }
    }

    /// Return the shared empty list.
    #[must_use]
    pub fn empty() -> &'static Self {
        &EMPTY
    }

    /// Create a list holding at most one locale.
    ///
    /// `None` yields an empty list.
    #[must_use]
    pub fn from_locale(locale: Option<LanguageIdentifier>) -> Self {
        locale.map_or_else(Self::new, |locale| Self {
            tags: locale.to_string(),
            entries: vec![locale],
        })
    }

    /// Create a list holding a copy of `locale`, if any.
    #[must_use]
    pub fn from_locale_ref(locale: Option<&LanguageIdentifier>) -> Self {
        Self::from_locale(locale.cloned())
    }

    /// Build a list from an optional sequence of optional locales.
    ///
    /// An absent or empty sequence yields an empty list. Elements are checked
    /// left to right, the absent check before the duplicate check, and the
    /// first failure aborts the whole call.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleListError::NullEntry`] when an element is `None` and
    /// [`LocaleListError::DuplicateEntry`] when an element equals one that
    /// came before it.
    ///
    /// ```
    /// use locale_list::{LanguageIdentifier, LocaleList, LocaleListError};
    ///
    /// let english: LanguageIdentifier = "en".parse()?;
    /// let result = LocaleList::try_new(Some([Some(english), None]));
    /// assert!(matches!(result, Err(LocaleListError::NullEntry { index: 1 })));
    ///
    /// let empty = LocaleList::try_new(None::<Vec<Option<LanguageIdentifier>>>)?;
    /// assert!(empty.is_empty());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new<I>(locales: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Option<LanguageIdentifier>>,
    {
        let Some(locales) = locales else {
            return Ok(Self::new());
        };

        let locales = locales.into_iter();
        let capacity = locales.size_hint().0;
        let mut entries = Vec::with_capacity(capacity);
        let mut seen = HashSet::with_capacity(capacity);
        let mut tags = String::new();

        for (index, locale) in locales.enumerate() {
            let locale = locale.ok_or(LocaleListError::NullEntry { index })?;
            if seen.contains(&locale) {
                return Err(LocaleListError::DuplicateEntry { index, locale });
            }

            if index > 0 {
                tags.push(TAG_SEPARATOR);
            }
            tags.push_str(&locale.to_string());
            seen.insert(locale.clone());
            entries.push(locale);
        }

        Ok(Self { entries, tags })
    }

    /// Build a list from a sequence of present locales.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleListError::DuplicateEntry`] when a locale repeats.
    pub fn try_from_locales<I>(locales: I) -> Result<Self>
    where
        I: IntoIterator<Item = LanguageIdentifier>,
    {
        Self::try_new(Some(locales.into_iter().map(Some)))
    }

    /// Build a list from copies of the borrowed locales.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleListError::DuplicateEntry`] when a locale repeats.
    pub fn try_from_slice(locales: &[LanguageIdentifier]) -> Result<Self> {
        Self::try_from_locales(locales.iter().cloned())
    }

    /// Return the locale at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LanguageIdentifier> {
        self.entries.get(index)
    }

    /// Return the highest-ranked locale, or `None` when empty.
    #[must_use]
    pub fn primary(&self) -> Option<&LanguageIdentifier> {
        self.entries.first()
    }

    /// Whether the list holds no locales.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of locales in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over the locales in preference order.
    pub fn iter(&self) -> std::slice::Iter<'_, LanguageIdentifier> {
        self.entries.iter()
    }

    /// Borrow the locales as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[LanguageIdentifier] {
        &self.entries
    }

    /// Return the canonical comma-separated tag form.
    ///
    /// The string is computed once at construction. An empty list yields `""`.
    #[must_use]
    pub fn to_language_tags(&self) -> &str {
        &self.tags
    }
}

impl Default for LocaleList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for LocaleList {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.entries == other.entries
    }
}

impl Eq for LocaleList {}

// The tag form is derived from the entries, so hashing the entries alone
// keeps `Hash` consistent with `Eq`.
impl Hash for LocaleList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl fmt::Display for LocaleList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, locale) in self.entries.iter().enumerate() {
            if index > 0 {
                formatter.write_str(",")?;
            }
            fmt::Display::fmt(locale, formatter)?;
        }
        formatter.write_str("]")
    }
}

impl From<LanguageIdentifier> for LocaleList {
    fn from(locale: LanguageIdentifier) -> Self {
        Self::from_locale(Some(locale))
    }
}

impl From<Option<LanguageIdentifier>> for LocaleList {
    fn from(locale: Option<LanguageIdentifier>) -> Self {
        Self::from_locale(locale)
    }
}

impl TryFrom<Vec<LanguageIdentifier>> for LocaleList {
    type Error = LocaleListError;

    fn try_from(locales: Vec<LanguageIdentifier>) -> Result<Self> {
        Self::try_from_locales(locales)
    }
}

impl<'a> IntoIterator for &'a LocaleList {
    type Item = &'a LanguageIdentifier;
    type IntoIter = std::slice::Iter<'a, LanguageIdentifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
