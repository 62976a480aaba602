//! Parsing the canonical comma-separated tag form.

use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use super::{LocaleList, TAG_SEPARATOR};
use crate::error::{LocaleListError, Result};

impl LocaleList {
    /// Build a list from comma-separated language tags.
    ///
    /// An absent or empty input yields an empty list. Tags are not trimmed and
    /// interior empty tags are handed to the parser as-is; trailing empty tags
    /// are dropped, so `"en-US,"` reads the same as `"en-US"`.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleListError::InvalidTag`] when a tag fails to parse and
    /// [`LocaleListError::DuplicateEntry`] when two tags name the same locale.
    ///
    /// ```
    /// use locale_list::LocaleList;
    ///
    /// let list = LocaleList::for_language_tags(Some("en_us,fr-FR"))?;
    /// assert_eq!(list.to_language_tags(), "en-US,fr-FR");
    /// assert!(LocaleList::for_language_tags(None)?.is_empty());
    /// # Ok::<(), locale_list::LocaleListError>(())
    /// ```
    pub fn for_language_tags(text: Option<&str>) -> Result<Self> {
        let Some(text) = text.filter(|value| !value.is_empty()) else {
            return Ok(Self::new());
        };

        let locales = split_tags(text)
            .into_iter()
            .map(parse_tag)
            .collect::<Result<Vec<_>>>()?;
        Self::try_from_locales(locales)
    }
}

impl FromStr for LocaleList {
    type Err = LocaleListError;

    fn from_str(text: &str) -> Result<Self> {
        Self::for_language_tags(Some(text))
    }
}

fn split_tags(text: &str) -> Vec<&str> {
    let mut tags: Vec<&str> = text.split(TAG_SEPARATOR).collect();
    while tags.last().is_some_and(|tag| tag.is_empty()) {
        tags.pop();
    }
    tags
}

fn parse_tag(tag: &str) -> Result<LanguageIdentifier> {
    tag.parse::<LanguageIdentifier>()
        .map_err(|source| LocaleListError::InvalidTag {
            tag: tag.to_owned(),
            source,
        })
}
