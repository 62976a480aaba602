//! Serde support using the canonical tag form.
//!
//! A list serializes as its comma-separated tag string. Deserialization
//! accepts that string, or `null` for an empty list, and applies the same
//! validation as [`LocaleList::for_language_tags`].

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::list::LocaleList;

impl Serialize for LocaleList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_language_tags())
    }
}

impl<'de> Deserialize<'de> for LocaleList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        Self::for_language_tags(text.as_deref()).map_err(de::Error::custom)
    }
}
