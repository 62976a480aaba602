use std::str::FromStr;

use locale_list::LanguageIdentifier;

/// Locale parsed from a behaviour step, with surrounding quotes removed.
#[derive(Clone, Debug)]
pub struct StepLocale(LanguageIdentifier);

impl FromStr for StepLocale {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tag = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''));

        tag.parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|error| format!("step locale `{tag}` should parse: {error}"))
    }
}

impl StepLocale {
    /// Consumes the step value, yielding the parsed identifier.
    pub fn into_inner(self) -> LanguageIdentifier {
        self.0
    }
}
