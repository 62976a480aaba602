use std::env;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use unic_langid::{LanguageIdentifier, langid};

/// Environment variable overriding the process default locale.
pub const DEFAULT_LOCALE_ENV: &str = "LOCALE_LIST_DEFAULT";

/// Locale used when neither the environment nor the host yields one.
pub const FALLBACK_LOCALE: &str = "en-US";

const FALLBACK_LANGUAGE: LanguageIdentifier = langid!("en-US");

/// Supplies the current system locale on demand.
///
/// Implementations may return a different locale on each call; the default
/// list cache rebuilds whenever the answer changes.
pub trait SystemLocale {
    /// Return the locale currently in effect.
    fn current_locale(&self) -> LanguageIdentifier;
}

/// Where a resolved default locale came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleOrigin {
    /// Locale taken from the [`DEFAULT_LOCALE_ENV`] variable.
    EnvironmentVariable,
    /// Locale reported by the host operating system.
    OperatingSystem,
    /// The bundled [`FALLBACK_LOCALE`].
    Fallback,
}

impl fmt::Display for LocaleOrigin {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvironmentVariable => formatter.write_str(DEFAULT_LOCALE_ENV),
            Self::OperatingSystem => formatter.write_str("system locale"),
            Self::Fallback => formatter.write_str("fallback locale"),
        }
    }
}

/// Outcome of default locale resolution including its provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedLocale {
    locale: LanguageIdentifier,
    origin: LocaleOrigin,
}

impl ResolvedLocale {
    /// Returns the resolved locale.
    #[must_use]
    pub const fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Returns the source that supplied the locale.
    #[must_use]
    pub const fn origin(&self) -> LocaleOrigin {
        self.origin
    }

    /// Consumes the resolution, yielding the locale.
    #[must_use]
    pub fn into_locale(self) -> LanguageIdentifier {
        self.locale
    }
}

/// Production locale source backed by the process environment and the host.
///
/// The [`DEFAULT_LOCALE_ENV`] variable wins over the operating system locale
/// reported by `sys-locale`; [`FALLBACK_LOCALE`] covers the rest.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessLocale;

impl SystemLocale for ProcessLocale {
    fn current_locale(&self) -> LanguageIdentifier {
        let environment = env::var(DEFAULT_LOCALE_ENV).ok();
        let system = sys_locale::get_locale();
        let resolved = resolve_locale(environment.as_deref(), system.as_deref());

        debug!(
            target: "locale_list::default",
            "resolved {} to `{}`",
            resolved.origin(),
            resolved.locale(),
        );
        resolved.into_locale()
    }
}

/// Resolve the default locale from the environment and host candidates.
///
/// Candidates that are missing, blank, or unparseable are skipped in favour
/// of the next one.
///
/// ```
/// use locale_list::{LocaleOrigin, resolve_locale};
///
/// let resolved = resolve_locale(None, Some("de_DE.UTF-8"));
/// assert_eq!(resolved.locale().to_string(), "de-DE");
/// assert_eq!(resolved.origin(), LocaleOrigin::OperatingSystem);
/// ```
#[must_use]
pub fn resolve_locale(environment: Option<&str>, system: Option<&str>) -> ResolvedLocale {
    let candidates = [
        (LocaleOrigin::EnvironmentVariable, environment),
        (LocaleOrigin::OperatingSystem, system),
    ];

    candidates
        .into_iter()
        .find_map(|(origin, raw)| try_resolve_candidate(origin, raw))
        .unwrap_or(ResolvedLocale {
            locale: FALLBACK_LANGUAGE,
            origin: LocaleOrigin::Fallback,
        })
}

fn try_resolve_candidate(origin: LocaleOrigin, raw: Option<&str>) -> Option<ResolvedLocale> {
    let raw = raw?;
    let Some(locale) = normalise_locale_tag(raw) else {
        warn!(
            target: "locale_list::default",
            "skipping unusable {origin} `{raw}`",
        );
        return None;
    };

    Some(ResolvedLocale { locale, origin })
}

/// Normalise a raw host locale string into a language identifier.
///
/// Strips the encoding suffix (`.UTF-8`) and modifier (`@euro`), then parses
/// the remainder, which may use `_` or `-` between subtags. Blank input and
/// POSIX names such as `C` yield `None`.
#[must_use]
pub fn normalise_locale_tag(raw: &str) -> Option<LanguageIdentifier> {
    let trimmed = raw.trim();
    let stripped = trimmed.split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() {
        return None;
    }

    LanguageIdentifier::from_str(stripped).ok()
}
