//! Behaviour-driven coverage for the cached default locale list.
//!
//! A scripted locale source stands in for the host so scenarios can change
//! the current locale between reads and observe when the cache rebuilds.

use std::sync::{Arc, Mutex, PoisonError};

use locale_list::{DefaultLocaleCache, LanguageIdentifier, LocaleList, SystemLocale};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

mod support;
use support::locale::StepLocale;

#[derive(Debug, Default)]
struct ScriptedLocale {
    current: Mutex<Option<LanguageIdentifier>>,
}

impl ScriptedLocale {
    fn set(&self, locale: LanguageIdentifier) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(locale);
    }
}

impl SystemLocale for ScriptedLocale {
    fn current_locale(&self) -> LanguageIdentifier {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_else(|| panic!("a system locale should have been scripted"))
    }
}

#[derive(Debug)]
struct CacheWorld {
    cache: DefaultLocaleCache<ScriptedLocale>,
    reads: Vec<Arc<LocaleList>>,
}

impl Default for CacheWorld {
    fn default() -> Self {
        Self {
            cache: DefaultLocaleCache::new(ScriptedLocale::default()),
            reads: Vec::new(),
        }
    }
}

impl CacheWorld {
    fn latest(&self) -> &LocaleList {
        self.reads
            .last()
            .unwrap_or_else(|| panic!("the default list should have been read"))
    }

    fn earliest(&self) -> &LocaleList {
        self.reads
            .first()
            .unwrap_or_else(|| panic!("the default list should have been read"))
    }
}

fn assert_holds_only(list: &LocaleList, locale: &LanguageIdentifier) {
    assert_eq!(list.len(), 1);
    assert_eq!(list.primary(), Some(locale));
}

#[fixture]
fn world() -> CacheWorld {
    CacheWorld::default()
}

#[given("the system locale is {locale}")]
fn given_system_locale(world: &mut CacheWorld, locale: StepLocale) {
    world.cache.source().set(locale.into_inner());
}

#[when("the default list is read")]
fn when_read(world: &mut CacheWorld) {
    let list = world.cache.get();
    world.reads.push(list);
}

#[when("the default list is read again")]
fn when_read_again(world: &mut CacheWorld) {
    when_read(world);
}

#[when("the system locale changes to {locale}")]
fn when_locale_changes(world: &mut CacheWorld, locale: StepLocale) {
    world.cache.source().set(locale.into_inner());
}

#[then("the default list holds only {locale}")]
fn then_holds_only(world: &mut CacheWorld, locale: StepLocale) {
    assert_holds_only(world.latest(), &locale.into_inner());
}

#[then("the earlier list still holds {locale}")]
fn then_earlier_holds(world: &mut CacheWorld, locale: StepLocale) {
    assert_holds_only(world.earliest(), &locale.into_inner());
}

#[then("both reads return the same list instance")]
fn then_same_instance(world: &mut CacheWorld) {
    match world.reads.as_slice() {
        [first, second] => assert!(Arc::ptr_eq(first, second)),
        other => panic!("expected two reads, found {}", other.len()),
    }
}

#[scenario(
    path = "tests/features/default_locale.feature",
    name = "The default list follows the system locale"
)]
fn scenario_follows_system(world: CacheWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/default_locale.feature",
    name = "Repeated reads reuse the cached list"
)]
fn scenario_reuses_cache(world: CacheWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/default_locale.feature",
    name = "A locale change rebuilds the list"
)]
fn scenario_rebuilds(world: CacheWorld) {
    let _ = world;
}
