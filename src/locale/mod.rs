//! Localized unit templates and plural rules.
//!
//! Templates live in a [`LocaleTable`] keyed by locale, then by
//! `<unit>[_plural|_plural_2|_short]`. The built-in table is loaded from
//! `locales.yaml`. A host application may install its own table once through
//! [`install_catalog`]; after that the catalog is read-only.

use log::debug;
use once_cell::sync::{Lazy, OnceCell};
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::{Error, Result};

pub const DEFAULT_LOCALE: &str = "en";
pub const RUSSIAN: &str = "ru";

/// Placeholder replaced with the unit value in every template.
pub const COUNT_PLACEHOLDER: &str = "{count}";

static BUILTIN: Lazy<LocaleTable> = Lazy::new(|| {
    LocaleTable::from_yaml(include_str!("locales.yaml")).expect("Failed to parse locales.yaml")
});

static CATALOG: OnceCell<LocaleTable> = OnceCell::new();

/// Locale → resource key → template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable(BTreeMap<String, BTreeMap<String, String>>);

impl LocaleTable {
    /// English and Russian resources for all four units.
    pub fn builtin() -> LocaleTable {
        BUILTIN.clone()
    }

    pub fn from_yaml(contents: &str) -> Result<LocaleTable> {
        serde_yaml::from_str(contents)
            .map_err(|err| Error::BadConfig(format!("locale table parse error: {err}")))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<LocaleTable> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            Error::BadConfig(format!("failed to read {}: {err}", path.display()))
        })?;
        debug!("Loaded locale table from {}", path.display());
        Self::from_yaml(&contents)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|err| Error::BadConfig(format!("locale table serialize error: {err}")))
    }

    /// Adds or replaces a single template.
    pub fn insert(&mut self, locale: &str, key: &str, template: &str) {
        self.0
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), template.to_string());
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Looks up `key` for `locale`, falling back from a region-qualified or
    /// upper-case tag (`ru-RU`, `en_GB`, `RU`) to its lowercase language.
    pub fn template(&self, locale: &str, key: &str) -> Option<&str> {
        let lookup = |loc: &str| self.0.get(loc).and_then(|keys| keys.get(key));
        lookup(locale)
            .or_else(|| lookup(&language(locale)))
            .map(String::as_str)
    }

    /// Renders `key` for `locale` with `count` substituted.
    pub fn render(&self, locale: &str, key: &str, count: u64) -> Result<String> {
        let template = self
            .template(locale, key)
            .ok_or_else(|| Error::MissingResource {
                locale: locale.to_string(),
                key: key.to_string(),
            })?;
        Ok(template.replace(COUNT_PLACEHOLDER, &count.to_string()))
    }
}

/// Installs `table` as the process-wide catalog.
///
/// Returns `false` and leaves the catalog untouched if one is already
/// installed, including the built-in table installed lazily by [`catalog`].
pub fn install_catalog(table: LocaleTable) -> bool {
    let installed = CATALOG.set(table).is_ok();
    if installed {
        debug!("Installed host locale catalog");
    }
    installed
}

pub fn catalog_installed() -> bool {
    CATALOG.get().is_some()
}

/// The process-wide catalog, installing the built-in table on first use.
pub fn catalog() -> &'static LocaleTable {
    CATALOG.get_or_init(|| {
        debug!("Using built-in locale catalog");
        LocaleTable::builtin()
    })
}

/// Grammatical number class used to pick a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    One,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Resource key suffix for this category.
    pub fn key_suffix(self) -> &'static str {
        match self {
            PluralCategory::One => "",
            PluralCategory::Few | PluralCategory::Other => "_plural",
            PluralCategory::Many => "_plural_2",
        }
    }
}

/// Plural category of `n` in `locale`. Russian has three classes, everything
/// else follows English.
pub fn plural_category(locale: &str, n: u64) -> PluralCategory {
    if language(locale) == RUSSIAN {
        let d1 = n % 10;
        let d2 = n % 100;
        if d1 == 1 && d2 != 11 {
            PluralCategory::One
        } else if (2..=4).contains(&d1) && !(10..=19).contains(&d2) {
            PluralCategory::Few
        } else {
            PluralCategory::Many
        }
    } else if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// Effective locale: `explicit` if non-empty, otherwise Russian when the
/// caller's environment hint starts with `ru`, otherwise English.
pub fn resolve_locale(explicit: &str, hint: Option<&str>) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }
    match hint {
        Some(hint) if hint.get(..2).is_some_and(|tag| tag.eq_ignore_ascii_case(RUSSIAN)) => {
            RUSSIAN.to_string()
        }
        _ => DEFAULT_LOCALE.to_string(),
    }
}

/// Lowercase language subtag of `locale`.
fn language(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ru_days(n: u64) -> String {
        let key = format!("days{}", plural_category("ru", n).key_suffix());
        LocaleTable::builtin().render("ru", &key, n).unwrap()
    }

    #[test]
    fn test_builtin_parses() {
        let table = LocaleTable::builtin();
        assert_eq!(table.locales().collect::<Vec<_>>(), vec!["en", "ru"]);
        for unit in ["days", "hours", "minutes", "seconds"] {
            for key in [unit.to_string(), format!("{unit}_plural"), format!("{unit}_short")] {
                assert!(table.template("en", &key).is_some(), "en.{key}");
                assert!(table.template("ru", &key).is_some(), "ru.{key}");
            }
            assert!(table.template("ru", &format!("{unit}_plural_2")).is_some());
        }
    }

    #[test]
    fn test_russian_plural_days() {
        for (n, expected) in [
            (0, "0 дней"),
            (1, "1 день"),
            (2, "2 дня"),
            (4, "4 дня"),
            (5, "5 дней"),
            (11, "11 дней"),
            (12, "12 дней"),
            (14, "14 дней"),
            (21, "21 день"),
            (23, "23 дня"),
            (101, "101 день"),
            (111, "111 дней"),
            (112, "112 дней"),
            (122, "122 дня"),
        ] {
            assert_eq!(ru_days(n), expected);
        }
    }

    #[test]
    fn test_english_plural() {
        assert_eq!(plural_category("en", 1), PluralCategory::One);
        assert_eq!(plural_category("en", 0), PluralCategory::Other);
        assert_eq!(plural_category("en", 2), PluralCategory::Other);
        assert_eq!(plural_category("en", 21), PluralCategory::Other);
        // unknown locales use the English rule
        assert_eq!(plural_category("de", 1), PluralCategory::One);
        assert_eq!(plural_category("de", 3), PluralCategory::Other);
    }

    #[test]
    fn test_plural_category_region_tags() {
        assert_eq!(plural_category("ru-RU", 3), PluralCategory::Few);
        assert_eq!(plural_category("ru_RU", 5), PluralCategory::Many);
    }

    #[test]
    fn test_render_missing_resource() {
        let table = LocaleTable::builtin();
        match table.render("de", "days", 1) {
            Err(Error::MissingResource { locale, key }) => {
                assert_eq!(locale, "de");
                assert_eq!(key, "days");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(table.render("en", "days_plural_2", 5).is_err());
    }

    #[test]
    fn test_template_language_fallback() {
        let table = LocaleTable::builtin();
        assert_eq!(table.template("ru-RU", "hours"), Some("{count} час"));
        assert_eq!(table.render("en_GB", "hours_short", 2).unwrap(), "2h");
    }

    #[test]
    fn test_upper_case_tags() {
        let table = LocaleTable::builtin();
        assert_eq!(plural_category("RU", 2), PluralCategory::Few);
        assert_eq!(table.render("RU", "days_plural", 2).unwrap(), "2 дня");
        assert_eq!(table.render("EN", "days_plural", 2).unwrap(), "2 days");
        assert_eq!(table.render("Ru-ru", "days_plural_2", 5).unwrap(), "5 дней");
    }

    #[test]
    fn test_insert_overrides() {
        let mut table = LocaleTable::builtin();
        table.insert("en", "days", "{count} whole day");
        table.insert("de", "days", "{count} Tag");
        assert_eq!(table.render("en", "days", 1).unwrap(), "1 whole day");
        assert_eq!(table.render("de", "days", 1).unwrap(), "1 Tag");
    }

    #[test]
    fn test_from_yaml_errors() {
        assert!(matches!(LocaleTable::from_yaml("- a\n- b"), Err(Error::BadConfig(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let table = LocaleTable::builtin();
        let yaml = table.to_yaml().unwrap();
        assert_eq!(LocaleTable::from_yaml(&yaml).unwrap(), table);
    }

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("ru", None), "ru");
        assert_eq!(resolve_locale("en", Some("ru-RU")), "en");
        assert_eq!(resolve_locale("", Some("ru-RU")), "ru");
        assert_eq!(resolve_locale("", Some("ru_RU.UTF-8")), "ru");
        assert_eq!(resolve_locale("", Some("RU")), "ru");
        assert_eq!(resolve_locale("", Some("en-US")), "en");
        assert_eq!(resolve_locale("", Some("r")), "en");
        assert_eq!(resolve_locale("", Some("")), "en");
        assert_eq!(resolve_locale("", None), "en");
    }

    #[test]
    fn test_catalog_is_stable() {
        let first = catalog() as *const LocaleTable;
        assert!(catalog_installed());
        assert!(!install_catalog(LocaleTable::default()));
        assert_eq!(first, catalog() as *const LocaleTable);
    }
}
