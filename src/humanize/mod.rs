//! Human-readable rendering of a [`DurationValue`].

use log::trace;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::duration::DurationValue;
use crate::errors::{Error, Result};
use crate::locale::{self, LocaleTable};


/// Output style of [`Humanizer::humanize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `1d 2h`
    Short,
    /// `1 day, 2 hours`
    #[default]
    Long,
    /// `P1DT2H0M0S`
    Iso,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(Format::Short),
            "long" => Ok(Format::Long),
            "iso" => Ok(Format::Iso),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Short => "short",
            Format::Long => "long",
            Format::Iso => "iso",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Days,
    Hours,
    Minutes,
    #[default]
    Seconds,
}

impl Unit {
    /// Largest first, the order units are rendered in.
    pub const ALL: [Unit; 4] = [Unit::Days, Unit::Hours, Unit::Minutes, Unit::Seconds];

    /// Resource key prefix.
    pub fn key(self) -> &'static str {
        match self {
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Renders durations against a locale table.
///
/// The locale hint stands in for the caller's environment (a `LANG` value, a
/// browser language) and is only consulted when no explicit locale is given.
#[derive(Debug, Clone)]
pub struct Humanizer<'a> {
    table: &'a LocaleTable,
    locale_hint: Option<String>,
}

impl Default for Humanizer<'static> {
    fn default() -> Self {
        Humanizer::new(locale::catalog())
    }
}

impl<'a> Humanizer<'a> {
    pub fn new(table: &'a LocaleTable) -> Self {
        Humanizer {
            table,
            locale_hint: None,
        }
    }

    pub fn with_locale_hint(mut self, hint: Option<String>) -> Self {
        self.locale_hint = hint;
        self
    }

    /// Locale used for an explicit `locale` argument (possibly empty).
    pub fn effective_locale(&self, locale: &str) -> String {
        locale::resolve_locale(locale, self.locale_hint.as_deref())
    }

    /// Renders `value`.
    ///
    /// A zero breakdown renders as `0 <base_unit>` in the plural form.
    /// Otherwise zero-valued units are left out.
    pub fn humanize(
        &self,
        value: DurationValue,
        locale: &str,
        format: Format,
        base_unit: Unit,
    ) -> Result<String> {
        if format == Format::Iso {
            return Ok(value.to_iso());
        }

        let breakdown = value.breakdown();
        let locale = self.effective_locale(locale);

        if breakdown.is_zero() {
            return self.plural(&locale, base_unit, 0);
        }

        let parts = Unit::ALL
            .into_iter()
            .map(|unit| (unit, breakdown.get(unit)))
            .filter(|&(_, n)| n > 0)
            .map(|(unit, n)| match format {
                Format::Short => self.short(&locale, unit, n),
                _ => self.plural(&locale, unit, n),
            })
            .collect::<Result<Vec<_>>>()?;

        let separator = if format == Format::Short { " " } else { ", " };
        let text = parts.join(separator);
        trace!("humanized {}ms as {text:?} ({locale}, {format})", value.as_millis());
        Ok(text)
    }

    fn plural(&self, locale: &str, unit: Unit, n: u64) -> Result<String> {
        let category = locale::plural_category(locale, n);
        let key = format!("{}{}", unit.key(), category.key_suffix());
        self.table.render(locale, &key, n)
    }

    fn short(&self, locale: &str, unit: Unit, n: u64) -> Result<String> {
        self.table.render(locale, &format!("{}_short", unit.key()), n)
    }
}
