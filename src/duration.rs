//! Millisecond duration value.
//!
//! A [`DurationValue`] can be built from:
//! - Two instants: the absolute difference between them
//! - A number of milliseconds: `90123000`
//! - ISO-8601 duration text: `"P1DT1H2M3S"`
//!
//! Values are immutable; arithmetic returns new values.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::errors::{Error, Result};
use crate::humanize::{Format, Humanizer, Unit};
use crate::iso;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Non-negative duration in milliseconds.
///
/// Ordering and equality follow the magnitude, so values compare the same way
/// their [`as_millis`](Self::as_millis) results do.
///
/// # Examples
/// ```
/// use durafmt::DurationValue;
///
/// let d = DurationValue::from_millis(90_123_000);
/// assert_eq!(d.to_iso(), "P1DT1H2M3S");
/// assert_eq!(d, "P1DT1H2M3S".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DurationValue(u64);

/// Days, hours, minutes and seconds of a [`DurationValue`].
///
/// Sub-second remainder is dropped. `days` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Breakdown {
    pub fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// The accepted construction shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationInput {
    Instants(DateTime<Utc>, DateTime<Utc>),
    Milliseconds(u64),
    IsoText(String),
}

/// Loosely typed positional argument, for callers that receive construction
/// arguments from a dynamic source (command line, scripting host).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Instant(DateTime<Utc>),
    Integer(i64),
    Text(String),
}

impl DurationValue {
    /// Creates a new DurationValue from milliseconds.
    pub const fn from_millis(ms: u64) -> Self {
        DurationValue(ms)
    }

    pub const fn from_secs(secs: u64) -> Self {
        DurationValue(secs.saturating_mul(MS_PER_SECOND))
    }

    pub const fn from_mins(mins: u64) -> Self {
        DurationValue(mins.saturating_mul(MS_PER_MINUTE))
    }

    pub const fn from_hours(hours: u64) -> Self {
        DurationValue(hours.saturating_mul(MS_PER_HOUR))
    }

    pub const fn from_days(days: u64) -> Self {
        DurationValue(days.saturating_mul(MS_PER_DAY))
    }

    /// Absolute difference between two instants. Argument order does not matter.
    pub fn between(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        DurationValue((b - a).num_milliseconds().unsigned_abs())
    }

    /// Parses `P<d>DT<h>H<m>M<s>S` text. See [`crate::iso`].
    pub fn from_iso(text: &str) -> Result<Self> {
        iso::parse(text)
    }

    pub fn construct(input: DurationInput) -> Result<Self> {
        match input {
            DurationInput::Instants(a, b) => Ok(Self::between(a, b)),
            DurationInput::Milliseconds(ms) => Ok(Self::from_millis(ms)),
            DurationInput::IsoText(text) => Self::from_iso(&text),
        }
    }

    /// Maps positional arguments onto a [`DurationInput`] and constructs it.
    ///
    /// Accepted shapes are `(instant, instant)`, `(integer)` and `(text)`.
    pub fn from_args(args: &[Argument]) -> Result<Self> {
        let input = match args {
            [Argument::Instant(a), Argument::Instant(b)] => DurationInput::Instants(*a, *b),
            [Argument::Integer(ms)] => {
                let ms = u64::try_from(*ms).map_err(|_| {
                    Error::InvalidConstructorArguments(format!(
                        "milliseconds cannot be negative: {ms}"
                    ))
                })?;
                DurationInput::Milliseconds(ms)
            }
            [Argument::Integer(_), extra, ..] => {
                return Err(Error::InvalidConstructorArguments(format!(
                    "unexpected argument {extra:?} after milliseconds"
                )))
            }
            [Argument::Text(text)] => DurationInput::IsoText(text.clone()),
            _ => {
                return Err(Error::InvalidConstructorArguments(format!(
                    "expected two instants, milliseconds or ISO text, got {args:?}"
                )))
            }
        };
        Self::construct(input)
    }

    /// Returns the magnitude in milliseconds.
    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// Returns the duration in seconds (truncated).
    pub const fn as_secs(&self) -> u64 {
        self.0 / MS_PER_SECOND
    }

    pub const fn as_std(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.0)
    }

    pub const fn breakdown(&self) -> Breakdown {
        let ms = self.0;
        Breakdown {
            days: ms / MS_PER_DAY,
            hours: ms % MS_PER_DAY / MS_PER_HOUR,
            minutes: ms % MS_PER_HOUR / MS_PER_MINUTE,
            seconds: ms % MS_PER_MINUTE / MS_PER_SECOND,
        }
    }

    pub fn to_iso(&self) -> String {
        iso::format(&self.breakdown())
    }

    pub fn plus(self, other: DurationValue) -> DurationValue {
        add(self, other)
    }

    pub fn minus(self, other: DurationValue) -> DurationValue {
        subtract(self, other)
    }

    /// Renders with the process-wide locale catalog and no locale hint.
    ///
    /// An empty `locale` falls back to English.
    pub fn humanize(&self, locale: &str, format: Format, base_unit: Unit) -> Result<String> {
        Humanizer::default().humanize(*self, locale, format, base_unit)
    }
}

/// Sum of two durations, saturating at `u64::MAX` milliseconds.
pub fn add(a: DurationValue, b: DurationValue) -> DurationValue {
    DurationValue(a.0.saturating_add(b.0))
}

/// Distance between two durations; never negative.
pub fn subtract(a: DurationValue, b: DurationValue) -> DurationValue {
    DurationValue(a.0.abs_diff(b.0))
}

impl Add for DurationValue {
    type Output = DurationValue;

    fn add(self, rhs: DurationValue) -> DurationValue {
        add(self, rhs)
    }
}

impl Sub for DurationValue {
    type Output = DurationValue;

    fn sub(self, rhs: DurationValue) -> DurationValue {
        subtract(self, rhs)
    }
}

impl Sum for DurationValue {
    fn sum<I: Iterator<Item = DurationValue>>(iter: I) -> Self {
        iter.fold(DurationValue::default(), add)
    }
}

impl From<u64> for DurationValue {
    fn from(ms: u64) -> Self {
        DurationValue(ms)
    }
}

impl From<DurationValue> for u64 {
    fn from(d: DurationValue) -> Self {
        d.0
    }
}

impl From<DurationValue> for std::time::Duration {
    fn from(d: DurationValue) -> Self {
        d.as_std()
    }
}

impl FromStr for DurationValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        iso::parse(s)
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for DurationValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = DurationValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an ISO-8601 duration like 'P1DT2H3M4S' or a number in milliseconds")
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<DurationValue, E> {
                Ok(DurationValue(v))
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<DurationValue, E>
            where
                E: de::Error,
            {
                if v < 0 {
                    return Err(E::custom("duration cannot be negative"));
                }
                Ok(DurationValue(v as u64))
            }

            fn visit_str<E>(self, s: &str) -> std::result::Result<DurationValue, E>
            where
                E: de::Error,
            {
                iso::parse(s).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(DurationVisitor)
    }
}

impl Serialize for DurationValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // ISO text drops milliseconds, the number does not
        serializer.serialize_u64(self.0)
    }
}
