//! Millisecond duration value with ISO-8601 text and localized
//! human-readable rendering (English, Russian).

pub mod app;
pub mod config;
pub mod duration;
pub mod errors;
pub mod humanize;
pub mod iso;
pub mod locale;

pub use duration::{add, subtract, Argument, Breakdown, DurationInput, DurationValue};
pub use errors::{Error, Result};
pub use humanize::{Format, Humanizer, Unit};
pub use locale::{LocaleTable, PluralCategory};
