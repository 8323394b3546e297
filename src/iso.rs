//! ISO-8601 duration text.
//!
//! Only the day and time designators are supported: `P<d>DT<h>H<m>M<s>S`.
//! Every component is optional when parsing, but the `T` separator is not.
//! Formatting always emits all four components.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::duration::{
    Breakdown, DurationValue, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};
use crate::errors::{Error, Result};

static ISO_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:(\d+)D)?T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$")
        .expect("ISO duration pattern is valid")
});

/// Parse ISO-8601 duration text into a [`DurationValue`].
pub fn parse(text: &str) -> Result<DurationValue> {
    let caps = ISO_DURATION
        .captures(text)
        .ok_or_else(|| Error::InvalidDurationFormat(text.to_string()))?;

    let mut total: u64 = 0;
    for (group, unit_ms) in [
        (1, MS_PER_DAY),
        (2, MS_PER_HOUR),
        (3, MS_PER_MINUTE),
        (4, MS_PER_SECOND),
    ] {
        let Some(m) = caps.get(group) else {
            continue;
        };
        let ms = m
            .as_str()
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_mul(unit_ms))
            .and_then(|ms| total.checked_add(ms))
            .ok_or_else(|| Error::InvalidDurationFormat(text.to_string()))?;
        total = ms;
    }

    Ok(DurationValue::from_millis(total))
}

/// Format a breakdown as `P{d}DT{h}H{m}M{s}S`. Zero components are kept.
pub fn format(b: &Breakdown) -> String {
    format!("P{}DT{}H{}M{}S", b.days, b.hours, b.minutes, b.seconds)
}
