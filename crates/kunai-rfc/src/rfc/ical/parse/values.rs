//! Date-time value decoding.
//!
//! Components are sliced at fixed offsets and are not range checked: values
//! past the end of their unit carry into the next one (month 13 is January of
//! the following year, hour 25 is 01h the next day). A carry that leaves the
//! four-digit year range has no text form and is rejected.

use std::ops::{Range, RangeInclusive};

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// Parses `YYYYMMDD`, `YYYYMMDDTHHMMSS` or `YYYYMMDDTHHMMSSZ`.
///
/// A trailing `Z` reads the value as UTC, anything else as local time. Time of
/// day defaults to midnight when no `T` follows the date.
///
/// Returns `None` if a sliced component is missing or not made of ASCII
/// digits, or the carried result falls outside years 0000 to 9999.
#[must_use]
pub fn parse_ical_datetime(s: &str) -> Option<DateTime<Utc>> {
    let year = component(s, 0..4)?;
    let month = component(s, 4..6)?;
    let day = component(s, 6..8)?;

    let (hour, minute, second) = if s.get(8..9) == Some("T") {
        (
            component(s, 9..11)?,
            component(s, 11..13)?,
            component(s, 13..15)?,
        )
    } else {
        (0, 0, 0)
    };

    let naive = carry_components(year, month, day, hour, minute, second)?;

    if s.ends_with('Z') {
        Some(Utc.from_utc_datetime(&naive))
    } else {
        local_to_utc(&naive)
    }
}

fn component(s: &str, range: Range<usize>) -> Option<i64> {
    let digits = s.get(range)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

const YEARS: RangeInclusive<i32> = 0..=9999;

/// Builds a naive date-time, carrying overflowing components upward.
fn carry_components(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> Option<NaiveDateTime> {
    let months = year.checked_mul(12)?.checked_add(month - 1)?;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;

    let offset = TimeDelta::try_days(day - 1)?
        .checked_add(&TimeDelta::try_hours(hour)?)?
        .checked_add(&TimeDelta::try_minutes(minute)?)?
        .checked_add(&TimeDelta::try_seconds(second)?)?;

    let naive = NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(offset)?;

    YEARS.contains(&naive.year()).then_some(naive)
}

fn local_to_utc(naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    let resolved = Local.from_local_datetime(naive).earliest().or_else(|| {
        // Wall-clock time skipped by a DST gap: move past the gap.
        let shifted = naive.checked_add_signed(TimeDelta::try_hours(1)?)?;
        Local.from_local_datetime(&shifted).earliest()
    });

    resolved.map(|dt| dt.with_timezone(&Utc))
}
