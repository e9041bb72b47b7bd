//! Date-time value rendering.

use chrono::{DateTime, Local, Utc};
use kunai_core::types::DateForm;

const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Renders an instant as an iCalendar date-time.
///
/// `DateForm::Utc` gives `YYYYMMDDTHHMMSSZ`; `DateForm::Local` converts to the
/// local timezone and gives `YYYYMMDDTHHMMSS` with no offset.
#[must_use]
pub fn format_ical_datetime(instant: &DateTime<Utc>, form: DateForm) -> String {
    match form {
        DateForm::Utc => instant.format(UTC_FORMAT).to_string(),
        DateForm::Local => instant.with_timezone(&Local).format(LOCAL_FORMAT).to_string(),
    }
}
