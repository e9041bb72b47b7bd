//! VCALENDAR envelope for serialized VEVENT blocks.

use kunai_core::constants::{BEGIN_VCALENDAR, END_VCALENDAR, ICALENDAR_VERSION};

/// Wraps serialized VEVENT text in a `VCALENDAR` component.
///
/// An empty body produces an envelope with no events.
#[must_use]
pub fn wrap_calendar(body: &str, prodid: &str) -> String {
    let mut lines = vec![
        BEGIN_VCALENDAR.to_string(),
        format!("VERSION:{ICALENDAR_VERSION}"),
        format!("PRODID:{prodid}"),
    ];
    if !body.is_empty() {
        lines.push(body.to_string());
    }
    lines.push(END_VCALENDAR.to_string());

    lines.join("\n")
}
