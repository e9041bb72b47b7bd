//! Property record serializer.

use kunai_core::constants::{BEGIN_VEVENT, END_VEVENT};

use crate::rfc::ical::core::PropertyRecord;

/// Serializes records as VEVENT blocks separated by `\n`.
///
/// An empty slice serializes to an empty string.
#[must_use]
#[tracing::instrument(skip(records), fields(count = records.len()))]
pub fn serialize_records(records: &[PropertyRecord]) -> String {
    records
        .iter()
        .map(serialize_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializes one record as a VEVENT block.
///
/// Properties with an empty name or value are left out. Values are written
/// verbatim; a colon inside a value survives because parsing splits on the
/// first colon only.
#[must_use]
pub fn serialize_record(record: &PropertyRecord) -> String {
    let mut out = String::from(BEGIN_VEVENT);

    for (name, value) in record {
        if name.is_empty() || value.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(name);
        out.push(':');
        out.push_str(value);
    }

    out.push('\n');
    out.push_str(END_VEVENT);
    out
}
