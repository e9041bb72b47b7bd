//! Property record parsing.

use super::scanner::scan_blocks;
use crate::rfc::ical::core::PropertyRecord;

/// Parses every VEVENT block in `input` into a property record.
///
/// Property lines are split at the first `:`. Lines that have no colon, or
/// whose trimmed name or value is empty, are skipped. A repeated name keeps
/// the last value.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_records(input: &str) -> Vec<PropertyRecord> {
    let records = scan_blocks(
        input,
        |_| PropertyRecord::new(),
        |record: &mut PropertyRecord, line| match split_property_line(line) {
            Some((name, value)) => {
                record.insert(name, value);
            }
            None => tracing::trace!(line, "Skipping malformed property line"),
        },
    );

    tracing::debug!(count = records.len(), "Parsed property records");

    records
}

/// Splits `NAME:value` at the first colon, trimming both sides.
///
/// Returns `None` when there is no colon or either side is empty after
/// trimming.
#[must_use]
pub fn split_property_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    let (name, value) = (name.trim(), value.trim());

    (!name.is_empty() && !value.is_empty()).then_some((name, value))
}
