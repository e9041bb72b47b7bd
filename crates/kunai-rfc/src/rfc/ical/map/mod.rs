//! Mapping between property records and typed events.

use chrono::{DateTime, Utc};
use kunai_core::config::CalendarConfig;
use kunai_core::types::DateForm;

use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::build::{format_ical_datetime, serialize_records, wrap_calendar};
use crate::rfc::ical::core::{Event, PropertyRecord};
use crate::rfc::ical::parse::{parse_ical_datetime, parse_records};

const UID: &str = "UID";
const SUMMARY: &str = "SUMMARY";
const DTSTART: &str = "DTSTART";
const DTEND: &str = "DTEND";
const LOCATION: &str = "LOCATION";
const DESCRIPTION: &str = "DESCRIPTION";

/// Properties with a dedicated `Event` field.
const RESERVED: [&str; 6] = [UID, SUMMARY, DTSTART, DTEND, LOCATION, DESCRIPTION];

/// Converts a property record into an event.
///
/// Every property without a dedicated field is copied into `extra` under its
/// name as parsed.
///
/// ## Errors
/// Returns `RfcError::InvalidRecord` if `UID`, `SUMMARY`, `DTSTART` or `DTEND`
/// is missing, or a date-time cannot be decoded.
pub fn record_to_event(record: &PropertyRecord) -> RfcResult<Event> {
    let id = required(record, UID)?;
    let summary = required(record, SUMMARY)?;
    let start = required_datetime(record, DTSTART)?;
    let end = required_datetime(record, DTEND)?;

    let extra = record
        .iter()
        .filter(|(name, _)| !RESERVED.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    Ok(Event {
        id: Some(id.to_string()),
        summary: summary.to_string(),
        start,
        end,
        location: record.get(LOCATION).map(str::to_string),
        description: record.get(DESCRIPTION).map(str::to_string),
        extra,
    })
}

/// Converts an event into a property record with UTC date-times.
#[must_use]
pub fn event_to_record(event: &Event) -> PropertyRecord {
    event_to_record_in(event, DateForm::Utc)
}

/// Converts an event into a property record, rendering date-times in `form`.
///
/// `UID`, `LOCATION` and `DESCRIPTION` are only written when set and
/// non-empty. Custom fields follow with upper-cased names; a custom field
/// whose name matches a typed property already written is dropped, otherwise
/// it fills that property.
#[must_use]
pub fn event_to_record_in(event: &Event, form: DateForm) -> PropertyRecord {
    let mut record = PropertyRecord::new();

    if let Some(id) = non_empty(event.id.as_deref()) {
        record.insert(UID, id);
    }
    record.insert(SUMMARY, event.summary.as_str());
    record.insert(DTSTART, format_ical_datetime(&event.start, form));
    record.insert(DTEND, format_ical_datetime(&event.end, form));
    if let Some(location) = non_empty(event.location.as_deref()) {
        record.insert(LOCATION, location);
    }
    if let Some(description) = non_empty(event.description.as_deref()) {
        record.insert(DESCRIPTION, description);
    }

    for (name, value) in &event.extra {
        let name = name.to_uppercase();
        if RESERVED.contains(&name.as_str()) && record.contains(&name) {
            tracing::warn!(property = %name, "Custom field shadows a typed property, dropping it");
            continue;
        }
        record.insert(name, value.as_str());
    }

    record
}

/// Parses every VEVENT in `input` into an event.
///
/// ## Errors
/// Returns the first `RfcError::InvalidRecord` raised by a block.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_events(input: &str) -> RfcResult<Vec<Event>> {
    let events = parse_records(input)
        .iter()
        .map(record_to_event)
        .collect::<RfcResult<Vec<_>>>()?;

    tracing::debug!(count = events.len(), "Parsed events");

    Ok(events)
}

/// Serializes events as VEVENT blocks with UTC date-times.
#[must_use]
pub fn serialize_events(events: &[Event]) -> String {
    let records: Vec<PropertyRecord> = events.iter().map(event_to_record).collect();
    serialize_records(&records)
}

/// Serializes events as a complete VCALENDAR document.
///
/// Date-times use the configured `date_form` and the envelope carries the
/// configured PRODID.
///
/// ## Errors
/// Returns `RfcError::CoreError` if the calendar configuration is invalid.
pub fn serialize_calendar(events: &[Event], config: &CalendarConfig) -> RfcResult<String> {
    config.validate()?;

    let records: Vec<PropertyRecord> = events
        .iter()
        .map(|event| event_to_record_in(event, config.date_form))
        .collect();

    Ok(wrap_calendar(&serialize_records(&records), &config.prodid))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn required<'a>(record: &'a PropertyRecord, property: &'static str) -> RfcResult<&'a str> {
    record.get(property).ok_or(RfcError::InvalidRecord {
        property,
        reason: "is missing",
    })
}

fn required_datetime(record: &PropertyRecord, property: &'static str) -> RfcResult<DateTime<Utc>> {
    let raw = required(record, property)?;

    parse_ical_datetime(raw).ok_or_else(|| {
        tracing::debug!(property, raw, "Undecodable date-time");
        RfcError::InvalidRecord {
            property,
            reason: "is not a decodable date-time",
        }
    })
}
