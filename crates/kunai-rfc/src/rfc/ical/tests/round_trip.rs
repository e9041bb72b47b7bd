//! Round-trip parsing and serialization tests.
//!
//! These tests verify that VEVENT text can be parsed and serialized back
//! without losing properties.

use super::fixtures::CALDAV_RESPONSE;
use crate::rfc::ical::build::{serialize_records, wrap_calendar};
use crate::rfc::ical::core::PropertyRecord;
use crate::rfc::ical::map::{event_to_record, parse_events, record_to_event, serialize_events};
use crate::rfc::ical::parse::parse_records;
use proptest::prelude::*;

/// Serialize records, parse them back and compare.
fn round_trip(records: &[PropertyRecord]) -> Result<(), String> {
    let serialized = serialize_records(records);
    let parsed = parse_records(&serialized);

    if parsed.len() != records.len() {
        return Err(format!(
            "Record count mismatch: {} vs {}\n{serialized}",
            records.len(),
            parsed.len()
        ));
    }

    for (idx, (expected, actual)) in records.iter().zip(&parsed).enumerate() {
        let expected: Vec<_> = expected.iter().collect();
        let actual: Vec<_> = actual.iter().collect();
        if expected != actual {
            return Err(format!(
                "Record {idx} mismatch: {expected:?} vs {actual:?}\n{serialized}"
            ));
        }
    }

    Ok(())
}

#[test]
fn round_trip_empty_list() {
    assert_eq!(serialize_records(&[]), "");
    assert!(parse_records("").is_empty());
}

#[test]
fn round_trip_single_record() {
    let record: PropertyRecord = [
        ("UID", "1"),
        ("SUMMARY", "Lunch"),
        ("DTSTART", "20230101T120000Z"),
    ]
    .into_iter()
    .collect();

    round_trip(&[record]).expect("round trip should succeed");
}

#[test]
fn round_trip_empty_record() {
    round_trip(&[PropertyRecord::new()]).expect("round trip should succeed");
}

#[test]
fn round_trip_values_with_colons() {
    let record: PropertyRecord = [
        ("URL", "https://example.com:8443/cal"),
        ("DESCRIPTION", "a:b:c"),
    ]
    .into_iter()
    .collect();

    round_trip(&[record]).expect("round trip should succeed");
}

#[test]
fn round_trip_many_records() {
    let records: Vec<PropertyRecord> = (0..5)
        .map(|i| {
            [
                ("UID".to_string(), format!("event-{i}")),
                (format!("X-SEQ-{i}"), i.to_string()),
            ]
            .into_iter()
            .collect()
        })
        .collect();

    round_trip(&records).expect("round trip should succeed");
}

#[test]
fn round_trip_caldav_response() {
    let records = parse_records(CALDAV_RESPONSE);

    assert_eq!(records.len(), 2);
    round_trip(&records).expect("round trip should succeed");
}

#[test]
fn caldav_response_to_events() {
    let events = parse_events(CALDAV_RESPONSE).unwrap();

    assert_eq!(events.len(), 2);

    let standup = &events[0];
    assert_eq!(standup.id.as_deref(), Some("standup-1@example.com"));
    assert_eq!(standup.summary, "Daily standup");
    assert_eq!(standup.location.as_deref(), Some("Room 4"));
    assert_eq!(
        standup.extra.get("DTSTAMP").map(String::as_str),
        Some("20230101T080000Z")
    );

    let review = &events[1];
    assert_eq!(
        review.description.as_deref(),
        Some("Agenda: API, storage: v2")
    );
    assert_eq!(
        review.extra.get("X-MICROSOFT-CDO-BUSYSTATUS").map(String::as_str),
        Some("BUSY")
    );
}

#[test]
fn caldav_response_events_survive_reserialization() {
    let events = parse_events(CALDAV_RESPONSE).unwrap();

    let body = serialize_events(&events);
    let document = wrap_calendar(&body, "-//kunai//test//EN");

    assert_eq!(parse_events(&document).unwrap(), events);
}

#[test]
fn record_event_record_is_stable() {
    for record in parse_records(CALDAV_RESPONSE) {
        let event = record_to_event(&record).unwrap();
        let rebuilt = event_to_record(&event);

        for (name, value) in &record {
            assert_eq!(rebuilt.get(name), Some(value.as_str()), "{name}");
        }
    }
}

/// Names never contain a colon and never spell a VEVENT marker; values are
/// non-empty and carry no surrounding whitespace.
fn arb_record() -> impl Strategy<Value = PropertyRecord> {
    let name = "X-[A-Z0-9-]{1,12}";
    let value = "[A-Za-z0-9]([A-Za-z0-9 :;,./=@-]{0,30}[A-Za-z0-9])?";
    prop::collection::vec((name, value), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect::<PropertyRecord>())
}

/// Property: serialize then parse returns the same records, in order
#[test]
fn proptest_round_trip_generated_records() {
    proptest!(|(records in prop::collection::vec(arb_record(), 0..6))| {
        prop_assert_eq!(round_trip(&records), Ok(()));
    });
}
