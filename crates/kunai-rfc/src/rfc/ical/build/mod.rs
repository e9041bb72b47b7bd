//! VEVENT text serialization.
//!
//! - Serializer: property records to `BEGIN:VEVENT`/`END:VEVENT` blocks
//! - Values: date-time rendering
//! - Envelope: VCALENDAR wrapper for upload bodies

mod envelope;
mod serializer;
mod values;

pub use envelope::wrap_calendar;
pub use serializer::{serialize_record, serialize_records};
pub use values::format_ical_datetime;
