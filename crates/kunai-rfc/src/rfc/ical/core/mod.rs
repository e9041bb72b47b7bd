//! Codec data model.
//!
//! - `PropertyRecord`: flat, ordered property map for one VEVENT block
//! - `Event`: typed core fields plus an explicit map for custom properties

mod event;
mod record;

pub use event::Event;
pub use record::PropertyRecord;
