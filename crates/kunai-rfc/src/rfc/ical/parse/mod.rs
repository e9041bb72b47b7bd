//! VEVENT text parsing.
//!
//! Both the block extractor and the record parser run on the same line
//! scanner, so nested and unterminated blocks recover identically.

mod extract;
mod record;
mod scanner;
mod values;

pub use extract::{extract_blocks, strip_to_vevents};
pub use record::{parse_records, split_property_line};
pub use scanner::scan_blocks;
pub use values::parse_ical_datetime;
