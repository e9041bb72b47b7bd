//! VEVENT text codec (RFC 5545 subset).
//!
//! - `parse`: block scanning, VEVENT extraction, property records, date-times
//! - `build`: record serialization, date-time rendering, VCALENDAR envelope
//! - `map`: conversion between property records and typed events

pub mod build;
pub mod core;
pub mod map;
pub mod parse;

#[cfg(test)]
mod tests;
