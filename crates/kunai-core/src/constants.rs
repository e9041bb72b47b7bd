/// Component marker constants shared across crates
pub const VEVENT_COMPONENT: &str = "VEVENT";
pub const BEGIN_VEVENT: &str = const_str::concat!("BEGIN:", VEVENT_COMPONENT);
pub const END_VEVENT: &str = const_str::concat!("END:", VEVENT_COMPONENT);

pub const VCALENDAR_COMPONENT: &str = "VCALENDAR";
pub const BEGIN_VCALENDAR: &str = const_str::concat!("BEGIN:", VCALENDAR_COMPONENT);
pub const END_VCALENDAR: &str = const_str::concat!("END:", VCALENDAR_COMPONENT);

pub const ICALENDAR_VERSION: &str = "2.0";
pub const DEFAULT_PRODID: &str = "-//kunai//kunai 0.1//EN";
