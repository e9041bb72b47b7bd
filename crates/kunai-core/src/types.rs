use serde::Deserialize;

/// How a date-time is rendered into iCalendar text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateForm {
    /// `YYYYMMDDTHHMMSSZ`
    #[default]
    Utc,
    /// `YYYYMMDDTHHMMSS` in the local timezone, no offset.
    Local,
}

impl DateForm {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utc => "utc",
            Self::Local => "local",
        }
    }
}

impl std::fmt::Display for DateForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
