use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown for deadlines that are not a calendar date
pub const INVALID_DATE: &str = "Invalid Date";

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Two-digit day, abbreviated month, numeric year (en-US order)
const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Deadline as entered in a date input (`YYYY-MM-DD`).
///
/// Stored as text so that whatever the form captured is kept verbatim;
/// interpretation happens only when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Deadline(String);

impl Deadline {
    pub fn new(value: impl Into<String>) -> Self {
        Deadline(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing but whitespace was entered
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Calendar date, if the text is one
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), INPUT_FORMAT).ok()
    }

    /// Display form, e.g. `Dec 01, 2024`
    pub fn formatted(&self) -> String {
        match self.date() {
            Some(date) => date.format(DISPLAY_FORMAT).to_string(),
            None => INVALID_DATE.to_string(),
        }
    }
}

impl From<&str> for Deadline {
    fn from(value: &str) -> Self {
        Deadline(value.to_string())
    }
}

impl From<String> for Deadline {
    fn from(value: String) -> Self {
        Deadline(value)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
