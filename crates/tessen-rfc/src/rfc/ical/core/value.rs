//! iCalendar property value types (RFC 5545 §3.3).

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Value types (RFC 5545 §3.3).
///
/// Only the value types the validator inspects are typed; everything else
/// is carried as `Unknown` with its raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Value {
    /// CAL-ADDRESS value (typically mailto: URI).
    CalAddress(String),
    /// DATE value.
    Date(NaiveDate),
    /// DATE-TIME value (floating or UTC; the offset is resolved elsewhere).
    DateTime(NaiveDateTime),
    /// INTEGER value.
    Integer(i64),
    /// TEXT value (unescaped).
    Text(String),
    /// TEXT-LIST value (multiple comma-separated texts).
    TextList(Vec<String>),
    /// URI value.
    Uri(String),
    /// Unknown or unparsed value.
    Unknown(String),
}

impl Value {
    /// Returns this value as text, if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns this value as an integer, if it is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns this value as a date-time, if it is a date-time value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Returns this value as a date, if it is a date value.
    #[must_use]
    pub fn as_date(&self) -> Option<&NaiveDate> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the single textual token carried by this value.
    ///
    /// Text-like values (TEXT, CAL-ADDRESS, URI, unparsed) yield their string;
    /// structured values yield `None`.
    #[must_use]
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::CalAddress(s) | Self::Uri(s) | Self::Unknown(s) => Some(s),
            Self::TextList(items) if items.len() == 1 => items.first().map(String::as_str),
            _ => None,
        }
    }

    /// Interprets this value as an integer, parsing unparsed or text values.
    #[must_use]
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(s) | Self::Unknown(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CalAddress(s) | Self::Text(s) | Self::Uri(s) | Self::Unknown(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y%m%d")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y%m%dT%H%M%S")),
            Self::Integer(n) => write!(f, "{n}"),
            Self::TextList(items) => f.write_str(&items.join(",")),
        }
    }
}
