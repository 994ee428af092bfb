//! iCalendar property types (RFC 5545 §3.7, §3.8; RFC 5546 §3).

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};

use super::{Parameter, Value};

/// Property identifier.
///
/// Closed vocabulary of the properties RFC 5545 and RFC 5546 define, plus
/// `Other` for X- and IANA-registered extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    // Calendar properties
    CalScale,
    Method,
    ProdId,
    Version,

    // Descriptive component properties
    Attach,
    Categories,
    Class,
    Comment,
    Description,
    Geo,
    Location,
    PercentComplete,
    Priority,
    Resources,
    Status,
    Summary,

    // Date and time component properties
    Completed,
    DtEnd,
    Due,
    DtStart,
    Duration,
    FreeBusy,
    Transp,

    // Time zone component properties
    TzId,
    TzName,
    TzOffsetFrom,
    TzOffsetTo,
    TzUrl,

    // Relationship component properties
    Attendee,
    Contact,
    Organizer,
    RecurrenceId,
    RelatedTo,
    Url,
    Uid,

    // Recurrence component properties
    ExDate,
    ExRule,
    RDate,
    RRule,

    // Alarm component properties
    Action,
    Repeat,
    Trigger,

    // Change management component properties
    Created,
    DtStamp,
    LastModified,
    Sequence,

    // Miscellaneous component properties
    RequestStatus,

    /// X- or IANA extension property.
    Other,
}

impl PropertyKind {
    /// Returns the RFC name for this property kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CalScale => "CALSCALE",
            Self::Method => "METHOD",
            Self::ProdId => "PRODID",
            Self::Version => "VERSION",
            Self::Attach => "ATTACH",
            Self::Categories => "CATEGORIES",
            Self::Class => "CLASS",
            Self::Comment => "COMMENT",
            Self::Description => "DESCRIPTION",
            Self::Geo => "GEO",
            Self::Location => "LOCATION",
            Self::PercentComplete => "PERCENT-COMPLETE",
            Self::Priority => "PRIORITY",
            Self::Resources => "RESOURCES",
            Self::Status => "STATUS",
            Self::Summary => "SUMMARY",
            Self::Completed => "COMPLETED",
            Self::DtEnd => "DTEND",
            Self::Due => "DUE",
            Self::DtStart => "DTSTART",
            Self::Duration => "DURATION",
            Self::FreeBusy => "FREEBUSY",
            Self::Transp => "TRANSP",
            Self::TzId => "TZID",
            Self::TzName => "TZNAME",
            Self::TzOffsetFrom => "TZOFFSETFROM",
            Self::TzOffsetTo => "TZOFFSETTO",
            Self::TzUrl => "TZURL",
            Self::Attendee => "ATTENDEE",
            Self::Contact => "CONTACT",
            Self::Organizer => "ORGANIZER",
            Self::RecurrenceId => "RECURRENCE-ID",
            Self::RelatedTo => "RELATED-TO",
            Self::Url => "URL",
            Self::Uid => "UID",
            Self::ExDate => "EXDATE",
            Self::ExRule => "EXRULE",
            Self::RDate => "RDATE",
            Self::RRule => "RRULE",
            Self::Action => "ACTION",
            Self::Repeat => "REPEAT",
            Self::Trigger => "TRIGGER",
            Self::Created => "CREATED",
            Self::DtStamp => "DTSTAMP",
            Self::LastModified => "LAST-MODIFIED",
            Self::Sequence => "SEQUENCE",
            Self::RequestStatus => "REQUEST-STATUS",
            Self::Other => "X-PROPERTY",
        }
    }

    /// Parses a property kind from its name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "CALSCALE" => Self::CalScale,
            "METHOD" => Self::Method,
            "PRODID" => Self::ProdId,
            "VERSION" => Self::Version,
            "ATTACH" => Self::Attach,
            "CATEGORIES" => Self::Categories,
            "CLASS" => Self::Class,
            "COMMENT" => Self::Comment,
            "DESCRIPTION" => Self::Description,
            "GEO" => Self::Geo,
            "LOCATION" => Self::Location,
            "PERCENT-COMPLETE" => Self::PercentComplete,
            "PRIORITY" => Self::Priority,
            "RESOURCES" => Self::Resources,
            "STATUS" => Self::Status,
            "SUMMARY" => Self::Summary,
            "COMPLETED" => Self::Completed,
            "DTEND" => Self::DtEnd,
            "DUE" => Self::Due,
            "DTSTART" => Self::DtStart,
            "DURATION" => Self::Duration,
            "FREEBUSY" => Self::FreeBusy,
            "TRANSP" => Self::Transp,
            "TZID" => Self::TzId,
            "TZNAME" => Self::TzName,
            "TZOFFSETFROM" => Self::TzOffsetFrom,
            "TZOFFSETTO" => Self::TzOffsetTo,
            "TZURL" => Self::TzUrl,
            "ATTENDEE" => Self::Attendee,
            "CONTACT" => Self::Contact,
            "ORGANIZER" => Self::Organizer,
            "RECURRENCE-ID" => Self::RecurrenceId,
            "RELATED-TO" => Self::RelatedTo,
            "URL" => Self::Url,
            "UID" => Self::Uid,
            "EXDATE" => Self::ExDate,
            "EXRULE" => Self::ExRule,
            "RDATE" => Self::RDate,
            "RRULE" => Self::RRule,
            "ACTION" => Self::Action,
            "REPEAT" => Self::Repeat,
            "TRIGGER" => Self::Trigger,
            "CREATED" => Self::Created,
            "DTSTAMP" => Self::DtStamp,
            "LAST-MODIFIED" => Self::LastModified,
            "SEQUENCE" => Self::Sequence,
            "REQUEST-STATUS" => Self::RequestStatus,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PropertyKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Wire shape of a property; the kind is derived from the name.
#[derive(Deserialize)]
struct RawProperty {
    name: String,
    #[serde(default)]
    params: Vec<Parameter>,
    value: Value,
}

/// A typed iCalendar property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawProperty")]
pub struct Property {
    /// Property identifier.
    #[serde(skip_serializing)]
    pub kind: PropertyKind,
    /// Property name (normalized to uppercase, preserved for X-properties).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Parsed value.
    pub value: Value,
}

impl From<RawProperty> for Property {
    fn from(raw: RawProperty) -> Self {
        let mut prop = Self::new(raw.name, raw.value);
        prop.params = raw.params;
        prop
    }
}

impl Property {
    /// Creates a property with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        let name = name.into().to_ascii_uppercase();
        Self {
            kind: PropertyKind::parse(&name),
            name,
            params: Vec::new(),
            value,
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Value::Text(value.into()))
    }

    /// Creates a property with an integer value.
    #[must_use]
    pub fn integer(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, Value::Integer(value))
    }

    /// Creates a property with a calendar user address value.
    #[must_use]
    pub fn cal_address(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(name, Value::CalAddress(address.into()))
    }

    /// Creates a property with a URI value.
    #[must_use]
    pub fn uri(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::new(name, Value::Uri(uri.into()))
    }

    /// Creates a property with a date-time value.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: NaiveDateTime) -> Self {
        Self::new(name, Value::DateTime(dt))
    }

    /// Creates a property with a date value.
    #[must_use]
    pub fn date(name: impl Into<String>, d: NaiveDate) -> Self {
        let mut prop = Self::new(name, Value::Date(d));
        prop.params.push(Parameter::new("VALUE", "DATE"));
        prop
    }

    /// Creates a property whose value has not been typed.
    #[must_use]
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Value::Unknown(value.into()))
    }

    /// Returns a copy of this property with an added parameter.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns the value as an integer if it is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        self.value.as_integer()
    }

    /// Returns the value as a datetime if it is a datetime value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        self.value.as_datetime()
    }

    /// Returns the value as a date if it is a date value.
    #[must_use]
    pub fn as_date(&self) -> Option<&NaiveDate> {
        self.value.as_date()
    }
}
