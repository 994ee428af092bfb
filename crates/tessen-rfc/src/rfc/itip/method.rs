//! iTIP scheduling methods (RFC 5546 §1.4).

use std::fmt;

use serde::{Serialize, Serializer};

/// The METHOD of an iTIP calendar object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// Post notification of a calendar component; no reply expected.
    Publish,
    /// Invite attendees, reschedule, or update a calendar component.
    Request,
    /// Attendee response to a REQUEST.
    Reply,
    /// Add one or more new instances to an existing recurring component.
    Add,
    /// Cancel one or more instances, or remove attendees.
    Cancel,
    /// Attendee asks the organizer for the latest version.
    Refresh,
    /// Attendee proposes changes to the organizer.
    Counter,
    /// Organizer rejects a COUNTER.
    DeclineCounter,
}

impl Method {
    /// Every method RFC 5546 defines.
    pub const ALL: [Self; 8] = [
        Self::Publish,
        Self::Request,
        Self::Reply,
        Self::Add,
        Self::Cancel,
        Self::Refresh,
        Self::Counter,
        Self::DeclineCounter,
    ];

    /// Returns the METHOD token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "PUBLISH",
            Self::Request => "REQUEST",
            Self::Reply => "REPLY",
            Self::Add => "ADD",
            Self::Cancel => "CANCEL",
            Self::Refresh => "REFRESH",
            Self::Counter => "COUNTER",
            Self::DeclineCounter => "DECLINECOUNTER",
        }
    }

    /// Parses a METHOD token (case-insensitive). Unknown tokens yield `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
