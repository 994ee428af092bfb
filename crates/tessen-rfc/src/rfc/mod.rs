//! RFC implementations: the iCalendar model (RFC 5545) and iTIP validation (RFC 5546).

pub mod ical;
pub mod itip;
