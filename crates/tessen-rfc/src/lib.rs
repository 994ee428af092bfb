//! iCalendar component model and iTIP (RFC 5546) scheduling-object validation.

pub mod error;
pub mod rfc;
