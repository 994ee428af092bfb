//! iTIP (RFC 5546) scheduling-object validation.
//!
//! Each METHOD constrains which properties and nested components a calendar
//! component may carry. The rules live in static tables keyed by
//! (component kind, METHOD); the dispatcher selects one, applies it to every
//! matching top-level component and then checks that the components describe
//! one calendar item.
//!
//! ## Example
//!
//! ```rust
//! use tessen_rfc::rfc::ical::core::{Component, Property};
//! use tessen_rfc::rfc::itip::{Method, validate};
//!
//! let reply = Component::event()
//!     .with_property(Property::cal_address("ATTENDEE", "mailto:bob@example.com"))
//!     .with_property(Property::text("DTSTAMP", "20260101T120000Z"))
//!     .with_property(Property::cal_address("ORGANIZER", "mailto:alice@example.com"))
//!     .with_property(Property::text("UID", "meeting-1"));
//!
//! assert!(validate(Method::Reply, &[reply.clone()]).is_ok());
//!
//! let violations = validate(Method::Reply, &[reply.with_child(Component::alarm())])
//!     .expect_err("REPLY forbids VALARM");
//! assert_eq!(violations.len(), 1);
//! ```

pub mod assert;
mod cardinality;
mod consistency;
mod dispatch;
mod method;
mod options;
mod report;
pub mod rule;
pub mod tables;
mod violation;

pub use cardinality::Cardinality;
pub use dispatch::{Validator, validate, validate_calendar};
pub use method::Method;
pub use options::ValidationOptions;
pub use report::ValidationReport;
pub use tessen_core::config::FailureMode;
pub use violation::{CardinalityError, ConditionalReason, Identifier, ValidationViolation};
