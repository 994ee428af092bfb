//! iCalendar RFC 5545 component model.
//!
//! Parsing and serialization live outside this crate; callers build the
//! model directly or deserialize it from JSON.
//!
//! ## Example
//!
//! ```rust
//! use tessen_rfc::rfc::ical::core::*;
//!
//! let mut ical = ICalendar::new("-//My App//EN");
//! let mut event = Component::event();
//! event.add_property(Property::text("UID", "my-event-1"));
//! event.add_property(Property::text("SUMMARY", "Team Meeting"));
//! ical.add_component(event);
//!
//! assert_eq!(ical.components().len(), 1);
//! ```

pub mod core;

pub use core::{Component, ComponentKind, ICalendar, Parameter, Property, PropertyKind, Value};
