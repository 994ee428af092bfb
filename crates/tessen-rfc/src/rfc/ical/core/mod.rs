//! iCalendar core models (RFC 5545).
//!
//! This module defines the data structures the validator consumes:
//! - Components keep their properties and children in order of appearance
//! - Property and component identifiers are closed enums with an escape hatch
//!   for X- and IANA extensions, so rule tables can be matched exhaustively
//! - Original names are preserved next to the typed kind

mod component;
mod parameter;
mod property;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use parameter::Parameter;
pub use property::{Property, PropertyKind};
pub use value::Value;
