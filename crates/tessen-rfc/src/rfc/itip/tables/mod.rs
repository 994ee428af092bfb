//! ## Summary
//! Static rule tables, one per (component kind, METHOD) pair RFC 5546 defines.
//!
//! Pairs RFC 5546 leaves undefined (VJOURNAL with REPLY, REFRESH, COUNTER or
//! DECLINECOUNTER; VFREEBUSY with anything but PUBLISH, REQUEST and REPLY)
//! have no table and are rejected by the dispatcher.

pub mod alarm;
pub mod event;
pub mod freebusy;
pub mod journal;
pub mod todo;

use super::rule::RuleSpec;
use super::{Cardinality, Method};
use crate::rfc::ical::core::{ComponentKind, PropertyKind};

/// Rows applied to the VCALENDAR object itself.
pub const CALENDAR: &[(PropertyKind, Cardinality)] = &[
    (PropertyKind::Method, Cardinality::ExactlyOne),
    (PropertyKind::ProdId, Cardinality::ExactlyOne),
    (PropertyKind::Version, Cardinality::ExactlyOne),
    (PropertyKind::CalScale, Cardinality::AtMostOne),
];

/// Returns the rule table for a top-level component kind under a METHOD.
#[must_use]
pub fn lookup(kind: ComponentKind, method: Method) -> Option<&'static RuleSpec> {
    match (kind, method) {
        (ComponentKind::Event, Method::Publish) => Some(&event::PUBLISH),
        (ComponentKind::Event, Method::Request) => Some(&event::REQUEST),
        (ComponentKind::Event, Method::Reply) => Some(&event::REPLY),
        (ComponentKind::Event, Method::Add) => Some(&event::ADD),
        (ComponentKind::Event, Method::Cancel) => Some(&event::CANCEL),
        (ComponentKind::Event, Method::Refresh) => Some(&event::REFRESH),
        (ComponentKind::Event, Method::Counter) => Some(&event::COUNTER),
        (ComponentKind::Event, Method::DeclineCounter) => Some(&event::DECLINECOUNTER),

        (ComponentKind::Todo, Method::Publish) => Some(&todo::PUBLISH),
        (ComponentKind::Todo, Method::Request) => Some(&todo::REQUEST),
        (ComponentKind::Todo, Method::Reply) => Some(&todo::REPLY),
        (ComponentKind::Todo, Method::Add) => Some(&todo::ADD),
        (ComponentKind::Todo, Method::Cancel) => Some(&todo::CANCEL),
        (ComponentKind::Todo, Method::Refresh) => Some(&todo::REFRESH),
        (ComponentKind::Todo, Method::Counter) => Some(&todo::COUNTER),
        (ComponentKind::Todo, Method::DeclineCounter) => Some(&todo::DECLINECOUNTER),

        (ComponentKind::Journal, Method::Publish) => Some(&journal::PUBLISH),
        (ComponentKind::Journal, Method::Add) => Some(&journal::ADD),
        (ComponentKind::Journal, Method::Cancel) => Some(&journal::CANCEL),

        (ComponentKind::FreeBusy, Method::Publish) => Some(&freebusy::PUBLISH),
        (ComponentKind::FreeBusy, Method::Request) => Some(&freebusy::REQUEST),
        (ComponentKind::FreeBusy, Method::Reply) => Some(&freebusy::REPLY),
        (
            ComponentKind::Journal,
            Method::Request | Method::Reply | Method::Refresh | Method::Counter | Method::DeclineCounter,
        )
        | (
            ComponentKind::FreeBusy,
            Method::Add | Method::Cancel | Method::Refresh | Method::Counter | Method::DeclineCounter,
        )
        | (
            ComponentKind::Calendar
            | ComponentKind::Timezone
            | ComponentKind::Alarm
            | ComponentKind::Standard
            | ComponentKind::Daylight
            | ComponentKind::Unknown,
            _,
        ) => None,
    }
}

/// Returns the table applied to a nested component of the given kind.
#[must_use]
pub fn nested(kind: ComponentKind) -> Option<&'static RuleSpec> {
    match kind {
        ComponentKind::Alarm => Some(&alarm::VALARM),
        _ => None,
    }
}

/// Iterates over every supported (kind, METHOD) pair with its table.
pub fn supported() -> impl Iterator<Item = (ComponentKind, Method, &'static RuleSpec)> {
    [
        ComponentKind::Event,
        ComponentKind::Todo,
        ComponentKind::Journal,
        ComponentKind::FreeBusy,
    ]
    .into_iter()
    .flat_map(|kind| {
        Method::ALL
            .iter()
            .filter_map(move |&method| lookup(kind, method).map(|spec| (kind, method, spec)))
    })
}
