//! VJOURNAL tables (RFC 5546 section 3.5).

use crate::rfc::ical::core::{ComponentKind as K, PropertyKind as P};
use crate::rfc::itip::Cardinality as C;
use crate::rfc::itip::rule::{RuleSpec, ValueRule};

const STATUS: ValueRule = ValueRule::OneOf(P::Status, &["DRAFT", "FINAL", "CANCELLED"]);

pub static PUBLISH: RuleSpec = RuleSpec {
    kind: K::Journal,
    instances: C::AtLeastOne,
    properties: &[
        (P::Description, C::ExactlyOne),
        (P::DtStamp, C::ExactlyOne),
        (P::DtStart, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Categories, C::AtMostOne),
        (P::Class, C::AtMostOne),
        (P::Created, C::AtMostOne),
        (P::LastModified, C::AtMostOne),
        (P::RecurrenceId, C::AtMostOne),
        (P::Sequence, C::AtMostOne),
        (P::Status, C::AtMostOne),
        (P::Summary, C::AtMostOne),
        (P::Url, C::AtMostOne),
        (P::Attach, C::Any),
        (P::Contact, C::Any),
        (P::ExDate, C::Any),
        (P::ExRule, C::Any),
        (P::RDate, C::Any),
        (P::RelatedTo, C::Any),
        (P::RRule, C::Any),
        (P::Attendee, C::None),
        (P::RequestStatus, C::None),
    ],
    components: &[(K::Alarm, C::None)],
    conditions: &[],
    values: &[STATUS, ValueRule::NonNegative(P::Sequence)],
};

pub static ADD: RuleSpec = RuleSpec {
    kind: K::Journal,
    instances: C::ExactlyOne,
    properties: &[
        (P::Description, C::ExactlyOne),
        (P::DtStamp, C::ExactlyOne),
        (P::DtStart, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Sequence, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Categories, C::AtMostOne),
        (P::Class, C::AtMostOne),
        (P::Created, C::AtMostOne),
        (P::LastModified, C::AtMostOne),
        (P::Status, C::AtMostOne),
        (P::Summary, C::AtMostOne),
        (P::Url, C::AtMostOne),
        (P::Attach, C::Any),
        (P::Contact, C::Any),
        (P::ExDate, C::Any),
        (P::RDate, C::Any),
        (P::RelatedTo, C::Any),
        (P::Attendee, C::None),
        (P::ExRule, C::None),
        (P::RecurrenceId, C::None),
        (P::RequestStatus, C::None),
        (P::RRule, C::None),
    ],
    components: &[(K::Alarm, C::None)],
    conditions: &[],
    values: &[STATUS, ValueRule::Positive(P::Sequence)],
};

pub static CANCEL: RuleSpec = RuleSpec {
    kind: K::Journal,
    instances: C::AtLeastOne,
    properties: &[
        (P::DtStamp, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Sequence, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Categories, C::AtMostOne),
        (P::Class, C::AtMostOne),
        (P::Created, C::AtMostOne),
        (P::Description, C::AtMostOne),
        (P::DtStart, C::AtMostOne),
        (P::LastModified, C::AtMostOne),
        (P::RecurrenceId, C::AtMostOne),
        (P::Status, C::AtMostOne),
        (P::Summary, C::AtMostOne),
        (P::Url, C::AtMostOne),
        (P::RequestStatus, C::None),
        (P::Attach, C::Any),
        (P::Attendee, C::Any),
        (P::Contact, C::Any),
        (P::ExDate, C::Any),
        (P::ExRule, C::Any),
        (P::RDate, C::Any),
        (P::RelatedTo, C::Any),
        (P::RRule, C::Any),
    ],
    components: &[(K::Alarm, C::None)],
    conditions: &[],
    values: &[
        ValueRule::OneOf(P::Status, &["CANCELLED"]),
        ValueRule::NonNegative(P::Sequence),
    ],
};
