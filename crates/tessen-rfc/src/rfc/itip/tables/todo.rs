//! VTODO tables (RFC 5546 section 3.4).

use crate::rfc::ical::core::{ComponentKind as K, PropertyKind as P};
use crate::rfc::itip::Cardinality as C;
use crate::rfc::itip::rule::{Conditional, RuleSpec, ValueRule};

const TIMING: &[Conditional] = &[
    Conditional::MutuallyExclusive(P::Due, P::Duration),
    Conditional::Requires(P::Duration, P::DtStart),
    Conditional::EndAfterStart(P::DtStart, P::Due),
];

const PRIORITY: ValueRule = ValueRule::IntegerRange(P::Priority, 0, 9);
const PERCENT: ValueRule = ValueRule::IntegerRange(P::PercentComplete, 0, 100);
const ANY_STATUS: ValueRule = ValueRule::OneOf(
    P::Status,
    &["NEEDS-ACTION", "COMPLETED", "IN-PROCESS", "CANCELLED"],
);
const LIVE_STATUS: ValueRule =
    ValueRule::OneOf(P::Status, &["NEEDS-ACTION", "COMPLETED", "IN-PROCESS"]);

pub static PUBLISH: RuleSpec = RuleSpec {
    kind: K::Todo,
    instances: C::AtLeastOne,
    properties: &[
        (P::DtStamp, C::ExactlyOne),
        (P::DtStart, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Priority, C::ExactlyOne),
        (P::Summary, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Sequence, C::AtMostOne),
        (P::Categories, C::AtMostOne),
        (P::Class, C::AtMostOne),
        (P::Completed, C::AtMostOne),
        (P::Created, C::AtMostOne),
        (P::Description, C::AtMostOne),
        (P::Due, C::AtMostOne),
        (P::Duration, C::AtMostOne),
        (P::Geo, C::AtMostOne),
        (P::LastModified, C::AtMostOne),
        (P::Location, C::AtMostOne),
        (P::PercentComplete, C::AtMostOne),
        (P::RecurrenceId, C::AtMostOne),
        (P::Resources, C::AtMostOne),
        (P::Status, C::AtMostOne),
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
    components: &[(K::Alarm, C::Any)],
    conditions: TIMING,
    values: &[ANY_STATUS, ValueRule::NonNegative(P::Sequence), PRIORITY, PERCENT],
};

pub static REQUEST: RuleSpec = RuleSpec {
    kind: K::Todo,
    instances: C::AtLeastOne,
    properties: &[
        (P::Attendee, C::AtLeastOne),
        (P::DtStamp, C::ExactlyOne),
        (P::DtStart, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Priority, C::ExactlyOne),
        (P::Summary, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Sequence, C::AtMostOne),
        (P::Categories, C::AtMostOne),
        (P::Class, C::AtMostOne),
        (P::Completed, C::AtMostOne),
        (P::Created, C::AtMostOne),
        (P::Description, C::AtMostOne),
        (P::Due, C::AtMostOne),
        (P::Duration, C::AtMostOne),
        (P::Geo, C::AtMostOne),
        (P::LastModified, C::AtMostOne),
        (P::Location, C::AtMostOne),
        (P::PercentComplete, C::AtMostOne),
        (P::RecurrenceId, C::AtMostOne),
        (P::Resources, C::AtMostOne),
        (P::Status, C::AtMostOne),
        (P::Url, C::AtMostOne),
        (P::Attach, C::Any),
        (P::Contact, C::Any),
        (P::ExDate, C::Any),
        (P::ExRule, C::Any),
        (P::RDate, C::Any),
        (P::RelatedTo, C::Any),
        (P::RRule, C::Any),
        (P::RequestStatus, C::None),
    ],
    components: &[(K::Alarm, C::Any)],
    conditions: TIMING,
    values: &[LIVE_STATUS, ValueRule::NonNegative(P::Sequence), PRIORITY, PERCENT],
};

pub static REPLY: RuleSpec = RuleSpec {
    kind: K::Todo,
    instances: C::AtLeastOne,
    properties: &[
        (P::Attendee, C::ExactlyOne),
        (P::DtStamp, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Categories, C::AtMostOne),
        (P::Class, C::AtMostOne),
        (P::Completed, C::AtMostOne),
        (P::Created, C::AtMostOne),
        (P::Description, C::AtMostOne),
        (P::DtStart, C::AtMostOne),
        (P::Due, C::AtMostOne),
        (P::Duration, C::AtMostOne),
        (P::Geo, C::AtMostOne),
        (P::LastModified, C::AtMostOne),
        (P::Location, C::AtMostOne),
        (P::PercentComplete, C::AtMostOne),
        (P::Priority, C::AtMostOne),
        (P::RecurrenceId, C::AtMostOne),
        (P::Resources, C::AtMostOne),
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
        (P::RequestStatus, C::Any),
        (P::RRule, C::Any),
    ],
    components: &[(K::Alarm, C::None)],
    conditions: TIMING,
    values: &[ANY_STATUS, ValueRule::NonNegative(P::Sequence), PRIORITY, PERCENT],
};

pub static ADD: RuleSpec = RuleSpec {
    kind: K::Todo,
    instances: C::ExactlyOne,
    properties: &[
        (P::DtStamp, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Priority, C::ExactlyOne),
        (P::Sequence, C::ExactlyOne),
        (P::Summary, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Categories, C::AtMostOne),
        (P::Class, C::AtMostOne),
        (P::Completed, C::AtMostOne),
        (P::Created, C::AtMostOne),
        (P::Description, C::AtMostOne),
        (P::DtStart, C::AtMostOne),
        (P::Due, C::AtMostOne),
        (P::Duration, C::AtMostOne),
        (P::Geo, C::AtMostOne),
        (P::LastModified, C::AtMostOne),
        (P::Location, C::AtMostOne),
        (P::PercentComplete, C::AtMostOne),
        (P::Resources, C::AtMostOne),
        (P::Status, C::AtMostOne),
        (P::Url, C::AtMostOne),
        (P::Attach, C::Any),
        (P::Attendee, C::Any),
        (P::Contact, C::Any),
        (P::ExDate, C::Any),
        (P::RDate, C::Any),
        (P::RelatedTo, C::Any),
        (P::ExRule, C::None),
        (P::RecurrenceId, C::None),
        (P::RequestStatus, C::None),
        (P::RRule, C::None),
    ],
    components: &[(K::Alarm, C::Any)],
    conditions: TIMING,
    values: &[LIVE_STATUS, ValueRule::Positive(P::Sequence), PRIORITY, PERCENT],
};

pub static CANCEL: RuleSpec = RuleSpec {
    kind: K::Todo,
    instances: C::ExactlyOne,
    properties: &[
        (P::DtStamp, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Sequence, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Categories, C::AtMostOne),
        (P::Class, C::AtMostOne),
        (P::Completed, C::AtMostOne),
        (P::Created, C::AtMostOne),
        (P::Description, C::AtMostOne),
        (P::DtStart, C::AtMostOne),
        (P::Due, C::AtMostOne),
        (P::Duration, C::AtMostOne),
        (P::Geo, C::AtMostOne),
        (P::LastModified, C::AtMostOne),
        (P::Location, C::AtMostOne),
        (P::PercentComplete, C::AtMostOne),
        (P::Priority, C::AtMostOne),
        (P::RecurrenceId, C::AtMostOne),
        (P::Resources, C::AtMostOne),
        (P::Status, C::AtMostOne),
        (P::Summary, C::AtMostOne),
        (P::Url, C::AtMostOne),
        (P::Attach, C::Any),
        (P::Attendee, C::Any),
        (P::Contact, C::Any),
        (P::ExDate, C::Any),
        (P::ExRule, C::Any),
        (P::RDate, C::Any),
        (P::RelatedTo, C::Any),
        (P::RRule, C::Any),
        (P::RequestStatus, C::None),
    ],
    components: &[(K::Alarm, C::None)],
    conditions: TIMING,
    values: &[
        ValueRule::OneOf(P::Status, &["CANCELLED"]),
        ValueRule::NonNegative(P::Sequence),
        PRIORITY,
        PERCENT,
    ],
};

pub static REFRESH: RuleSpec = RuleSpec {
    kind: K::Todo,
    instances: C::ExactlyOne,
    properties: &[
        (P::Attendee, C::ExactlyOne),
        (P::DtStamp, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::RecurrenceId, C::AtMostOne),
        (P::Attach, C::None),
        (P::Categories, C::None),
        (P::Class, C::None),
        (P::Completed, C::None),
        (P::Contact, C::None),
        (P::Created, C::None),
        (P::Description, C::None),
        (P::DtStart, C::None),
        (P::Due, C::None),
        (P::Duration, C::None),
        (P::ExDate, C::None),
        (P::ExRule, C::None),
        (P::Geo, C::None),
        (P::LastModified, C::None),
        (P::Location, C::None),
        (P::PercentComplete, C::None),
        (P::Priority, C::None),
        (P::RDate, C::None),
        (P::RelatedTo, C::None),
        (P::RequestStatus, C::None),
        (P::Resources, C::None),
        (P::RRule, C::None),
        (P::Sequence, C::None),
        (P::Status, C::None),
        (P::Summary, C::None),
        (P::Url, C::None),
    ],
    components: &[(K::Alarm, C::None)],
    conditions: &[],
    values: &[],
};

pub static COUNTER: RuleSpec = RuleSpec {
    kind: K::Todo,
    instances: C::ExactlyOne,
    properties: &[
        (P::Attendee, C::AtLeastOne),
        (P::DtStamp, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Priority, C::ExactlyOne),
        (P::Summary, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Categories, C::AtMostOne),
        (P::Class, C::AtMostOne),
        (P::Completed, C::AtMostOne),
        (P::Created, C::AtMostOne),
        (P::Description, C::AtMostOne),
        (P::DtStart, C::AtMostOne),
        (P::Due, C::AtMostOne),
        (P::Duration, C::AtMostOne),
        (P::Geo, C::AtMostOne),
        (P::LastModified, C::AtMostOne),
        (P::Location, C::AtMostOne),
        (P::PercentComplete, C::AtMostOne),
        (P::RecurrenceId, C::AtMostOne),
        (P::Resources, C::AtMostOne),
        (P::Sequence, C::AtMostOne),
        (P::Status, C::AtMostOne),
        (P::Url, C::AtMostOne),
        (P::Attach, C::Any),
        (P::Contact, C::Any),
        (P::ExDate, C::Any),
        (P::ExRule, C::Any),
        (P::RDate, C::Any),
        (P::RelatedTo, C::Any),
        (P::RequestStatus, C::Any),
        (P::RRule, C::Any),
    ],
    components: &[(K::Alarm, C::Any)],
    conditions: TIMING,
    values: &[ANY_STATUS, ValueRule::NonNegative(P::Sequence), PRIORITY, PERCENT],
};

pub static DECLINECOUNTER: RuleSpec = RuleSpec {
    kind: K::Todo,
    instances: C::ExactlyOne,
    properties: &[
        (P::Attendee, C::AtLeastOne),
        (P::DtStamp, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Sequence, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Categories, C::AtMostOne),
        (P::Class, C::AtMostOne),
        (P::Completed, C::AtMostOne),
        (P::Created, C::AtMostOne),
        (P::Description, C::AtMostOne),
        (P::DtStart, C::AtMostOne),
        (P::Due, C::AtMostOne),
        (P::Duration, C::AtMostOne),
        (P::Geo, C::AtMostOne),
        (P::LastModified, C::AtMostOne),
        (P::Location, C::AtMostOne),
        (P::PercentComplete, C::AtMostOne),
        (P::Priority, C::AtMostOne),
        (P::RecurrenceId, C::AtMostOne),
        (P::Resources, C::AtMostOne),
        (P::Status, C::AtMostOne),
        (P::Summary, C::AtMostOne),
        (P::Url, C::AtMostOne),
        (P::Attach, C::Any),
        (P::Contact, C::Any),
        (P::ExDate, C::Any),
        (P::ExRule, C::Any),
        (P::RDate, C::Any),
        (P::RelatedTo, C::Any),
        (P::RequestStatus, C::Any),
        (P::RRule, C::Any),
    ],
    components: &[(K::Alarm, C::None)],
    conditions: TIMING,
    values: &[ValueRule::NonNegative(P::Sequence), PRIORITY, PERCENT],
};
