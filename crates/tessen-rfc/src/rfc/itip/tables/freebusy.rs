//! VFREEBUSY tables (RFC 5546 section 3.3).

use crate::rfc::ical::core::{ComponentKind as K, PropertyKind as P};
use crate::rfc::itip::Cardinality as C;
use crate::rfc::itip::rule::{Conditional, RuleSpec};

const TIMING: &[Conditional] = &[Conditional::EndAfterStart(P::DtStart, P::DtEnd)];

pub static PUBLISH: RuleSpec = RuleSpec {
    kind: K::FreeBusy,
    instances: C::AtLeastOne,
    properties: &[
        (P::DtStamp, C::ExactlyOne),
        (P::DtStart, C::ExactlyOne),
        (P::DtEnd, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::FreeBusy, C::AtLeastOne),
        (P::Url, C::AtMostOne),
        (P::Contact, C::Any),
        (P::Attendee, C::None),
        (P::Duration, C::None),
        (P::RequestStatus, C::None),
        (P::Uid, C::None),
    ],
    components: &[],
    conditions: TIMING,
    values: &[],
};

pub static REQUEST: RuleSpec = RuleSpec {
    kind: K::FreeBusy,
    instances: C::ExactlyOne,
    properties: &[
        (P::Attendee, C::AtLeastOne),
        (P::DtEnd, C::ExactlyOne),
        (P::DtStamp, C::ExactlyOne),
        (P::DtStart, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Contact, C::AtMostOne),
        (P::FreeBusy, C::None),
        (P::Duration, C::None),
        (P::RequestStatus, C::None),
        (P::Url, C::None),
    ],
    components: &[],
    conditions: TIMING,
    values: &[],
};

pub static REPLY: RuleSpec = RuleSpec {
    kind: K::FreeBusy,
    instances: C::ExactlyOne,
    properties: &[
        (P::Attendee, C::ExactlyOne),
        (P::DtStamp, C::ExactlyOne),
        (P::DtEnd, C::ExactlyOne),
        (P::DtStart, C::ExactlyOne),
        (P::Organizer, C::ExactlyOne),
        (P::Uid, C::ExactlyOne),
        (P::Contact, C::AtMostOne),
        (P::Url, C::AtMostOne),
        (P::FreeBusy, C::Any),
        (P::RequestStatus, C::Any),
        (P::Duration, C::None),
        (P::Sequence, C::None),
    ],
    components: &[],
    conditions: TIMING,
    values: &[],
};
