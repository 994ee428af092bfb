//! VALARM table, applied to alarms nested in any component that permits them.

use crate::rfc::ical::core::{ComponentKind as K, PropertyKind as P};
use crate::rfc::itip::Cardinality as C;
use crate::rfc::itip::rule::{Conditional, RuleSpec, ValueRule};

pub static VALARM: RuleSpec = RuleSpec {
    kind: K::Alarm,
    instances: C::Any,
    properties: &[
        (P::Action, C::ExactlyOne),
        (P::Trigger, C::ExactlyOne),
        (P::Duration, C::AtMostOne),
        (P::Repeat, C::AtMostOne),
        (P::Attach, C::Any),
        (P::Attendee, C::Any),
        (P::Description, C::Any),
        (P::Summary, C::Any),
    ],
    components: &[],
    conditions: &[
        Conditional::CoOccurring(P::Duration, P::Repeat),
        Conditional::WhenValue {
            property: P::Action,
            equals: "AUDIO",
            rows: &[(P::Attach, C::AtMostOne)],
        },
        Conditional::WhenValue {
            property: P::Action,
            equals: "DISPLAY",
            rows: &[(P::Description, C::ExactlyOne)],
        },
        Conditional::WhenValue {
            property: P::Action,
            equals: "EMAIL",
            rows: &[
                (P::Description, C::ExactlyOne),
                (P::Summary, C::ExactlyOne),
                (P::Attendee, C::AtLeastOne),
            ],
        },
        Conditional::WhenValue {
            property: P::Action,
            equals: "PROCEDURE",
            rows: &[(P::Attach, C::ExactlyOne), (P::Description, C::AtMostOne)],
        },
    ],
    values: &[
        ValueRule::OneOf(P::Action, &["AUDIO", "DISPLAY", "EMAIL", "PROCEDURE"]),
        ValueRule::NonNegative(P::Repeat),
    ],
};
