//! VFREEBUSY scenarios.

use tessen_rfc::rfc::ical::core::{ComponentKind, Property, PropertyKind};

use super::helpers::*;

#[test_log::test]
fn publish_without_uid_is_valid() {
    let first = minimal(&tables::freebusy::PUBLISH);
    let second = minimal(&tables::freebusy::PUBLISH);
    assert_eq!(validate(Method::Publish, &[first, second]), Ok(()));
}

#[test_log::test]
fn publish_needs_busy_periods() {
    let mut publish = minimal(&tables::freebusy::PUBLISH);
    publish.remove_properties(PropertyKind::FreeBusy);

    let violations = violations_for(Method::Publish, publish);
    assert_eq!(
        violations,
        vec![ValidationViolation::CardinalityViolation {
            component: ComponentKind::FreeBusy,
            identifier: Identifier::Property(PropertyKind::FreeBusy),
            expected: Cardinality::AtLeastOne,
            actual: 0,
        }]
    );
}

#[test_log::test]
fn request_is_single() {
    let first = minimal(&tables::freebusy::REQUEST);
    let second = minimal(&tables::freebusy::REQUEST);

    let violations = validate(Method::Request, &[first, second]).expect_err("one VFREEBUSY per REQUEST");
    assert_eq!(
        violations[0],
        ValidationViolation::CardinalityViolation {
            component: ComponentKind::Calendar,
            identifier: Identifier::Component(ComponentKind::FreeBusy),
            expected: Cardinality::ExactlyOne,
            actual: 2,
        }
    );
}

#[test_log::test]
fn request_window_must_be_ordered() {
    let mut request = minimal(&tables::freebusy::REQUEST);
    request.remove_properties(PropertyKind::DtEnd);
    request.add_property(Property::datetime("DTEND", at(10)));

    let violations = violations_for(Method::Request, request);
    assert!(matches!(
        violations.as_slice(),
        [ValidationViolation::ConditionalConstraintViolation {
            reason: ConditionalReason::EndNotAfterStart,
            ..
        }]
    ));
}

#[test_log::test]
fn reply_lists_busy_time() {
    let reply = minimal(&tables::freebusy::REPLY)
        .with_property(Property::text("FREEBUSY", "20260101T100000Z/PT1H"))
        .with_property(Property::text("FREEBUSY", "20260101T140000Z/PT30M"));
    assert_eq!(validate(Method::Reply, &[reply]), Ok(()));
}
