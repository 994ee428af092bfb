//! VTODO scenarios.

use tessen_rfc::rfc::ical::core::{ComponentKind, Property, PropertyKind};

use super::helpers::*;

#[test_log::test]
fn publish_requires_priority() {
    let mut publish = minimal(&tables::todo::PUBLISH);
    publish.remove_properties(PropertyKind::Priority);

    let violations = violations_for(Method::Publish, publish);
    assert_eq!(
        violations,
        vec![ValidationViolation::CardinalityViolation {
            component: ComponentKind::Todo,
            identifier: Identifier::Property(PropertyKind::Priority),
            expected: Cardinality::ExactlyOne,
            actual: 0,
        }]
    );
}

#[test_log::test]
fn due_and_duration_are_exclusive() {
    let request = minimal(&tables::todo::REQUEST)
        .with_property(Property::datetime("DUE", at(12)))
        .with_property(Property::text("DURATION", "PT2H"));

    let violations = violations_for(Method::Request, request);
    assert_eq!(
        violations,
        vec![ValidationViolation::ConditionalConstraintViolation {
            component: ComponentKind::Todo,
            identifier: PropertyKind::Due,
            related: PropertyKind::Duration,
            reason: ConditionalReason::MutuallyExclusive,
        }]
    );
}

#[test_log::test]
fn duration_without_start() {
    let add = minimal(&tables::todo::ADD).with_property(Property::text("DURATION", "PT2H"));

    let violations = violations_for(Method::Add, add);
    assert_eq!(
        violations,
        vec![ValidationViolation::ConditionalConstraintViolation {
            component: ComponentKind::Todo,
            identifier: PropertyKind::Duration,
            related: PropertyKind::DtStart,
            reason: ConditionalReason::MissingPrerequisite,
        }]
    );

    let with_start = minimal(&tables::todo::ADD)
        .with_property(Property::datetime("DTSTART", at(9)))
        .with_property(Property::text("DURATION", "PT2H"));
    assert_eq!(validate(Method::Add, &[with_start]), Ok(()));
}

#[test_log::test]
fn percent_complete_range() {
    let reply = minimal(&tables::todo::REPLY).with_property(Property::integer("PERCENT-COMPLETE", 150));

    let violations = violations_for(Method::Reply, reply);
    assert_eq!(
        violations,
        vec![ValidationViolation::ValueConstraintViolation {
            component: ComponentKind::Todo,
            identifier: PropertyKind::PercentComplete,
            allowed: "0..=100".to_string(),
            actual: "150".to_string(),
        }]
    );
}

#[test_log::test]
fn reply_carries_status_update() {
    let reply = minimal(&tables::todo::REPLY)
        .with_property(Property::text("STATUS", "COMPLETED"))
        .with_property(Property::datetime("COMPLETED", at(16)))
        .with_property(Property::integer("PERCENT-COMPLETE", 100));
    assert_eq!(validate(Method::Reply, &[reply]), Ok(()));
}

#[test_log::test]
fn counter_needs_attendee() {
    let mut counter = minimal(&tables::todo::COUNTER);
    counter.remove_properties(PropertyKind::Attendee);

    let violations = violations_for(Method::Counter, counter);
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].identifier(),
        Some(Identifier::Property(PropertyKind::Attendee))
    );
}

#[test_log::test]
fn refresh_forbids_due() {
    let refresh = minimal(&tables::todo::REFRESH).with_property(Property::datetime("DUE", at(12)));

    let violations = violations_for(Method::Refresh, refresh);
    assert_eq!(
        violations,
        vec![ValidationViolation::CardinalityViolation {
            component: ComponentKind::Todo,
            identifier: Identifier::Property(PropertyKind::Due),
            expected: Cardinality::None,
            actual: 1,
        }]
    );
}
