//! VJOURNAL scenarios.

use tessen_rfc::rfc::ical::core::{Component, ComponentKind, Property, PropertyKind};

use super::helpers::*;

fn cancel() -> Component {
    Component::journal()
        .with_property(Property::datetime("DTSTAMP", at(8)))
        .with_property(Property::cal_address("ORGANIZER", ORGANIZER))
        .with_property(Property::integer("SEQUENCE", 3))
        .with_property(Property::text("UID", UID))
}

#[test_log::test]
fn cancel_without_status_is_valid() {
    assert_eq!(validate(Method::Cancel, &[cancel()]), Ok(()));
}

/// ## Summary
/// A journal CANCEL with any STATUS but CANCELLED fails on the value only.
#[test_log::test]
fn cancel_with_confirmed_status() {
    let component = cancel().with_property(Property::text("STATUS", "CONFIRMED"));

    let violations = violations_for(Method::Cancel, component);
    assert_eq!(
        violations,
        vec![ValidationViolation::ValueConstraintViolation {
            component: ComponentKind::Journal,
            identifier: PropertyKind::Status,
            allowed: "CANCELLED".to_string(),
            actual: "CONFIRMED".to_string(),
        }]
    );
}

#[test_log::test]
fn cancel_value_rules_can_be_disabled() {
    let component = cancel().with_property(Property::text("STATUS", "CONFIRMED"));
    let validator = Validator::new(ValidationOptions::default().with_value_constraints(false));

    let report = validator.validate(Method::Cancel, &[component]);
    assert!(report.is_valid());
}

#[test_log::test]
fn cancel_forbids_request_status() {
    let component = cancel().with_property(Property::text("REQUEST-STATUS", "2.0;Success"));

    let violations = violations_for(Method::Cancel, component);
    assert_eq!(
        violations,
        vec![ValidationViolation::CardinalityViolation {
            component: ComponentKind::Journal,
            identifier: Identifier::Property(PropertyKind::RequestStatus),
            expected: Cardinality::None,
            actual: 1,
        }]
    );
}

#[test_log::test]
fn cancel_of_several_instances() {
    let first = cancel().with_property(Property::datetime("RECURRENCE-ID", at(9)));
    let second = cancel().with_property(Property::datetime("RECURRENCE-ID", at(10)));
    assert_eq!(validate(Method::Cancel, &[first, second]), Ok(()));
}

#[test_log::test]
fn publish_requires_description() {
    let mut publish = minimal(&tables::journal::PUBLISH);
    publish.remove_properties(PropertyKind::Description);

    let violations = violations_for(Method::Publish, publish);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].is_cardinality());
}

#[test_log::test]
fn publish_status_vocabulary() {
    let draft = minimal(&tables::journal::PUBLISH).with_property(Property::text("STATUS", "draft"));
    assert_eq!(validate(Method::Publish, &[draft]), Ok(()));

    let tentative = minimal(&tables::journal::PUBLISH).with_property(Property::text("STATUS", "TENTATIVE"));
    let violations = violations_for(Method::Publish, tentative);
    assert!(matches!(
        violations.as_slice(),
        [ValidationViolation::ValueConstraintViolation { allowed, .. }] if allowed == "DRAFT|FINAL|CANCELLED"
    ));
}
