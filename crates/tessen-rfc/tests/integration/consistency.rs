//! Cross-component consistency scenarios.

use tessen_rfc::rfc::ical::core::{Component, Property};

use super::helpers::*;

fn instance(uid: &str, hour: u32, sequence: i64) -> Component {
    Component::event()
        .with_property(Property::cal_address("ATTENDEE", ATTENDEE))
        .with_property(Property::datetime("DTSTAMP", at(8)))
        .with_property(Property::cal_address("ORGANIZER", ORGANIZER))
        .with_property(Property::text("UID", uid))
        .with_property(Property::datetime("RECURRENCE-ID", at(hour)))
        .with_property(Property::integer("SEQUENCE", sequence))
}

/// ## Summary
/// Components may differ in everything but their UID.
#[test_log::test]
fn shared_uid_passes() {
    let first = instance(UID, 9, 0).with_property(Property::text("COMMENT", "Running late"));
    let second = instance(UID, 10, 0).with_property(Property::text("STATUS", "CONFIRMED"));
    assert_eq!(validate(Method::Reply, &[first, second]), Ok(()));
}

#[test_log::test]
fn differing_uid_fails() {
    let violations = validate(Method::Reply, &[instance(UID, 9, 0), instance("other", 10, 0)])
        .expect_err("UIDs differ");

    assert_eq!(
        violations,
        vec![ValidationViolation::InconsistentIdentifier {
            expected: UID.to_string(),
            found: "other".to_string(),
            component_index: 1,
        }]
    );
}

#[test_log::test]
fn index_counts_skipped_components() {
    let components = [
        Component::timezone(),
        instance(UID, 9, 0),
        instance("other", 10, 0),
    ];
    let violations = validate(Method::Reply, &components).expect_err("UIDs differ");

    assert!(matches!(
        violations.as_slice(),
        [ValidationViolation::InconsistentIdentifier { component_index: 2, .. }]
    ));
}

#[test_log::test]
fn duplicate_instance() {
    let violations = validate(Method::Reply, &[instance(UID, 9, 0), instance(UID, 9, 0)])
        .expect_err("same instance twice");

    assert!(matches!(
        violations.as_slice(),
        [ValidationViolation::DuplicateInstance { component_index: 1, .. }]
    ));
}

#[test_log::test]
fn instance_sequence_behind_master() {
    let master = Component::event()
        .with_property(Property::cal_address("ATTENDEE", ATTENDEE))
        .with_property(Property::datetime("DTSTAMP", at(8)))
        .with_property(Property::cal_address("ORGANIZER", ORGANIZER))
        .with_property(Property::text("UID", UID))
        .with_property(Property::integer("SEQUENCE", 4))
        .with_property(Property::text("RRULE", "FREQ=DAILY;COUNT=5"));
    let components = [master, instance(UID, 9, 2)];

    let violations = validate(Method::Reply, &components).expect_err("instance is stale");
    assert_eq!(
        violations,
        vec![ValidationViolation::SequenceRegression {
            uid: UID.to_string(),
            master: 4,
            instance: 2,
            component_index: 1,
        }]
    );

    let relaxed = Validator::new(ValidationOptions::default().with_sequence_ordering(false));
    assert!(relaxed.validate(Method::Reply, &components).is_valid());
}

/// ## Summary
/// An override of a master that does not recur is reported; adding an RDATE
/// to the master makes the same object valid.
#[test_log::test]
fn instance_of_non_recurring_master() {
    let master = Component::event()
        .with_property(Property::cal_address("ATTENDEE", ATTENDEE))
        .with_property(Property::datetime("DTSTAMP", at(8)))
        .with_property(Property::cal_address("ORGANIZER", ORGANIZER))
        .with_property(Property::text("UID", UID));

    let violations = validate(Method::Reply, &[master.clone(), instance(UID, 9, 0)])
        .expect_err("master does not recur");
    assert_eq!(
        violations,
        vec![ValidationViolation::NonRecurringMaster {
            uid: UID.to_string(),
            recurrence_id: "20260101T090000".to_string(),
            component_index: 1,
        }]
    );

    let recurring = master.with_property(Property::datetime("RDATE", at(9)));
    assert_eq!(validate(Method::Reply, &[recurring, instance(UID, 9, 0)]), Ok(()));
}
