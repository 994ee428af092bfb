//! VEVENT scenarios.

use tessen_rfc::rfc::ical::core::{Component, ComponentKind, Parameter, Property, PropertyKind};

use super::helpers::*;

fn reply() -> Component {
    Component::event()
        .with_property(Property::cal_address("ATTENDEE", ATTENDEE))
        .with_property(Property::datetime("DTSTAMP", at(8)))
        .with_property(Property::cal_address("ORGANIZER", ORGANIZER))
        .with_property(Property::text("UID", UID))
}

/// ## Summary
/// An event REPLY carrying only the four required properties is valid.
#[test_log::test]
fn reply_with_required_properties_is_valid() {
    assert_eq!(validate(Method::Reply, &[reply()]), Ok(()));
}

/// ## Summary
/// A REPLY must not carry alarms.
#[test_log::test]
fn reply_with_alarm_is_rejected() {
    let violations = validate(Method::Reply, &[reply().with_child(Component::alarm())])
        .expect_err("VALARM is forbidden in a REPLY");

    assert_eq!(
        violations,
        vec![ValidationViolation::CardinalityViolation {
            component: ComponentKind::Event,
            identifier: Identifier::Component(ComponentKind::Alarm),
            expected: Cardinality::None,
            actual: 1,
        }]
    );
}

#[test_log::test]
fn reply_with_dtend_and_duration() {
    let component = reply()
        .with_property(Property::datetime("DTSTART", at(10)))
        .with_property(Property::datetime("DTEND", at(11)))
        .with_property(Property::text("DURATION", "PT1H"));

    let violations = violations_for(Method::Reply, component);
    assert_eq!(
        violations,
        vec![ValidationViolation::ConditionalConstraintViolation {
            component: ComponentKind::Event,
            identifier: PropertyKind::DtEnd,
            related: PropertyKind::Duration,
            reason: ConditionalReason::MutuallyExclusive,
        }]
    );
}

/// ## Summary
/// DTEND alone passes both the cardinality and the exclusivity rules. The
/// start is zoned and the end is floating, so the two are not ordered.
#[test_log::test]
fn reply_with_dtend_only() {
    let component = reply()
        .with_property(
            Property::datetime("DTSTART", at(10)).with_param(Parameter::new("TZID", "Europe/Paris")),
        )
        .with_property(Property::datetime("DTEND", at(9)));

    assert_eq!(validate(Method::Reply, &[component]), Ok(()));
}

#[test_log::test]
fn reply_with_duration_only() {
    let component = reply()
        .with_property(Property::datetime("DTSTART", at(10)))
        .with_property(Property::text("DURATION", "PT30M"));

    assert_eq!(validate(Method::Reply, &[component]), Ok(()));
}

#[test_log::test]
fn reply_with_two_attendees() {
    let component = reply().with_property(Property::cal_address("ATTENDEE", "mailto:other@example.com"));

    let violations = violations_for(Method::Reply, component);
    assert_eq!(
        violations,
        vec![ValidationViolation::CardinalityViolation {
            component: ComponentKind::Event,
            identifier: Identifier::Property(PropertyKind::Attendee),
            expected: Cardinality::ExactlyOne,
            actual: 2,
        }]
    );
}

#[test_log::test]
fn request_needs_an_attendee() {
    let mut request = minimal(&tables::event::REQUEST);
    request.remove_properties(PropertyKind::Attendee);

    let violations = violations_for(Method::Request, request);
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].to_string(),
        "VEVENT: ATTENDEE expected 1+, found 0"
    );
}

#[test_log::test]
fn request_rejects_cancelled_status() {
    let request =
        minimal(&tables::event::REQUEST).with_property(Property::text("STATUS", "CANCELLED"));

    let violations = violations_for(Method::Request, request);
    assert_eq!(
        violations,
        vec![ValidationViolation::ValueConstraintViolation {
            component: ComponentKind::Event,
            identifier: PropertyKind::Status,
            allowed: "TENTATIVE|CONFIRMED".to_string(),
            actual: "CANCELLED".to_string(),
        }]
    );
}

#[test_log::test]
fn cancel_accepts_only_cancelled_status() {
    let cancelled = minimal(&tables::event::CANCEL).with_property(Property::text("STATUS", "CANCELLED"));
    assert_eq!(validate(Method::Cancel, &[cancelled]), Ok(()));

    let tentative = minimal(&tables::event::CANCEL).with_property(Property::text("STATUS", "TENTATIVE"));
    let violations = violations_for(Method::Cancel, tentative);
    assert!(matches!(
        violations.as_slice(),
        [ValidationViolation::ValueConstraintViolation { identifier: PropertyKind::Status, .. }]
    ));
}

#[test_log::test]
fn add_requires_positive_sequence() {
    let mut add = minimal(&tables::event::ADD);
    add.remove_properties(PropertyKind::Sequence);
    add.add_property(Property::integer("SEQUENCE", 0));

    let violations = violations_for(Method::Add, add);
    assert_eq!(
        violations,
        vec![ValidationViolation::ValueConstraintViolation {
            component: ComponentKind::Event,
            identifier: PropertyKind::Sequence,
            allowed: "> 0".to_string(),
            actual: "0".to_string(),
        }]
    );
}

#[test_log::test]
fn request_checks_nested_alarms() {
    let email = Component::alarm()
        .with_property(Property::text("ACTION", "EMAIL"))
        .with_property(Property::text("TRIGGER", "-PT30M"))
        .with_property(Property::text("DESCRIPTION", "Starting soon"));
    let request = minimal(&tables::event::REQUEST).with_child(email);

    let violations = violations_for(Method::Request, request);
    let missing: Vec<_> = violations.iter().filter_map(ValidationViolation::identifier).collect();
    assert_eq!(
        missing,
        vec![
            Identifier::Property(PropertyKind::Summary),
            Identifier::Property(PropertyKind::Attendee),
        ]
    );
    assert!(violations.iter().all(|v| v.to_string().starts_with("VALARM: ")));
}

#[test_log::test]
fn refresh_is_bare() {
    let refresh = minimal(&tables::event::REFRESH)
        .with_property(Property::text("SUMMARY", "Catch-up"))
        .with_property(Property::text("COMMENT", "Please resend"));

    let violations = violations_for(Method::Refresh, refresh);
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].identifier(),
        Some(Identifier::Property(PropertyKind::Summary))
    );
}

#[test_log::test]
fn counter_allows_alarms_and_proposed_times() {
    let counter = minimal(&tables::event::COUNTER)
        .with_property(Property::datetime("DTEND", at(12)))
        .with_child(
            Component::alarm()
                .with_property(Property::text("ACTION", "AUDIO"))
                .with_property(Property::text("TRIGGER", "-PT5M")),
        );
    assert_eq!(validate(Method::Counter, &[counter]), Ok(()));
}

#[test_log::test]
fn end_before_start_is_rejected() {
    let publish = minimal(&tables::event::PUBLISH).with_property(Property::datetime("DTEND", at(9)));

    let violations = violations_for(Method::Publish, publish);
    assert_eq!(
        violations,
        vec![ValidationViolation::ConditionalConstraintViolation {
            component: ComponentKind::Event,
            identifier: PropertyKind::DtEnd,
            related: PropertyKind::DtStart,
            reason: ConditionalReason::EndNotAfterStart,
        }]
    );
}
