//! Whole calendar objects, including their JSON rendition.

use tessen_rfc::rfc::ical::core::{ComponentKind, ICalendar, Property, PropertyKind};

use super::helpers::*;

const CANCEL_JSON: &str = r#"{
    "name": "VCALENDAR",
    "properties": [
        {"name": "PRODID", "value": {"type": "text", "value": "-//Example Corp//Journal//EN"}},
        {"name": "VERSION", "value": {"type": "text", "value": "2.0"}},
        {"name": "METHOD", "value": {"type": "text", "value": "CANCEL"}}
    ],
    "children": [
        {"name": "VTIMEZONE", "properties": [
            {"name": "TZID", "value": {"type": "text", "value": "Europe/Berlin"}}
        ]},
        {"name": "VJOURNAL", "properties": [
            {"name": "DTSTAMP", "value": {"type": "date-time", "value": "2026-01-05T09:00:00"}},
            {"name": "ORGANIZER", "value": {"type": "cal-address", "value": "mailto:editor@example.com"}},
            {"name": "SEQUENCE", "value": {"type": "integer", "value": 2}},
            {"name": "UID", "value": {"type": "text", "value": "journal-42@example.com"}},
            {"name": "STATUS", "value": {"type": "text", "value": "CONFIRMED"}}
        ]}
    ]
}"#;

#[test_log::test]
fn json_document_is_validated() {
    let calendar = ICalendar::from_json(CANCEL_JSON).expect("document should load");

    let violations = validate_calendar(&calendar).expect_err("STATUS is not CANCELLED");
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
fn report_serializes() {
    let calendar = ICalendar::from_json(CANCEL_JSON).expect("document should load");
    let report = Validator::default().validate_calendar(&calendar);

    let json = serde_json::to_value(&report).expect("report should serialize");
    assert_eq!(json["violations"][0]["kind"], "value_constraint_violation");
    assert_eq!(json["violations"][0]["component"], "VJOURNAL");
}

#[test_log::test]
fn calendar_with_extension_properties() {
    let mut ical = calendar("PUBLISH", [minimal(&tables::event::PUBLISH)]);
    ical.root.add_property(Property::text("CALSCALE", "GREGORIAN"));
    ical.root.add_property(Property::text("X-WR-CALNAME", "Team"));

    assert_eq!(validate_calendar(&ical), Ok(()));
}

#[test_log::test]
fn calendar_level_and_component_violations_are_combined() {
    let mut ical = calendar("REPLY", [minimal(&tables::event::REPLY)]);
    ical.root.add_property(Property::text("CALSCALE", "GREGORIAN"));
    ical.root.add_property(Property::text("CALSCALE", "GREGORIAN"));
    ical.root.children[0].remove_properties(PropertyKind::Uid);

    let violations = validate_calendar(&ical).expect_err("two faults");
    let identifiers: Vec<_> = violations.iter().filter_map(ValidationViolation::identifier).collect();
    assert_eq!(
        identifiers,
        vec![
            Identifier::Property(PropertyKind::CalScale),
            Identifier::Property(PropertyKind::Uid),
        ]
    );
}

#[test_log::test]
fn every_method_has_a_table_for_events() {
    for method in Method::ALL {
        let spec = tables::lookup(ComponentKind::Event, method).expect("VEVENT supports every METHOD");
        let ical = calendar(method.as_str(), [minimal(spec)]);
        assert_eq!(validate_calendar(&ical), Ok(()), "{method}");
    }
}
