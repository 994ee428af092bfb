//! Properties that hold for every rule table.

use tessen_rfc::rfc::ical::core::{Component, ComponentKind, PropertyKind};

use super::helpers::*;

#[test_log::test]
fn minimal_component_is_valid() {
    for (kind, method, spec) in tables::supported() {
        let violations = violations_for(method, minimal(spec));
        assert!(violations.is_empty(), "{kind} {method}: {violations:?}");
    }
}

#[test]
fn removing_a_required_property_is_one_violation() {
    for (kind, method, spec) in tables::supported() {
        for required in rows(spec, Cardinality::ExactlyOne)
            .into_iter()
            .chain(rows(spec, Cardinality::AtLeastOne))
        {
            let mut component = minimal(spec);
            component.remove_properties(required);

            let violations = violations_for(method, component);
            assert_eq!(
                violations,
                vec![ValidationViolation::CardinalityViolation {
                    component: kind,
                    identifier: Identifier::Property(required),
                    expected: spec.property_rule(required),
                    actual: 0,
                }],
                "{kind} {method} without {required}"
            );
        }
    }
}

#[test]
fn duplicating_an_optional_property_is_one_violation() {
    for (kind, method, spec) in tables::supported() {
        for optional in rows(spec, Cardinality::AtMostOne) {
            let component = minimal(spec)
                .with_property(sample(optional, spec))
                .with_property(sample(optional, spec));

            let violations = violations_for(method, component);
            let cardinality = cardinality_only(&violations);
            assert_eq!(cardinality.len(), 1, "{kind} {method} with two {optional}");
            assert_eq!(
                cardinality[0].identifier(),
                Some(Identifier::Property(optional))
            );
        }
    }
}

#[test]
fn adding_a_forbidden_property_is_one_violation() {
    for (kind, method, spec) in tables::supported() {
        for forbidden in rows(spec, Cardinality::None) {
            let component = minimal(spec).with_property(sample(forbidden, spec));

            let violations = violations_for(method, component);
            assert_eq!(
                violations,
                vec![ValidationViolation::CardinalityViolation {
                    component: kind,
                    identifier: Identifier::Property(forbidden),
                    expected: Cardinality::None,
                    actual: 1,
                }],
                "{kind} {method} with {forbidden}"
            );
        }
    }
}

#[test]
fn adding_a_forbidden_alarm_is_one_violation() {
    let forbidding = tables::supported()
        .filter(|(_, _, spec)| spec.component_rule(ComponentKind::Alarm) == Cardinality::None);

    for (kind, method, spec) in forbidding {
        let component = minimal(spec).with_child(Component::alarm());

        let violations = violations_for(method, component);
        assert_eq!(
            violations,
            vec![ValidationViolation::CardinalityViolation {
                component: kind,
                identifier: Identifier::Component(ComponentKind::Alarm),
                expected: Cardinality::None,
                actual: 1,
            }],
            "{kind} {method} with VALARM"
        );
    }
}

#[test]
fn repeatable_properties_accept_many() {
    for (kind, method, spec) in tables::supported() {
        let mut component = minimal(spec);
        for repeatable in rows(spec, Cardinality::Any) {
            component.add_property(sample(repeatable, spec));
            component.add_property(sample(repeatable, spec));
        }

        let violations = violations_for(method, component);
        assert!(violations.is_empty(), "{kind} {method}: {violations:?}");
    }
}

#[test]
fn valid_alarm_is_accepted_where_permitted() {
    let permitting = tables::supported()
        .filter(|(_, _, spec)| spec.components.contains(&(ComponentKind::Alarm, Cardinality::Any)));

    let mut count = 0;
    for (kind, method, spec) in permitting {
        let alarm = minimal(&tables::alarm::VALARM)
            .with_property(sample(PropertyKind::Description, spec));
        let component = minimal(spec).with_child(alarm);

        let violations = violations_for(method, component);
        assert!(violations.is_empty(), "{kind} {method}: {violations:?}");
        count += 1;
    }
    assert_eq!(count, 8);
}

#[test]
fn undefined_pairs_are_rejected() {
    let journal = minimal(&tables::journal::PUBLISH);
    for method in [
        Method::Request,
        Method::Reply,
        Method::Refresh,
        Method::Counter,
        Method::DeclineCounter,
    ] {
        assert_eq!(
            violations_for(method, journal.clone()),
            vec![ValidationViolation::UnsupportedMethod {
                component: ComponentKind::Journal,
                method,
            }]
        );
    }

    let freebusy = minimal(&tables::freebusy::PUBLISH);
    for method in [Method::Add, Method::Cancel, Method::Refresh, Method::Counter, Method::DeclineCounter] {
        assert_eq!(
            violations_for(method, freebusy.clone()),
            vec![ValidationViolation::UnsupportedMethod {
                component: ComponentKind::FreeBusy,
                method,
            }]
        );
    }
}
