//! ## Summary
//! Validator dispatch.
//!
//! Selects the rule table for the (component kind, METHOD) pair, applies it to
//! every top-level component of that kind, then runs the cross-component
//! checks. Pairs without a table are rejected, never silently accepted.

use super::assert::assert_cardinality;
use super::consistency::{self, Indexed};
use super::report::{Collector, ValidationReport};
use super::tables;
use super::violation::ValidationViolation;
use super::{Cardinality, Method, ValidationOptions};
use crate::rfc::ical::core::{Component, ComponentKind, ICalendar, PropertyKind};

const SCHEDULABLE: [ComponentKind; 4] = [
    ComponentKind::Event,
    ComponentKind::Todo,
    ComponentKind::Journal,
    ComponentKind::FreeBusy,
];

/// Validates iTIP calendar objects with a fixed set of options.
///
/// The validator holds no state besides its options and may be shared
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    #[must_use]
    pub const fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// ## Summary
    /// Validates the top-level components of a calendar object against the
    /// rules for `method`.
    ///
    /// VTIMEZONE and unrecognised components are ignored. The kind of the
    /// first scheduling component selects the rule table.
    #[must_use]
    #[tracing::instrument(skip(self, components), fields(method = %method, count = components.len()))]
    pub fn validate(&self, method: Method, components: &[Component]) -> ValidationReport {
        let mut out = Collector::new(self.options.failure_mode);
        self.dispatch(method, components, &mut out);
        out.finish()
    }

    /// ## Summary
    /// Validates a whole calendar object.
    ///
    /// Checks the VCALENDAR properties (METHOD, PRODID and VERSION exactly
    /// once, CALSCALE at most once), resolves the METHOD token, then
    /// validates the top-level components.
    #[must_use]
    #[tracing::instrument(skip_all, fields(method = calendar.method().unwrap_or_default()))]
    pub fn validate_calendar(&self, calendar: &ICalendar) -> ValidationReport {
        let mut out = Collector::new(self.options.failure_mode);
        let root = &calendar.root;

        for &(kind, expected) in tables::CALENDAR {
            if let Err(err) = assert_cardinality(kind, expected, root.properties.as_slice()) {
                out.push(err.within(ComponentKind::Calendar));
            }
        }

        if root.count_properties(PropertyKind::Method) == 1 {
            let token = calendar.method().unwrap_or_default();
            match Method::parse(token) {
                Some(method) => self.dispatch(method, calendar.components(), &mut out),
                None => {
                    tracing::warn!(method = token, "Unknown METHOD");
                    out.push(ValidationViolation::UnknownMethod {
                        value: token.to_string(),
                    });
                }
            }
        }

        out.finish()
    }

    fn dispatch(&self, method: Method, components: &[Component], out: &mut Collector) {
        let mut scheduled: Vec<Indexed<'_>> = Vec::new();

        for (index, component) in components.iter().enumerate() {
            match component.kind {
                ComponentKind::Event
                | ComponentKind::Todo
                | ComponentKind::Journal
                | ComponentKind::FreeBusy => scheduled.push((index, component)),
                ComponentKind::Timezone | ComponentKind::Unknown => {}
                ComponentKind::Calendar
                | ComponentKind::Alarm
                | ComponentKind::Standard
                | ComponentKind::Daylight => out.push(ValidationViolation::UnsupportedMethod {
                    component: component.kind,
                    method,
                }),
            }
        }

        let Some(&(_, first)) = scheduled.first() else {
            out.push(ValidationViolation::MissingSchedulingComponent { method });
            return;
        };
        let kind = first.kind;

        // One calendar object carries one kind of scheduling component.
        for other in SCHEDULABLE.into_iter().filter(|k| *k != kind) {
            if let Err(err) = assert_cardinality(other, Cardinality::None, components) {
                out.push(err.within(ComponentKind::Calendar));
            }
        }

        let Some(spec) = tables::lookup(kind, method) else {
            tracing::warn!(component = %kind, %method, "No rule table for component and METHOD");
            out.push(ValidationViolation::UnsupportedMethod {
                component: kind,
                method,
            });
            return;
        };
        tracing::debug!(component = %kind, instances = %spec.instances, "Rule table selected");

        if let Err(err) = assert_cardinality(kind, spec.instances, components) {
            out.push(err.within(ComponentKind::Calendar));
        }

        for &(_, component) in scheduled.iter().filter(|(_, c)| c.kind == kind) {
            if out.is_done() {
                return;
            }
            spec.evaluate(component, self.options, out);
        }

        if scheduled.len() >= 2 && !out.is_done() {
            consistency::check(&scheduled, self.options, out);
        }
    }
}

/// ## Summary
/// Validates top-level components against the rules for `method`, using the
/// default options.
///
/// ## Errors
/// Returns every violation found, in evaluation order.
pub fn validate(method: Method, components: &[Component]) -> Result<(), Vec<ValidationViolation>> {
    Validator::default().validate(method, components).into_result()
}

/// ## Summary
/// Validates a whole calendar object using the default options.
///
/// ## Errors
/// Returns every violation found, in evaluation order.
pub fn validate_calendar(calendar: &ICalendar) -> Result<(), Vec<ValidationViolation>> {
    Validator::default().validate_calendar(calendar).into_result()
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
