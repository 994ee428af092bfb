//! ## Summary
//! Declarative rule specifications.
//!
//! A [`RuleSpec`] is the executable form of one RFC 5546 presence table: the
//! cardinality of every listed property and nested component, plus the
//! conditional and value constraints noted in the table's comment column.
//! Tables are `'static` data and are never mutated.

use super::assert::assert_cardinality;
use super::report::Collector;
use super::tables;
use super::violation::{ConditionalReason, ValidationViolation};
use super::{Cardinality, ValidationOptions};
use crate::rfc::ical::core::{Component, ComponentKind, Property, PropertyKind, Value};

/// Presence-dependent constraint between two properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conditional {
    /// The two properties must not both be present.
    MutuallyExclusive(PropertyKind, PropertyKind),
    /// If the first property is present, the second must be too.
    Requires(PropertyKind, PropertyKind),
    /// Either both properties are present or neither is.
    CoOccurring(PropertyKind, PropertyKind),
    /// `(start, end)`: when both carry comparable values, end must be later.
    EndAfterStart(PropertyKind, PropertyKind),
    /// When `property` carries the token `equals`, apply the extra rows.
    WhenValue {
        property: PropertyKind,
        equals: &'static str,
        rows: &'static [(PropertyKind, Cardinality)],
    },
}

/// Constraint on the value of a property that passed its cardinality rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// The value must be one of the tokens (case-insensitive).
    OneOf(PropertyKind, &'static [&'static str]),
    /// The value must be an integer `>= 0`.
    NonNegative(PropertyKind),
    /// The value must be an integer `> 0`.
    Positive(PropertyKind),
    /// The value must be an integer within `min..=max`.
    IntegerRange(PropertyKind, i64, i64),
}

impl ValueRule {
    /// Returns the property this rule constrains.
    #[must_use]
    pub const fn property(self) -> PropertyKind {
        match self {
            Self::OneOf(kind, _)
            | Self::NonNegative(kind)
            | Self::Positive(kind)
            | Self::IntegerRange(kind, _, _) => kind,
        }
    }

    /// Returns a description of the allowed values.
    #[must_use]
    pub fn allowed(self) -> String {
        match self {
            Self::OneOf(_, tokens) => tokens.join("|"),
            Self::NonNegative(_) => ">= 0".to_string(),
            Self::Positive(_) => "> 0".to_string(),
            Self::IntegerRange(_, min, max) => format!("{min}..={max}"),
        }
    }

    /// Returns whether `value` satisfies this rule.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::OneOf(_, tokens) => value
                .as_token()
                .is_some_and(|token| tokens.iter().any(|t| t.eq_ignore_ascii_case(token.trim()))),
            Self::NonNegative(_) => value.to_integer().is_some_and(|n| n >= 0),
            Self::Positive(_) => value.to_integer().is_some_and(|n| n > 0),
            Self::IntegerRange(_, min, max) => {
                value.to_integer().is_some_and(|n| (min..=max).contains(&n))
            }
        }
    }
}

/// Rule specification for one (component kind, METHOD) pair.
#[derive(Debug)]
pub struct RuleSpec {
    /// Component kind the table governs.
    pub kind: ComponentKind,
    /// How many components of this kind the calendar object may carry.
    pub instances: Cardinality,
    /// Property rows. Unlisted properties (COMMENT, X-, IANA) are `0+`.
    pub properties: &'static [(PropertyKind, Cardinality)],
    /// Nested component rows. Unlisted kinds are not constrained.
    pub components: &'static [(ComponentKind, Cardinality)],
    /// Presence-dependent constraints.
    pub conditions: &'static [Conditional],
    /// Value constraints, checked after cardinality.
    pub values: &'static [ValueRule],
}

impl RuleSpec {
    /// Returns the cardinality this table assigns to a property.
    #[must_use]
    pub fn property_rule(&self, kind: PropertyKind) -> Cardinality {
        self.properties
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(Cardinality::Any, |(_, c)| *c)
    }

    /// Returns the cardinality this table assigns to a nested component.
    #[must_use]
    pub fn component_rule(&self, kind: ComponentKind) -> Cardinality {
        self.components
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(Cardinality::Any, |(_, c)| *c)
    }

    /// Returns the properties this table constrains with the given cardinality.
    pub fn properties_with(&self, cardinality: Cardinality) -> impl Iterator<Item = PropertyKind> {
        self.properties
            .iter()
            .filter(move |(_, c)| *c == cardinality)
            .map(|(k, _)| *k)
    }

    /// Returns the value rules that apply to a property.
    pub fn value_rules_for(&self, kind: PropertyKind) -> impl Iterator<Item = &ValueRule> {
        self.values.iter().filter(move |rule| rule.property() == kind)
    }

    /// Applies every row of this table to `component`.
    ///
    /// Each rule is evaluated independently. Value rules only run for
    /// properties present exactly once in a context that admits them.
    pub(crate) fn evaluate(
        &self,
        component: &Component,
        options: ValidationOptions,
        out: &mut Collector,
    ) {
        for &(kind, expected) in self.properties {
            if out.is_done() {
                return;
            }
            if let Err(err) = assert_cardinality(kind, expected, component.properties.as_slice()) {
                out.push(err.within(self.kind));
            }
        }

        for &(kind, expected) in self.components {
            if out.is_done() {
                return;
            }
            if let Err(err) = assert_cardinality(kind, expected, component.children.as_slice()) {
                out.push(err.within(self.kind));
            }
        }

        for condition in self.conditions {
            if out.is_done() {
                return;
            }
            self.check_condition(*condition, component, out);
        }

        if options.enforce_value_constraints {
            for rule in self.values {
                if out.is_done() {
                    return;
                }
                self.check_value(*rule, component, out);
            }
        }

        for child in &component.children {
            if out.is_done() {
                return;
            }
            // Forbidden children were already reported by the component rows.
            if !self.component_rule(child.kind).permits_presence() {
                continue;
            }
            if let Some(nested) = tables::nested(child.kind) {
                nested.evaluate(child, options, out);
            }
        }
    }

    fn check_condition(&self, condition: Conditional, component: &Component, out: &mut Collector) {
        let present = |kind| component.count_properties(kind) > 0;

        match condition {
            Conditional::MutuallyExclusive(a, b) => {
                if present(a) && present(b) {
                    out.push(self.conditional(a, b, ConditionalReason::MutuallyExclusive));
                }
            }
            Conditional::Requires(dependent, prerequisite) => {
                if present(dependent) && !present(prerequisite) {
                    out.push(self.conditional(
                        dependent,
                        prerequisite,
                        ConditionalReason::MissingPrerequisite,
                    ));
                }
            }
            Conditional::CoOccurring(a, b) => match (present(a), present(b)) {
                (true, false) => out.push(self.conditional(a, b, ConditionalReason::MissingCompanion)),
                (false, true) => out.push(self.conditional(b, a, ConditionalReason::MissingCompanion)),
                _ => {}
            },
            Conditional::EndAfterStart(start, end) => {
                let (Some(start_prop), Some(end_prop)) =
                    (single(component, start), single(component, end))
                else {
                    return;
                };
                if !ends_after(start_prop, end_prop) {
                    out.push(self.conditional(end, start, ConditionalReason::EndNotAfterStart));
                }
            }
            Conditional::WhenValue {
                property,
                equals,
                rows,
            } => {
                let matches = single(component, property)
                    .and_then(|p| p.value.as_token())
                    .is_some_and(|token| token.trim().eq_ignore_ascii_case(equals));
                if !matches {
                    return;
                }
                for &(kind, expected) in rows {
                    if let Err(err) =
                        assert_cardinality(kind, expected, component.properties.as_slice())
                    {
                        out.push(err.within(self.kind));
                    }
                }
            }
        }
    }

    fn check_value(&self, rule: ValueRule, component: &Component, out: &mut Collector) {
        let kind = rule.property();
        if !self.property_rule(kind).admits(1) {
            return;
        }
        let Some(prop) = single(component, kind) else {
            return;
        };
        if !rule.accepts(&prop.value) {
            out.push(ValidationViolation::ValueConstraintViolation {
                component: self.kind,
                identifier: kind,
                allowed: rule.allowed(),
                actual: prop.value.to_string(),
            });
        }
    }

    fn conditional(
        &self,
        identifier: PropertyKind,
        related: PropertyKind,
        reason: ConditionalReason,
    ) -> ValidationViolation {
        ValidationViolation::ConditionalConstraintViolation {
            component: self.kind,
            identifier,
            related,
            reason,
        }
    }
}

/// Returns the property of `kind` when the component carries exactly one.
fn single(component: &Component, kind: PropertyKind) -> Option<&Property> {
    let mut matches = component.properties_of(kind);
    let first = matches.next()?;
    matches.next().is_none().then_some(first)
}

/// Compares two date or date-time properties.
///
/// Offsets are not resolved here, so values in different time zones are not
/// ordered and pass. Mixed or untyped values pass as well.
fn ends_after(start: &Property, end: &Property) -> bool {
    if start.get_param_value("TZID") != end.get_param_value("TZID") {
        return true;
    }
    match (&start.value, &end.value) {
        (Value::DateTime(s), Value::DateTime(e)) => e > s,
        (Value::Date(s), Value::Date(e)) => e > s,
        _ => true,
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
