//! ## Summary
//! Violations reported by the iTIP validator.
//!
//! Violations are plain data: they own copies of the identifiers and values
//! involved and never borrow from the calendar object under validation.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use super::{Cardinality, Method};
use crate::rfc::ical::core::{ComponentKind, PropertyKind};

/// The subject of a cardinality rule: a property or a nested component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier {
    Property(PropertyKind),
    Component(ComponentKind),
}

impl From<PropertyKind> for Identifier {
    fn from(kind: PropertyKind) -> Self {
        Self::Property(kind)
    }
}

impl From<ComponentKind> for Identifier {
    fn from(kind: ComponentKind) -> Self {
        Self::Component(kind)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(kind) => f.write_str(kind.as_str()),
            Self::Component(kind) => f.write_str(kind.as_str()),
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Why a conditional constraint failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionalReason {
    /// Both members of a mutually exclusive pair are present.
    MutuallyExclusive,
    /// A property is present without the property it depends on.
    MissingPrerequisite,
    /// One member of a pair that must appear together is missing.
    MissingCompanion,
    /// An end date/time is not later than its start.
    EndNotAfterStart,
}

impl fmt::Display for ConditionalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MutuallyExclusive => "must not be present together with",
            Self::MissingPrerequisite => "requires",
            Self::MissingCompanion => "must be present together with",
            Self::EndNotAfterStart => "must be later than",
        })
    }
}

/// A count mismatch produced by the assertion primitives.
///
/// It names the identifier but not the owning component; the rule engine
/// attaches that context via [`CardinalityError::within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{identifier} expected {expected}, found {actual}")]
pub struct CardinalityError {
    pub identifier: Identifier,
    pub expected: Cardinality,
    pub actual: usize,
}

impl CardinalityError {
    /// Attaches the owning component kind, producing a reportable violation.
    #[must_use]
    pub fn within(self, component: ComponentKind) -> ValidationViolation {
        ValidationViolation::CardinalityViolation {
            component,
            identifier: self.identifier,
            expected: self.expected,
            actual: self.actual,
        }
    }
}

/// One failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationViolation {
    /// Wrong number of a property or sub-component for its context.
    #[error("{component}: {identifier} expected {expected}, found {actual}")]
    CardinalityViolation {
        component: ComponentKind,
        identifier: Identifier,
        expected: Cardinality,
        actual: usize,
    },

    /// A property is present but its value is not allowed.
    #[error("{component}: {identifier} value {actual:?} not allowed (allowed: {allowed})")]
    ValueConstraintViolation {
        component: ComponentKind,
        identifier: PropertyKind,
        allowed: String,
        actual: String,
    },

    /// A presence-dependent constraint between two properties failed.
    #[error("{component}: {identifier} {reason} {related}")]
    ConditionalConstraintViolation {
        component: ComponentKind,
        identifier: PropertyKind,
        related: PropertyKind,
        reason: ConditionalReason,
    },

    /// A top-level component carries a different UID than the first one.
    #[error("component {component_index}: UID {found:?} differs from {expected:?}")]
    InconsistentIdentifier {
        expected: String,
        found: String,
        component_index: usize,
    },

    /// Two top-level components describe the same instance of one UID.
    #[error("component {component_index}: duplicate instance of UID {uid:?} (RECURRENCE-ID {recurrence_id:?})")]
    DuplicateInstance {
        uid: String,
        recurrence_id: Option<String>,
        component_index: usize,
    },

    /// An overridden instance carries a lower SEQUENCE than its master.
    #[error("component {component_index}: SEQUENCE {instance} of an instance of UID {uid:?} is below the master SEQUENCE {master}")]
    SequenceRegression {
        uid: String,
        master: i64,
        instance: i64,
        component_index: usize,
    },

    /// An overridden instance points at a master that does not recur.
    #[error("component {component_index}: RECURRENCE-ID {recurrence_id:?} on UID {uid:?}, whose master has no RRULE or RDATE")]
    NonRecurringMaster {
        uid: String,
        recurrence_id: String,
        component_index: usize,
    },

    /// No rule specification exists for the (component, method) pair.
    #[error("{component} is not supported with METHOD:{method}")]
    UnsupportedMethod {
        component: ComponentKind,
        method: Method,
    },

    /// The METHOD property carries a token RFC 5546 does not define.
    #[error("unknown METHOD {value:?}")]
    UnknownMethod { value: String },

    /// The calendar object carries no component the METHOD could apply to.
    #[error("METHOD:{method} requires at least one VEVENT, VTODO, VJOURNAL or VFREEBUSY")]
    MissingSchedulingComponent { method: Method },
}

impl ValidationViolation {
    /// Returns the property or component kind the violation is about, if any.
    #[must_use]
    pub fn identifier(&self) -> Option<Identifier> {
        match self {
            Self::CardinalityViolation { identifier, .. } => Some(*identifier),
            Self::ValueConstraintViolation { identifier, .. }
            | Self::ConditionalConstraintViolation { identifier, .. } => {
                Some(Identifier::Property(*identifier))
            }
            Self::InconsistentIdentifier { .. }
            | Self::DuplicateInstance { .. }
            | Self::SequenceRegression { .. } => Some(Identifier::Property(PropertyKind::Uid)),
            Self::NonRecurringMaster { .. } => Some(Identifier::Property(PropertyKind::RecurrenceId)),
            Self::UnsupportedMethod { component, .. } => Some(Identifier::Component(*component)),
            Self::UnknownMethod { .. } | Self::MissingSchedulingComponent { .. } => None,
        }
    }

    /// Returns whether this is a cardinality violation.
    #[must_use]
    pub fn is_cardinality(&self) -> bool {
        matches!(self, Self::CardinalityViolation { .. })
    }
}
