//! ## Summary
//! Validation outcome and the collector that builds it.

use serde::Serialize;
use tessen_core::config::FailureMode;

use super::violation::ValidationViolation;

/// The ordered violations found in one validation run.
///
/// Violations appear in evaluation order: the dispatch checks first, then each
/// component's rule table top to bottom, then cross-component consistency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    violations: Vec<ValidationViolation>,
}

impl ValidationReport {
    /// Returns whether no violation was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns whether the report is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations in evaluation order.
    #[must_use]
    pub fn violations(&self) -> &[ValidationViolation] {
        &self.violations
    }

    /// Converts the report into a `Result`.
    ///
    /// ## Errors
    /// Returns the violations when there is at least one.
    pub fn into_result(self) -> Result<(), Vec<ValidationViolation>> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.violations)
        }
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationViolation;
    type IntoIter = std::vec::IntoIter<ValidationViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationViolation;
    type IntoIter = std::slice::Iter<'a, ValidationViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Accumulates violations, honouring the configured failure mode.
#[derive(Debug)]
pub(crate) struct Collector {
    mode: FailureMode,
    violations: Vec<ValidationViolation>,
}

impl Collector {
    pub(crate) fn new(mode: FailureMode) -> Self {
        Self {
            mode,
            violations: Vec::new(),
        }
    }

    /// Records a violation. In fail-fast mode only the first one is kept.
    pub(crate) fn push(&mut self, violation: ValidationViolation) {
        if self.is_done() {
            return;
        }
        tracing::trace!(%violation, "Violation recorded");
        self.violations.push(violation);
    }

    /// Returns whether further evaluation can no longer change the outcome.
    pub(crate) fn is_done(&self) -> bool {
        self.mode == FailureMode::FailFast && !self.violations.is_empty()
    }

    pub(crate) fn finish(self) -> ValidationReport {
        ValidationReport {
            violations: self.violations,
        }
    }
}
