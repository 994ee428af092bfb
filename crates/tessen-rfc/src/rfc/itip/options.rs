//! Validation options.

use tessen_core::config::{FailureMode, ValidationSettings};

/// Tunables for a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Whether to stop at the first violation.
    pub failure_mode: FailureMode,
    /// Whether overridden instances may not carry a lower SEQUENCE than their master.
    pub check_sequence_ordering: bool,
    /// Whether STATUS, SEQUENCE, PRIORITY and similar values are checked.
    pub enforce_value_constraints: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            failure_mode: FailureMode::CollectAll,
            check_sequence_ordering: true,
            enforce_value_constraints: true,
        }
    }
}

impl ValidationOptions {
    /// Returns options that stop at the first violation.
    #[must_use]
    pub fn fail_fast() -> Self {
        Self {
            failure_mode: FailureMode::FailFast,
            ..Self::default()
        }
    }

    /// Returns these options with value constraints toggled.
    #[must_use]
    pub const fn with_value_constraints(mut self, enabled: bool) -> Self {
        self.enforce_value_constraints = enabled;
        self
    }

    /// Returns these options with the SEQUENCE ordering check toggled.
    #[must_use]
    pub const fn with_sequence_ordering(mut self, enabled: bool) -> Self {
        self.check_sequence_ordering = enabled;
        self
    }
}

impl From<&ValidationSettings> for ValidationOptions {
    fn from(settings: &ValidationSettings) -> Self {
        Self {
            failure_mode: settings.failure_mode,
            check_sequence_ordering: settings.check_sequence_ordering,
            enforce_value_constraints: settings.enforce_value_constraints,
        }
    }
}
