//! Command-line front end for the iTIP validator.

pub mod input;

use tessen_core::config::ValidationSettings;
use tessen_rfc::rfc::ical::core::ICalendar;
use tessen_rfc::rfc::itip::{ValidationOptions, ValidationReport, Validator};

/// ## Summary
/// Validates a calendar object with options taken from the settings.
#[must_use]
pub fn check(settings: &ValidationSettings, calendar: &ICalendar) -> ValidationReport {
    Validator::new(ValidationOptions::from(settings)).validate_calendar(calendar)
}
