//! Reading calendar documents from files or standard input.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tessen_rfc::rfc::ical::core::ICalendar;

/// ## Summary
/// Loads a JSON calendar document from `path`, or from standard input when
/// no path is given.
///
/// ## Errors
/// Returns an error if the input cannot be read or is not a calendar object.
pub fn load_document(path: Option<&Path>) -> anyhow::Result<ICalendar> {
    let input = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read standard input")?;
            buf
        }
    };
    parse_document(&input)
}

/// ## Summary
/// Parses a JSON calendar document.
///
/// ## Errors
/// Returns an error if the document is not a JSON-encoded VCALENDAR.
pub fn parse_document(input: &str) -> anyhow::Result<ICalendar> {
    let calendar = ICalendar::from_json(input)?;
    tracing::debug!(
        components = calendar.components().len(),
        method = calendar.method().unwrap_or_default(),
        "Document loaded"
    );
    Ok(calendar)
}
