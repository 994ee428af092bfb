use std::path::PathBuf;
use std::process::ExitCode;

use tessen_app::check;
use tessen_app::input::load_document;
use tessen_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<ExitCode> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let calendar = load_document(path.as_deref())?;

    let report = check(&config.validation, &calendar);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.is_valid() {
        tracing::info!("Calendar object is valid");
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(violations = report.len(), "Calendar object is invalid");
        Ok(ExitCode::FAILURE)
    }
}
