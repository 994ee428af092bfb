use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::CoreResult;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub validation: ValidationSettings,
    pub logging: LoggingConfig,
}

/// ## Summary
/// How the validator reacts to the first violation it discovers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Evaluate every rule and report all violations.
    #[default]
    CollectAll,
    /// Stop at the first violation.
    FailFast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationSettings {
    pub failure_mode: FailureMode,
    pub check_sequence_ordering: bool,
    pub enforce_value_constraints: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            failure_mode: FailureMode::CollectAll,
            check_sequence_ordering: true,
            enforce_value_constraints: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `tessen.toml`
    /// into a `Settings`. Environment variables take precedence over file values.
    ///
    /// Environment keys use the `TESSEN_` prefix and `__` between sections, e.g.
    /// `TESSEN_VALIDATION__FAILURE_MODE=fail_fast`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Ok(Config::builder()
            .set_default("validation.failure_mode", "collect_all")?
            .set_default("validation.check_sequence_ordering", true)?
            .set_default("validation.enforce_value_constraints", true)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("tessen.toml").required(false))
            // Env overrides file
            .add_source(
                config::Environment::with_prefix("TESSEN")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Settings loaded");
    Ok(settings)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
