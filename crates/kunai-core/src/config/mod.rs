use anyhow::Result;
use config::Config;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_PRODID;
use crate::error::{CoreError, CoreResult};
use crate::types::DateForm;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub prodid: String,
    pub date_form: DateForm,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            prodid: DEFAULT_PRODID.to_string(),
            date_form: DateForm::Utc,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the result fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("calendar.prodid", DEFAULT_PRODID)?
            .set_default("calendar.date_form", DateForm::Utc.as_str())?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file
            .add_source(
                config::Environment::with_prefix("KUNAI")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        tracing::debug!(
            prodid = %settings.calendar.prodid,
            date_form = %settings.calendar.date_form,
            "Configuration loaded"
        );

        Ok(settings)
    }

    /// ## Summary
    /// Checks values the deserializer cannot reject on its own.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if any section is invalid.
    pub fn validate(&self) -> CoreResult<()> {
        self.calendar.validate()?;
        self.logging.env_filter()?;
        Ok(())
    }
}

impl LoggingConfig {
    /// ## Summary
    /// Builds the subscriber filter for the configured level directive
    /// (e.g. `info` or `kunai_rfc=trace,warn`).
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the directive does not parse.
    pub fn env_filter(&self) -> CoreResult<EnvFilter> {
        EnvFilter::try_new(self.level.as_str()).map_err(|e| {
            CoreError::InvalidConfiguration(format!("logging.level {:?}: {e}", self.level))
        })
    }
}

impl CalendarConfig {
    /// ## Summary
    /// Checks that the PRODID can be emitted as a single property line.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the PRODID is blank or
    /// spans more than one line.
    pub fn validate(&self) -> CoreResult<()> {
        if self.prodid.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "calendar.prodid must not be empty".to_string(),
            ));
        }
        if self.prodid.contains(['\r', '\n']) {
            return Err(CoreError::InvalidConfiguration(
                "calendar.prodid must be a single line".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
