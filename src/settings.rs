use anyhow::Result;
use chrono::NaiveDate;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SlaError;
use crate::rules::RuleSet;

/// Mutable deployment configuration for the SLA engine.
///
/// Holds the active rule set, business-hours window, holiday calendar, and
/// the tracked project identifier. Always passed by value into `calculate`
/// and `aggregate` call sites; the engine reads no ambient global state, so
/// two evaluations with different settings can run side by side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SlaSettings {
    /// Project key in the external tracker whose issues are evaluated.
    pub project_key: String,
    /// Active per-priority rule set.
    pub rules: RuleSet,
    /// Business-hours window. Carried for rules flagged `business_hours_only`;
    /// the default calculation path does not consume it.
    pub business_hours: BusinessHours,
    /// Holiday calendar, same caveat as `business_hours`.
    pub holidays: Vec<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BusinessHours {
    /// Start of the working day, hour of day 0-23.
    pub start_hour: u8,
    /// End of the working day, exclusive, 1-24 (24 = midnight).
    pub end_hour: u8,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}

impl Default for SlaSettings {
    fn default() -> Self {
        Self {
            project_key: String::new(),
            rules: RuleSet::default(),
            business_hours: BusinessHours::default(),
            holidays: Vec::new(),
        }
    }
}

impl SlaSettings {
    /// Load settings with precedence:
    /// 1. Built-in defaults
    /// 2. Configuration file (`slatrack.toml`)
    /// 3. Environment variables, `__`-separated because the keys themselves
    ///    contain underscores: `SLATRACK__PROJECT_KEY`,
    ///    `SLATRACK__BUSINESS_HOURS__START_HOUR`,
    ///    `SLATRACK__RULES__CRITICAL__RESOLUTION_HOURS`, ...
    ///
    /// Defaults come from `#[serde(default)]` on the settings structs, so a
    /// bare environment with no file and no variables loads cleanly. The
    /// result is validated; non-positive deadlines are rejected here rather
    /// than surfacing as division errors during evaluation.
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();

        if Path::new("slatrack.toml").exists() {
            builder = builder.add_source(File::with_name("slatrack"));
        }

        builder = builder.add_source(
            Environment::with_prefix("SLATRACK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let settings: SlaSettings = config.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    /// Check the rule set and the business-hours window. Non-positive
    /// deadlines and inverted windows are configuration errors, caught here
    /// instead of surfacing as nonsense percentages later.
    pub fn validate(&self) -> Result<(), SlaError> {
        self.rules.validate()?;
        let window = &self.business_hours;
        if window.end_hour > 24 || window.start_hour >= window.end_hour {
            return Err(SlaError::InvalidSettings {
                reason: format!(
                    "business hours window {}-{} is not a valid range",
                    window.start_hour, window.end_hour
                ),
            });
        }
        Ok(())
    }

    /// Save settings to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load a `.env` file if one exists.
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}
