use crate::core::clock::{FixedClock, SystemClock};
use crate::core::time::TimeFormatter;
use crate::domain::ports::Clock;
use crate::utils::error::{DsError, Result};
use crate::utils::validation::{self, Validate};
use chrono::{DateTime, FixedOffset, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const MINUTES_PER_DAY: i32 = 24 * 60;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DsConfig {
    pub display: DisplayConfig,
    pub clock: ClockConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Offset applied when rendering epoch-second timestamps.
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// RFC 3339 instant to use as "now" instead of the system clock.
    pub fixed_now: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }
}

impl DsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DsError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_open_range(
            "display.utc_offset_minutes",
            self.display.utc_offset_minutes,
            -MINUTES_PER_DAY,
            MINUTES_PER_DAY,
        )?;

        if let Some(fixed_now) = &self.clock.fixed_now {
            validation::validate_rfc3339("clock.fixed_now", fixed_now)?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn display_offset(&self) -> Result<FixedOffset> {
        let minutes = self.display.utc_offset_minutes;
        FixedOffset::east_opt(minutes * 60).ok_or_else(|| DsError::InvalidConfigValueError {
            field: "display.utc_offset_minutes".to_string(),
            value: minutes.to_string(),
            reason: "Offset out of range".to_string(),
        })
    }

    pub fn clock(&self) -> Result<Arc<dyn Clock>> {
        match &self.clock.fixed_now {
            Some(fixed_now) => {
                let now = DateTime::parse_from_rfc3339(fixed_now).map_err(|e| {
                    DsError::InvalidConfigValueError {
                        field: "clock.fixed_now".to_string(),
                        value: fixed_now.clone(),
                        reason: e.to_string(),
                    }
                })?;
                tracing::debug!("using fixed clock at {}", now);
                Ok(Arc::new(FixedClock(now.with_timezone(&Utc))))
            }
            None => Ok(Arc::new(SystemClock)),
        }
    }

    /// The formatter this configuration describes.
    pub fn time_formatter(&self) -> Result<TimeFormatter> {
        Ok(TimeFormatter::new()
            .with_shared_clock(self.clock()?)
            .with_offset(self.display_offset()?))
    }
}

impl Validate for DsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
