//! Application configuration. Optional overrides for the notes root and the reference date.
//!
//! No config file is read; only `WEEKLY_NOTES_*` environment variables. The binary loads a
//! `.env` once before calling [`AppConfig::load`]; values already in the process environment
//! take precedence over `.env` entries.

use crate::domain::DomainError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

/// Prefix for environment overrides, e.g. `WEEKLY_NOTES_ROOT`.
pub const ENV_PREFIX: &str = "WEEKLY_NOTES";

/// Date format accepted by `WEEKLY_NOTES_DATE`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Root of the notes tree. Read from WEEKLY_NOTES_ROOT. Defaults to the current directory.
    #[serde(default)]
    pub root: Option<String>,

    /// Reference date (YYYY-MM-DD) used instead of the system clock. Read from WEEKLY_NOTES_DATE.
    #[serde(default)]
    pub date: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Returns the notes root. Defaults to "." (the process working directory).
    pub fn root_or_default(&self) -> PathBuf {
        self.root
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Returns the pinned reference date, if one is configured.
    ///
    /// # Errors
    /// `DomainError::Config` when the value is not a `YYYY-MM-DD` date.
    pub fn reference_date(&self) -> Result<Option<NaiveDate>, DomainError> {
        let Some(raw) = self.date.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|e| DomainError::Config(format!("{}_DATE={:?}: {}", ENV_PREFIX, raw, e)))
    }
}
