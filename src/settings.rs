//! # Settings
//!
//! Runtime configuration, layered with the `config` crate:
//!
//! 1. built-in defaults
//! 2. optional `config/restaurant.{toml,json,yaml}`
//! 3. `RESTAURANT__<SECTION>__<KEY>` environment variables, e.g.
//!    `RESTAURANT__KITCHEN__GRACE_MINUTES=5`

use crate::kitchen::AgingPolicy;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the optional settings file, without extension.
pub const DEFAULT_SETTINGS_FILE: &str = "config/restaurant";

/// Longest daily revenue series a report will build.
pub const MAX_DAILY_REVENUE_DAYS: usize = 366;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub restaurant: RestaurantSettings,
    pub actors: ActorSettings,
    pub kitchen: AgingPolicy,
    pub reporting: ReportingSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RestaurantSettings {
    /// Printed at the top of receipts.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActorSettings {
    /// Request channel capacity of each collection actor.
    pub channel_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportingSettings {
    pub best_seller_limit: usize,
    pub top_category_limit: usize,
    pub daily_revenue_days: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            restaurant: RestaurantSettings {
                name: "Jabba's Kitchen".to_string(),
            },
            actors: ActorSettings {
                channel_capacity: 32,
            },
            kitchen: AgingPolicy::default(),
            reporting: ReportingSettings::default(),
        }
    }
}

impl Default for ReportingSettings {
    fn default() -> Self {
        Self {
            best_seller_limit: 5,
            top_category_limit: 4,
            daily_revenue_days: 7,
        }
    }
}

impl Settings {
    /// Loads defaults, then [`DEFAULT_SETTINGS_FILE`] if present, then the environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(DEFAULT_SETTINGS_FILE)
    }

    /// Like [`Settings::load`] with a different settings file. A missing file is not an
    /// error.
    pub fn load_from(path: &str) -> Result<Self, SettingsError> {
        let config = Self::defaults()?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("RESTAURANT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Self::finish(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let d = Settings::default();
        Config::builder()
            .set_default("restaurant.name", d.restaurant.name)?
            .set_default("actors.channel_capacity", d.actors.channel_capacity as i64)?
            .set_default(
                "kitchen.default_prep_minutes",
                i64::from(d.kitchen.default_prep_minutes),
            )?
            .set_default("kitchen.grace_minutes", i64::from(d.kitchen.grace_minutes))?
            .set_default(
                "reporting.best_seller_limit",
                d.reporting.best_seller_limit as i64,
            )?
            .set_default(
                "reporting.top_category_limit",
                d.reporting.top_category_limit as i64,
            )?
            .set_default(
                "reporting.daily_revenue_days",
                d.reporting.daily_revenue_days as i64,
            )
    }

    fn finish(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects values that would stall the actors or empty every report.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("actors.channel_capacity", self.actors.channel_capacity),
            (
                "kitchen.default_prep_minutes",
                self.kitchen.default_prep_minutes as usize,
            ),
            ("reporting.best_seller_limit", self.reporting.best_seller_limit),
            ("reporting.top_category_limit", self.reporting.top_category_limit),
            ("reporting.daily_revenue_days", self.reporting.daily_revenue_days),
        ];
        if let Some((key, _)) = positive.into_iter().find(|(_, value)| *value == 0) {
            return Err(SettingsError::Invalid {
                key,
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.restaurant.name.trim().is_empty() {
            return Err(SettingsError::Invalid {
                key: "restaurant.name",
                reason: "must not be blank".to_string(),
            });
        }
        if self.reporting.daily_revenue_days > MAX_DAILY_REVENUE_DAYS {
            return Err(SettingsError::Invalid {
                key: "reporting.daily_revenue_days",
                reason: format!("must be at most {}", MAX_DAILY_REVENUE_DAYS),
            });
        }
        Ok(())
    }
}
