//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Learner profile shown in the sidebar and header. Demo values by
/// default; nothing here feeds back into card navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Current daily streak shown in the sidebar panel.
    #[serde(default = "default_streak_days")]
    pub streak_days: u32,
    /// Streak length at which the next milestone unlocks.
    #[serde(default = "default_streak_milestone")]
    pub streak_milestone: u32,
    #[serde(default = "default_xp")]
    pub xp: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            streak_days: default_streak_days(),
            streak_milestone: default_streak_milestone(),
            xp: default_xp(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval of the refresh tick driving the status-bar clock.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            level: default_log_level(),
        }
    }
}

fn default_display_name() -> String {
    "Explorer".to_string()
}

fn default_streak_days() -> u32 {
    7
}

fn default_streak_milestone() -> u32 {
    10
}

fn default_xp() -> u32 {
    2450
}

fn default_tick_rate_ms() -> u64 {
    200
}

fn default_logging_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
