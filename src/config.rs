//! Config file loading and saving shared by both applications.
//!
//! Each binary keeps its own file under the platform config directory
//! (`~/.config/<app>/config.toml` on Linux). A missing file is not an
//! error: defaults apply, so the apps work out of the box.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub fn config_path(app: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(app)
        .join("config.toml")
}

pub fn load<T>(app: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    load_from(&config_path(app))
}

pub fn load_from<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config = toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

pub fn save<T: Serialize>(app: &str, config: &T) -> Result<()> {
    save_to(&config_path(app), config)
}

pub fn save_to<T: Serialize>(path: &Path, config: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexiquest::config::AppConfig;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg: AppConfig = load_from(&path).unwrap();
        assert_eq!(cfg.profile.display_name, "Explorer");
        assert_eq!(cfg.profile.streak_days, 7);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.profile.streak_days = 12;
        cfg.profile.display_name = "Nova".to_string();
        save_to(&path, &cfg).unwrap();
        let loaded: AppConfig = load_from(&path).unwrap();
        assert_eq!(loaded.profile.streak_days, 12);
        assert_eq!(loaded.profile.display_name, "Nova");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[profile]\ndisplay_name = \"Nova\"\n").unwrap();
        let cfg: AppConfig = load_from(&path).unwrap();
        assert_eq!(cfg.profile.display_name, "Nova");
        assert_eq!(cfg.profile.streak_days, 7);
        assert_eq!(cfg.ui.tick_rate_ms, 200);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [").unwrap();
        assert!(load_from::<AppConfig>(&path).is_err());
    }
}
