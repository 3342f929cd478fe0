pub mod model;

pub use model::AppConfig;

use anyhow::Result;

pub const APP_NAME: &str = "lexiquest";

pub fn load_config() -> Result<AppConfig> {
    crate::config::load(APP_NAME)
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    crate::config::save(APP_NAME, config)
}
