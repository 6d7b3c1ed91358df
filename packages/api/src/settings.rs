//! Server settings layered from defaults, `travel.toml` and `TRAVEL__*` env vars.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::service::MockApi;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    pub api: MockApi,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file("travel.toml")
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let defaults = MockApi::default();
        let config = Config::builder()
            .set_default("api.delay_ms", defaults.delay_ms as i64)?
            .set_default("api.simulate_failure", defaults.simulate_failure)?
            .add_source(File::with_name(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("TRAVEL").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Load settings, falling back to defaults when the sources are unreadable.
    pub fn load() -> Self {
        match Self::new() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::from_file("does-not-exist.toml").unwrap();
        assert_eq!(settings.api.delay_ms, 1500);
        assert_eq!(settings.api.delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_file_and_env_layers() {
        let dir = std::env::temp_dir().join("travel-settings-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("travel.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[api]\ndelay_ms = 20\nsimulate_failure = false").unwrap();

        set_var("TRAVEL__API__SIMULATE_FAILURE", "true");
        let settings = Settings::from_file(path.to_str().unwrap()).unwrap();
        std::env::remove_var("TRAVEL__API__SIMULATE_FAILURE");

        assert_eq!(settings.api.delay_ms, 20);
        assert!(settings.api.simulate_failure);
    }
}
