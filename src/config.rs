//! User configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::greeting::DEFAULT_REFRESH_INTERVAL;

/// Overrides the directory holding `config.toml` and the debug log.
pub const CONFIG_DIR_ENV: &str = "DAILY_PLANNER_CONFIG_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub greeting: GreetingConfig,

    #[serde(default)]
    pub tasks: TasksConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
        }
    }
}

fn default_theme_name() -> String {
    "planner".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl GreetingConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL.as_secs()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Ask before deleting a task from the list.
    #[serde(default)]
    pub confirm_delete: bool,
}

pub fn get_app_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join("daily-planner"))
        .ok_or(ConfigError::NoConfigDir)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    /// Loads the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }

    /// Like [`Config::load`], but writes the defaults to `config.toml` on
    /// first run so there is a file to edit. A failed write is only logged.
    pub fn load_or_init() -> Result<Self> {
        if let Some(config) = load_config()? {
            return Ok(config);
        }
        let config = Config::default();
        match save_config(&config) {
            Ok(()) => tracing::info!("Wrote default config to {}", config_path()?.display()),
            Err(e) => tracing::warn!("Could not write default config: {}", e),
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }
    Config::load_from(&path).map(Some)
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.theme.name, "planner");
        assert_eq!(config.greeting.refresh_interval_secs, 3600);
        assert!(!config.tasks.confirm_delete);
    }

    #[test]
    fn test_config_deserialize_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme.name, "planner");
        assert_eq!(config.greeting.refresh_interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_config_deserialize_partial_toml() {
        let toml = r#"
            [tasks]
            confirm_delete = true
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.tasks.confirm_delete);
        // Other sections keep defaults
        assert_eq!(config.theme.name, "planner");
        assert_eq!(config.greeting.refresh_interval_secs, 3600);
    }

    #[test]
    fn test_config_nested_sections() {
        let toml = r#"
            [theme]
            name = "phosphor"

            [greeting]
            refresh_interval_secs = 60

            [tasks]
            confirm_delete = true
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.theme.name, "phosphor");
        assert_eq!(config.greeting.refresh_interval(), Duration::from_secs(60));
        assert!(config.tasks.confirm_delete);
    }

    #[test]
    fn test_greeting_config_rejects_negative_interval() {
        let result: std::result::Result<GreetingConfig, _> =
            toml::from_str("refresh_interval_secs = -5");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_reports_parse_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[greeting]\nrefresh_interval_secs = \"soon\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
