use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::calendar::HolidayTable;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub ui: UiConfig,
    #[serde(default)]
    pub holidays: HolidaysConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub theme: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HolidaysConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_at(&Self::config_path())
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            info!(path = %path.display(), "created default config");
            Ok(config)
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nexus-cal")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// The configured holiday table, or the built-in one when no file is
    /// configured or the file cannot be loaded.
    pub fn holiday_table(&self) -> HolidayTable {
        let Some(path) = &self.holidays.path else {
            return HolidayTable::builtin();
        };

        match HolidayTable::load(path) {
            Ok(table) => {
                info!(path = %path.display(), year = table.year(), count = table.len(), "loaded holiday table");
                table
            }
            Err(e) => {
                warn!(path = %path.display(), "falling back to built-in holidays: {}", e);
                HolidayTable::builtin()
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig {
                theme: "default".to_string(),
            },
            holidays: HolidaysConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_uses_default_theme() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "default");
        assert_eq!(config.holidays.path, None);
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [ui]
            theme = "nord"

            [holidays]
            path = "/etc/nexus/feriados-2026.toml"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.ui.theme, "nord");
        assert_eq!(config.holidays.path, Some(PathBuf::from("/etc/nexus/feriados-2026.toml")));
    }

    #[test]
    fn holidays_section_is_optional() {
        let config = Config::from_toml("[ui]\ntheme = \"gruvbox\"\n").unwrap();
        assert_eq!(config.holidays, HolidaysConfig::default());
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let result = Config::from_toml("[ui\ntheme = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_or_create_writes_defaults_then_reads_them_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_or_create_at(&path).unwrap();
        assert!(path.exists());

        let loaded = Config::load_or_create_at(&path).unwrap();
        assert_eq!(created, loaded);
    }

    #[test]
    fn holiday_table_defaults_to_builtin() {
        let table = Config::default().holiday_table();
        assert_eq!(table.year(), 2025);
    }

    #[test]
    fn holiday_table_loads_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feriados.toml");
        std::fs::write(&path, "[[holiday]]\ndate = \"2026-12-25\"\nname = \"Natal\"\ncolor = \"#FF6B9D\"\n").unwrap();

        let mut config = Config::default();
        config.holidays.path = Some(path);

        let table = config.holiday_table();
        assert_eq!(table.year(), 2026);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn unreadable_holiday_file_falls_back_to_builtin() {
        let mut config = Config::default();
        config.holidays.path = Some(PathBuf::from("/nonexistent/feriados.toml"));

        assert_eq!(config.holiday_table(), HolidayTable::builtin());
    }
}
