//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "TRIPCLI_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tripadvisor Content API key.
    pub api_key: Option<String>,

    /// Default response language.
    pub language: Option<String>,

    /// Default currency for prices.
    pub currency: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

/// Keys accepted by `tripcli config set`.
pub const KEYS: &[(&str, &str)] = &[
    ("api_key", "Your Tripadvisor Content API key"),
    ("language", "Default response language (e.g. en, fr, es)"),
    ("currency", "Default ISO 4217 currency (e.g. USD, EUR)"),
    ("output_format", "Default output format (pretty/json/yaml)"),
];

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "tripadvisor-rs", "tripcli")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Config file path: `explicit` if given, the default location otherwise.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        explicit.map_or_else(Self::default_path, |p| Ok(p.to_path_buf()))
    }

    /// Load configuration from file; a missing file is an empty configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set one key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_key" | "key" => self.api_key = Some(value.to_string()),
            "language" | "lang" => self.language = Some(value.to_string()),
            "currency" => self.currency = Some(value.to_uppercase()),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            _ => {
                let available: Vec<String> = KEYS
                    .iter()
                    .map(|(name, help)| format!("  {name:<14} - {help}"))
                    .collect();
                anyhow::bail!(
                    "Unknown config key: {key}\n\nAvailable keys:\n{}",
                    available.join("\n")
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("api_key", "abc123").unwrap();
        config.set("currency", "eur").unwrap();
        config.set("output", "json").unwrap();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.api_key.as_deref(), Some("abc123"));
        assert_eq!(loaded.currency.as_deref(), Some("EUR"));
        assert_eq!(loaded.output_format, Some(OutputFormat::Json));
        assert_eq!(loaded.language, None);
    }

    #[test]
    fn test_unknown_key_lists_available() {
        let err = Config::default().set("colour", "blue").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown config key: colour"));
        assert!(message.contains("output_format"));
    }

    #[test]
    fn test_invalid_toml_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_key = [").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
