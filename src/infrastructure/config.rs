// src/infrastructure/config.rs
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// TOML configuration for the vocabulary deck
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DeckConfig {
    /// Anki deck id
    #[serde(default = "default_deck_id")]
    pub id: i64,
    /// Anki model (notetype) id
    #[serde(default = "default_model_id")]
    pub model_id: i64,
    #[serde(default = "default_deck_name")]
    pub name: String,
    /// Base file name; `.db` and `.apkg` paths derive from it
    #[serde(default = "default_file")]
    pub file: String,
}

// Default value functions
fn default_deck_id() -> i64 {
    2059400110
}
fn default_model_id() -> i64 {
    1607392319
}
fn default_deck_name() -> String {
    "German Vocabulary".to_string()
}
fn default_file() -> String {
    "german_vocabulary".to_string()
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            id: default_deck_id(),
            model_id: default_model_id(),
            name: default_deck_name(),
            file: default_file(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn given_no_file_when_creating_default_then_creates_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("wortschatz.toml");

        let config = Config::create_default(&config_path).unwrap();

        assert_eq!(config.deck.id, 2059400110);
        assert_eq!(config.deck.model_id, 1607392319);
        assert_eq!(config.deck.name, "German Vocabulary");
        assert_eq!(config.deck.file, "german_vocabulary");
        assert!(config_path.exists());
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load_test.toml");

        let toml_content = r#"
[deck]
id = 42
model_id = 43
name = "B1 Wortschatz"
file = "b1_vocab"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.deck.id, 42);
        assert_eq!(config.deck.model_id, 43);
        assert_eq!(config.deck.name, "B1 Wortschatz");
        assert_eq!(config.deck.file, "b1_vocab");
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");

        fs::write(&config_path, "[deck]\nfile = \"mine\"\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.deck.file, "mine");
        assert_eq!(config.deck.id, 2059400110);
        assert_eq!(config.deck.name, "German Vocabulary");
    }

    #[test]
    fn given_nonexistent_file_when_loading_then_returns_error() {
        let result = Config::load("/nonexistent/path/config.toml");

        assert!(result.is_err());
    }

    #[test]
    fn given_round_trip_when_saving_and_loading_then_preserves_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roundtrip.toml");

        let original = Config {
            deck: DeckConfig {
                id: 7,
                model_id: 8,
                name: "Test Deck".to_string(),
                file: "test_deck".to_string(),
            },
        };

        original.save(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();

        assert_eq!(loaded, original);
    }
}
