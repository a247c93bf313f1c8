use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONTENT_ENV: &str = "DECK_CONTENT";
pub const LOG_FILE_ENV: &str = "DECK_LOG_FILE";
pub const LOG_LEVEL_ENV: &str = "DECK_LOG_LEVEL";

/// Deck configuration, read from `<config dir>/deck/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Content file shown instead of the built-in deck.
    pub content: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub log_level: String,
    /// Show the key hint line under the footer.
    pub show_help: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            content: None,
            log_path: None,
            log_level: "info".to_string(),
            show_help: true,
        }
    }
}

impl DeckConfig {
    /// Get config file path. `None` when the platform has no config
    /// directory.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("deck").join("config.toml"))
    }

    /// Load configuration from the default location, then apply environment
    /// overrides.
    pub async fn load() -> Result<Self> {
        Self::load_with(Self::config_path().as_deref(), |key| std::env::var(key).ok()).await
    }

    /// Without a config path the defaults are used, as for a missing file.
    pub async fn load_with(path: Option<&Path>, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path).await?,
            None => Self::default(),
        };
        config.apply_env(lookup);
        Ok(config)
    }

    /// A missing file yields the defaults.
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let config: DeckConfig =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Environment values win over file values. `lookup` is `std::env::var`
    /// outside of tests.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(CONTENT_ENV) {
            self.content = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(LOG_FILE_ENV) {
            self.log_path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.log_level = level;
        }
    }

    /// Explicit log path, or `<data dir>/deck/deck.log`.
    pub fn resolved_log_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("deck").join("deck.log")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeckConfig::load_from(&dir.path().join("config.toml")).await.unwrap();
        assert_eq!(config, DeckConfig::default());
        assert!(config.show_help);
        assert_eq!(config.log_level, "info");
    }

    #[tokio::test]
    async fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "content = \"talk.json\"\nshow_help = false\n").unwrap();
        let config = DeckConfig::load_from(&path).await.unwrap();
        assert_eq!(config.content, Some(PathBuf::from("talk.json")));
        assert!(!config.show_help);
        assert_eq!(config.log_level, "info");
    }

    #[tokio::test]
    async fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "show_help = \"maybe\"").unwrap();
        let err = DeckConfig::load_from(&path).await.unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (CONTENT_ENV, "/tmp/deck.toml"),
            (LOG_LEVEL_ENV, "trace"),
        ]);
        let mut config = DeckConfig {
            content: Some(PathBuf::from("from-file.json")),
            ..DeckConfig::default()
        };
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.content, Some(PathBuf::from("/tmp/deck.toml")));
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.log_path, None);
    }

    #[tokio::test]
    async fn test_no_config_dir_gives_defaults_plus_env() {
        let config = DeckConfig::load_with(None, |key| (key == LOG_LEVEL_ENV).then(|| "warn".to_string()))
            .await
            .unwrap();
        assert_eq!(
            config,
            DeckConfig {
                log_level: "warn".to_string(),
                ..DeckConfig::default()
            }
        );
    }

    #[test]
    fn test_explicit_log_path_wins() {
        let config = DeckConfig {
            log_path: Some(PathBuf::from("/tmp/x.log")),
            ..DeckConfig::default()
        };
        assert_eq!(config.resolved_log_path(), Some(PathBuf::from("/tmp/x.log")));
    }
}
