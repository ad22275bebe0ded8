//! User configuration management

use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::priority::{Classifier, NegationScope};

const APP_DIR_NAME: &str = ".task-triage";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub tasks: TasksConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub negation_scope: NegationScope,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default = "default_overdue_after_days")]
    pub overdue_after_days: i64,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            file: None,
            overdue_after_days: default_overdue_after_days(),
        }
    }
}

fn default_overdue_after_days() -> i64 {
    7
}

/// `$HOME/.task-triage`, created on first use
pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let dir = home.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create app directory {}", dir.display()))?;
    Ok(dir)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.classifier.negation_scope)
    }

    /// Saturates at `Duration::MAX` for day counts chrono cannot represent.
    pub fn overdue_threshold(&self) -> Duration {
        Duration::try_days(self.tasks.overdue_after_days.max(0)).unwrap_or(Duration::MAX)
    }

    /// Tasks file: explicit override, then config, then `<app dir>/tasks.json`.
    pub fn tasks_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(file) = &self.tasks.file {
            return Ok(expand_home(file));
        }
        Ok(get_app_dir()?.join("tasks.json"))
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.classifier.negation_scope, NegationScope::Text);
        assert_eq!(config.tasks.overdue_after_days, 7);
        assert_eq!(config.overdue_threshold(), Duration::days(7));
        assert!(config.tasks.file.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [classifier]
            negation_scope = "clause"
            "#,
        )
        .unwrap();
        assert_eq!(config.classifier.negation_scope, NegationScope::Clause);
        assert_eq!(config.tasks.overdue_after_days, 7);
        assert_eq!(config.classifier().scope(), NegationScope::Clause);
    }

    #[test]
    fn test_negative_overdue_days_clamped() {
        let mut config = Config::default();
        config.tasks.overdue_after_days = -3;
        assert_eq!(config.overdue_threshold(), Duration::zero());
    }

    #[test]
    fn test_huge_overdue_days_saturate() {
        let config: Config = toml::from_str(
            r#"
            [tasks]
            overdue_after_days = 9223372036854775807
            "#,
        )
        .unwrap();
        assert_eq!(config.overdue_threshold(), Duration::MAX);
    }

    #[test]
    fn test_override_path_wins() -> Result<()> {
        let mut config = Config::default();
        config.tasks.file = Some("/elsewhere/tasks.json".to_string());
        let path = config.tasks_path(Some(Path::new("/tmp/mine.json")))?;
        assert_eq!(path, PathBuf::from("/tmp/mine.json"));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_tasks_path_resolution() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let mut config = Config::default();
        assert_eq!(
            config.tasks_path(None)?,
            temp.path().join(".task-triage").join("tasks.json")
        );

        config.tasks.file = Some("~/notes/tasks.json".to_string());
        assert_eq!(
            config.tasks_path(None)?,
            temp.path().join("notes").join("tasks.json")
        );
        Ok(())
    }

    #[test]
    #[serial]
    fn test_config_roundtrip() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        assert!(load_config()?.is_none());

        let mut config = Config::default();
        config.classifier.negation_scope = NegationScope::Clause;
        config.tasks.overdue_after_days = 3;
        save_config(&config)?;

        let loaded = Config::load()?;
        assert_eq!(loaded.classifier.negation_scope, NegationScope::Clause);
        assert_eq!(loaded.tasks.overdue_after_days, 3);
        Ok(())
    }
}
